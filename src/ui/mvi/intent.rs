//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent describes what the user asked for (add, delete, move the
/// cursor, switch screen), not which key produced it.
pub trait Intent: Send + 'static {}
