//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// `Default` lets the app take the state out of its slot while a reducer
/// runs; `PartialEq` lets tests compare before and after.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
