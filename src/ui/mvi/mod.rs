//! Model-View-Intent (MVI) primitives for the terminal front end.
//!
//! ```text
//! Key ──→ Intent ──→ Reducer ──→ State ──→ View
//!            ↑                              │
//!            └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a screen needs to render
//! - **Intent**: a user action, already decoded from the key press
//! - **Reducer**: pure function applying an intent to a state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
