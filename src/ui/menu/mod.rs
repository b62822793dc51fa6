mod intent;
mod reducer;
mod state;

pub use intent::MenuIntent;
pub use reducer::MenuReducer;
pub use state::{MenuUiState, Notice};
