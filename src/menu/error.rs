use thiserror::Error;

use crate::menu::draft::DraftField;

/// Reasons a draft cannot be committed to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was left empty. Carries the first empty field.
    #[error("Please fill in all fields")]
    MissingField(DraftField),

    /// Price text is not a positive finite number.
    #[error("Please enter a valid price")]
    InvalidPrice,
}
