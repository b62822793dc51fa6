//! Intents for the menu screens.

use crate::menu::{CourseFilter, ItemId, Screen};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuIntent {
    Navigate(Screen),

    /// Type into the focused form field.
    InsertChar(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Course picker, only while it has focus.
    NextCourse,
    PrevCourse,
    /// Save the add form.
    Submit,

    NextFilter,
    PrevFilter,
    SetFilter(CourseFilter),

    CursorUp,
    CursorDown,
    DeleteSelected,
    Delete(ItemId),

    DismissNotice,
}

impl Intent for MenuIntent {}
