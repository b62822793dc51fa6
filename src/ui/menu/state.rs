//! State for the menu screens.

use crate::menu::{Course, DraftField, MenuItem, MenuStateMachine, Screen, ValidationError};
use crate::ui::mvi::UiState;

/// Feedback line shown under the current screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Added { name: String, course: Course },
    Deleted { name: String },
    Invalid(ValidationError),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Added { name, course } => format!("Added {name} to {course}"),
            Notice::Deleted { name } => format!("Deleted {name}"),
            Notice::Invalid(err) => err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Invalid(_))
    }
}

/// Menu session plus the bits only the terminal view needs: which form
/// field has focus, which list row is selected, and the last notice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuUiState {
    pub machine: MenuStateMachine,
    pub focus: DraftField,
    /// Index into `visible_items()`.
    pub cursor: usize,
    pub notice: Option<Notice>,
}

impl UiState for MenuUiState {}

impl MenuUiState {
    pub fn new(machine: MenuStateMachine) -> Self {
        Self {
            machine,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.machine.screen()
    }

    /// Items listed on the current screen, top to bottom.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        let groups = match self.machine.screen() {
            Screen::Home => self.machine.group_by_course(),
            Screen::Filter => self.machine.filtered_group_by_course(),
            Screen::AddItem => Vec::new(),
        };
        groups.into_iter().flat_map(|group| group.items).collect()
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.visible_items().get(self.cursor).copied()
    }

    pub(crate) fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
