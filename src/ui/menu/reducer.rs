//! Reducer for the menu screens.

use crate::menu::{DraftField, Screen, ValidationError};
use crate::ui::mvi::Reducer;

use super::intent::MenuIntent;
use super::state::{MenuUiState, Notice};

/// Form intents only act on the add screen, list intents only on the
/// home and filter screens; anything else leaves the state untouched.
pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuUiState;
    type Intent = MenuIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let screen = state.machine.screen();
        match intent {
            MenuIntent::Navigate(target) => {
                state.machine.navigate(target);
                state.focus = DraftField::default();
                state.cursor = 0;
                state.notice = None;
            }

            MenuIntent::InsertChar(ch) if screen == Screen::AddItem => {
                if state.focus == DraftField::Course {
                    if ch == ' ' {
                        let draft = state.machine.draft_mut();
                        draft.course = draft.course.next();
                    }
                } else if let Some(text) = state.machine.draft_mut().field_mut(state.focus) {
                    text.push(ch);
                    state.notice = None;
                }
            }
            MenuIntent::Backspace if screen == Screen::AddItem => {
                if let Some(text) = state.machine.draft_mut().field_mut(state.focus) {
                    text.pop();
                }
            }
            MenuIntent::FocusNext if screen == Screen::AddItem => {
                state.focus = state.focus.next();
            }
            MenuIntent::FocusPrev if screen == Screen::AddItem => {
                state.focus = state.focus.prev();
            }
            MenuIntent::NextCourse
                if screen == Screen::AddItem && state.focus == DraftField::Course =>
            {
                let draft = state.machine.draft_mut();
                draft.course = draft.course.next();
            }
            MenuIntent::PrevCourse
                if screen == Screen::AddItem && state.focus == DraftField::Course =>
            {
                let draft = state.machine.draft_mut();
                draft.course = draft.course.prev();
            }
            MenuIntent::Submit if screen == Screen::AddItem => {
                match state.machine.submit_draft() {
                    Ok(item) => {
                        state.focus = DraftField::default();
                        state.cursor = 0;
                        state.notice = Some(Notice::Added {
                            name: item.name,
                            course: item.course,
                        });
                    }
                    Err(err) => {
                        state.focus = match err {
                            ValidationError::MissingField(field) => field,
                            ValidationError::InvalidPrice => DraftField::Price,
                        };
                        state.notice = Some(Notice::Invalid(err));
                    }
                }
            }

            MenuIntent::NextFilter if screen == Screen::Filter => {
                let next = state.machine.filter().next();
                state.machine.set_filter(next);
                state.cursor = 0;
            }
            MenuIntent::PrevFilter if screen == Screen::Filter => {
                let prev = state.machine.filter().prev();
                state.machine.set_filter(prev);
                state.cursor = 0;
            }
            MenuIntent::SetFilter(filter) => {
                state.machine.set_filter(filter);
                state.cursor = 0;
            }

            MenuIntent::CursorUp if screen != Screen::AddItem => {
                state.cursor = state.cursor.saturating_sub(1);
            }
            MenuIntent::CursorDown if screen != Screen::AddItem => {
                state.cursor = state.cursor.saturating_add(1);
                state.clamp_cursor();
            }
            MenuIntent::DeleteSelected if screen != Screen::AddItem => {
                if let Some((id, name)) = state
                    .selected_item()
                    .map(|item| (item.id, item.name.clone()))
                {
                    state.machine.delete_item(id);
                    state.notice = Some(Notice::Deleted { name });
                    state.clamp_cursor();
                }
            }
            MenuIntent::Delete(id) => {
                if let Some(name) = state.machine.items().get(id).map(|i| i.name.clone()) {
                    state.machine.delete_item(id);
                    state.notice = Some(Notice::Deleted { name });
                }
                state.clamp_cursor();
            }

            MenuIntent::DismissNotice => {
                state.notice = None;
            }

            // Intent does not apply to the current screen.
            _ => {}
        }
        state
    }
}
