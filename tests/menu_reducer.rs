mod common;

use chefmenu::menu::{Course, CourseFilter, DraftField, Screen, ValidationError};
use chefmenu::ui::menu::{MenuIntent, MenuReducer, MenuUiState, Notice};
use chefmenu::ui::mvi::Reducer;
use common::soup_and_steak;

fn reduce_all(state: MenuUiState, intents: impl IntoIterator<Item = MenuIntent>) -> MenuUiState {
    intents.into_iter().fold(state, MenuReducer::reduce)
}

fn typed(text: &str) -> Vec<MenuIntent> {
    text.chars().map(MenuIntent::InsertChar).collect()
}

#[test]
fn navigate_clears_notice_and_cursor() {
    let (machine, _, _) = soup_and_steak();
    let state = reduce_all(
        MenuUiState::new(machine),
        [MenuIntent::CursorDown, MenuIntent::DeleteSelected],
    );
    assert!(state.notice.is_some());

    let state = MenuReducer::reduce(state, MenuIntent::Navigate(Screen::Filter));
    assert!(state.notice.is_none());
    assert_eq!(state.cursor, 0);
}

#[test]
fn cursor_stays_within_list() {
    let (machine, _, _) = soup_and_steak();
    let state = reduce_all(
        MenuUiState::new(machine),
        [
            MenuIntent::CursorDown,
            MenuIntent::CursorDown,
            MenuIntent::CursorDown,
        ],
    );
    assert_eq!(state.cursor, 1);
    let state = reduce_all(state, [MenuIntent::CursorUp, MenuIntent::CursorUp]);
    assert_eq!(state.cursor, 0);
}

#[test]
fn delete_last_item_moves_cursor_up() {
    let (machine, _, _) = soup_and_steak();
    let state = reduce_all(
        MenuUiState::new(machine),
        [MenuIntent::CursorDown, MenuIntent::DeleteSelected],
    );
    assert_eq!(state.machine.len(), 1);
    assert_eq!(state.cursor, 0);
    assert_eq!(
        state.notice,
        Some(Notice::Deleted {
            name: "Steak".to_string()
        })
    );
}

#[test]
fn delete_on_empty_list_is_noop() {
    let state = MenuReducer::reduce(MenuUiState::default(), MenuIntent::DeleteSelected);
    assert_eq!(state, MenuUiState::default());
}

#[test]
fn delete_by_id_twice() {
    let (machine, soup, _) = soup_and_steak();
    let state = reduce_all(
        MenuUiState::new(machine),
        [MenuIntent::Delete(soup.id), MenuIntent::Delete(soup.id)],
    );
    assert_eq!(state.machine.len(), 1);
}

#[test]
fn filter_screen_deletes_within_filtered_list() {
    let (machine, _, steak) = soup_and_steak();
    let state = reduce_all(
        MenuUiState::new(machine),
        [
            MenuIntent::Navigate(Screen::Filter),
            MenuIntent::SetFilter(CourseFilter::Only(Course::Mains)),
            MenuIntent::DeleteSelected,
        ],
    );
    assert!(!state.machine.items().contains(steak.id));
    assert_eq!(state.machine.len(), 1);
}

#[test]
fn invalid_price_focuses_price_field() {
    let mut intents = vec![MenuIntent::Navigate(Screen::AddItem)];
    intents.extend(typed("Soup"));
    intents.push(MenuIntent::FocusNext);
    intents.extend(typed("Hot"));
    intents.push(MenuIntent::FocusPrev);
    intents.push(MenuIntent::FocusPrev);
    intents.extend(typed("abc"));
    intents.push(MenuIntent::Submit);

    let state = reduce_all(MenuUiState::default(), intents);
    assert_eq!(state.machine.draft().price, "abc");
    assert_eq!(state.focus, DraftField::Price);
    assert_eq!(
        state.notice,
        Some(Notice::Invalid(ValidationError::InvalidPrice))
    );
    assert!(state.machine.is_empty());
}

#[test]
fn backspace_edits_focused_field() {
    let mut intents = vec![MenuIntent::Navigate(Screen::AddItem)];
    intents.extend(typed("Soupp"));
    intents.push(MenuIntent::Backspace);
    let state = reduce_all(MenuUiState::default(), intents);
    assert_eq!(state.machine.draft().name, "Soup");
}

#[test]
fn space_on_course_picker_cycles() {
    let state = reduce_all(
        MenuUiState::default(),
        [
            MenuIntent::Navigate(Screen::AddItem),
            MenuIntent::FocusPrev,
            MenuIntent::FocusPrev,
            MenuIntent::InsertChar(' '),
        ],
    );
    assert_eq!(state.focus, DraftField::Course);
    assert_eq!(state.machine.draft().course, Course::Mains);
}

#[test]
fn filter_survives_round_trip_through_home() {
    let state = reduce_all(
        MenuUiState::default(),
        [
            MenuIntent::Navigate(Screen::Filter),
            MenuIntent::PrevFilter,
            MenuIntent::Navigate(Screen::Home),
            MenuIntent::Navigate(Screen::Filter),
        ],
    );
    assert_eq!(
        state.machine.filter(),
        CourseFilter::Only(Course::Drinks)
    );
}
