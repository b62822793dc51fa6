use crate::menu::{CourseFilter, Screen};
use crate::ui::app::App;
use crate::ui::menu::MenuIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let intent = match app.state().screen() {
        Screen::Home => {
            if matches!(key.code, KeyCode::Char('q')) {
                app.request_quit();
                return;
            }
            home_intent(key)
        }
        Screen::AddItem => add_item_intent(key),
        Screen::Filter => filter_intent(key),
    };

    if let Some(intent) = intent {
        app.dispatch(intent);
    }
}

fn home_intent(key: KeyEvent) -> Option<MenuIntent> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('n') => Some(MenuIntent::Navigate(Screen::AddItem)),
        KeyCode::Char('f') => Some(MenuIntent::Navigate(Screen::Filter)),
        KeyCode::Esc => Some(MenuIntent::DismissNotice),
        code => list_intent(code),
    }
}

fn filter_intent(key: KeyEvent) -> Option<MenuIntent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => Some(MenuIntent::Navigate(Screen::Home)),
        KeyCode::Left | KeyCode::Char('h') => Some(MenuIntent::PrevFilter),
        KeyCode::Right | KeyCode::Char('l') => Some(MenuIntent::NextFilter),
        KeyCode::Char('a') => Some(MenuIntent::SetFilter(CourseFilter::All)),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            CourseFilter::OPTIONS
                .get(index)
                .map(|filter| MenuIntent::SetFilter(*filter))
        }
        code => list_intent(code),
    }
}

fn list_intent(code: KeyCode) -> Option<MenuIntent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuIntent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuIntent::CursorDown),
        KeyCode::Delete | KeyCode::Char('d') => Some(MenuIntent::DeleteSelected),
        _ => None,
    }
}

fn add_item_intent(key: KeyEvent) -> Option<MenuIntent> {
    match key.code {
        KeyCode::Esc => Some(MenuIntent::Navigate(Screen::Home)),
        KeyCode::Enter => Some(MenuIntent::Submit),
        KeyCode::Tab | KeyCode::Down => Some(MenuIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(MenuIntent::FocusPrev),
        KeyCode::Left => Some(MenuIntent::PrevCourse),
        KeyCode::Right => Some(MenuIntent::NextCourse),
        KeyCode::Backspace => Some(MenuIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(MenuIntent::InsertChar(ch))
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
