use crate::config::UiConfig;
use crate::menu::MenuStateMachine;
use crate::ui::menu::{MenuIntent, MenuReducer, MenuUiState};
use crate::ui::mvi::Reducer;
use std::time::Duration;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Menu session and screen state (MVI pattern).
    menu: MenuUiState,
    ui: UiConfig,
}

impl App {
    pub fn new(machine: MenuStateMachine, ui: UiConfig) -> Self {
        Self {
            should_quit: false,
            size: None,
            menu: MenuUiState::new(machine),
            ui,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &MenuUiState {
        &self.menu
    }

    pub fn ui_config(&self) -> &UiConfig {
        &self.ui
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Dispatch an intent to the menu reducer.
    pub fn dispatch(&mut self, intent: MenuIntent) {
        dispatch_mvi!(self, menu, MenuReducer, intent);
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }
}
