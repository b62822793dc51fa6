use crate::menu::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(screen: Screen) -> &'static str {
        match screen {
            Screen::Home => " a: Add │ f: Filter │ ↑↓: Select │ d: Delete │ q: Quit",
            Screen::AddItem => " Tab: Next field │ ←→: Course │ Enter: Save │ Esc: Cancel",
            Screen::Filter => {
                " ←→/0-4: Course │ a: Show all │ ↑↓: Select │ d: Delete │ Esc: Back"
            }
        }
    }

    pub fn widget(&self, screen: Screen, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(screen);
        let version = format!("v{} ", VERSION);

        // Padding by char count; hints contain multi-byte glyphs
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
