use crate::menu::Screen;
use crate::ui::theme::{CHEF_GOLD, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, screen: Screen, item_count: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(CHEF_GOLD).add_modifier(Modifier::BOLD);
        let screen_name = match screen {
            Screen::Home => "Menu",
            Screen::AddItem => "Add New Menu Item",
            Screen::Filter => "Filter Menu",
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title.to_string(), title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(screen_name, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{item_count} items"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
