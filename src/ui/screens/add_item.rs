use crate::config::UiConfig;
use crate::menu::DraftField;
use crate::ui::layout::split_top;
use crate::ui::menu::MenuUiState;
use crate::ui::screens::notice_line;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, CHEF_GOLD, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Rows taken by one field: label plus value.
const FIELD_ROWS: u16 = 2;

pub fn draw_add_item(frame: &mut Frame<'_>, area: Rect, state: &MenuUiState, ui: &UiConfig) {
    let draft = state.machine.draft();
    let label_style = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();
    let mut cursor = None;

    for (idx, field) in DraftField::ALL.iter().enumerate() {
        let focused = *field == state.focus;
        let label = match field {
            DraftField::Price => format!("Price ({})", ui.currency),
            other => other.label().to_string(),
        };
        lines.push(Line::styled(label, label_style));

        let marker = if focused { "▶ " } else { "  " };
        let value = match draft.field(*field) {
            Some(text) => text.to_string(),
            None => format!("◀ {} ▶", draft.course),
        };
        let value_width = value.chars().count() as u16;
        let mut value_line = Line::from(vec![
            Span::styled(marker, Style::default().fg(CHEF_GOLD)),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
        ]);
        if focused {
            value_line = value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            if *field != DraftField::Course {
                // +1 for the block border, +2 for the marker
                cursor = Some((
                    area.x + 1 + 2 + value_width,
                    area.y + 1 + idx as u16 * FIELD_ROWS + 1,
                ));
            }
        }
        lines.push(value_line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Esc] Cancel", Style::default().fg(MUTED_TEXT)),
        Span::raw("    "),
        Span::styled(
            "[Enter] Save Item",
            Style::default().fg(CHEF_GOLD).add_modifier(Modifier::BOLD),
        ),
    ]));

    let form_height = lines.len() as u16 + 2;
    let (form_area, rest) = split_top(area, form_height);
    let form = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Add New Menu Item ", Style::default().fg(CHEF_GOLD)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(form, form_area);
    frame.render_widget(Paragraph::new(notice_line(state.notice.as_ref())), rest);

    if let Some((x, y)) = cursor {
        let max_x = form_area.x + form_area.width.saturating_sub(2);
        let max_y = form_area.y + form_area.height.saturating_sub(2);
        if form_area.width > 2 && form_area.height > 2 {
            frame.set_cursor_position((x.min(max_x), y.min(max_y)));
        }
    }
}
