use crate::config::UiConfig;
use crate::ui::format::stats_lines;
use crate::ui::layout::{scroll_to, split_top};
use crate::ui::menu::MenuUiState;
use crate::ui::screens::{menu_listing, notice_line};
use crate::ui::theme::{CHEF_GOLD, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const EMPTY_MENU: &str = "No menu items yet. Add your first item!";

pub fn draw_home(frame: &mut Frame<'_>, area: Rect, state: &MenuUiState, ui: &UiConfig) {
    let stats = stats_lines(&state.machine.stats(), &ui.currency);
    let (stats_area, rest) = split_top(area, stats.len() as u16 + 2);
    let stats_widget = Paragraph::new(
        stats
            .into_iter()
            .map(|line| Line::styled(line, Style::default().fg(HEADER_TEXT)))
            .collect::<Vec<_>>(),
    )
    .block(
        Block::default()
            .title(Span::styled(" Menu Statistics ", Style::default().fg(CHEF_GOLD)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(stats_widget, stats_area);

    let list_height = rest.height.saturating_sub(1);
    let (list_area, notice_area) = split_top(rest, list_height);

    let groups = state.machine.group_by_course();
    if groups.is_empty() {
        let empty = Paragraph::new(Line::styled(EMPTY_MENU, Style::default().fg(MUTED_TEXT)));
        frame.render_widget(empty, list_area);
    } else {
        let selected = state.selected_item().map(|item| item.id);
        let listing = menu_listing(&groups, selected, &ui.currency, "");
        let offset = scroll_to(listing.selected_line.unwrap_or(0) + 1, list_area.height);
        frame.render_widget(
            Paragraph::new(listing.lines).scroll((offset, 0)),
            list_area,
        );
    }

    frame.render_widget(Paragraph::new(notice_line(state.notice.as_ref())), notice_area);
}
