use crate::config::UiConfig;
use crate::menu::CourseFilter;
use crate::ui::layout::{scroll_to, split_top};
use crate::ui::menu::MenuUiState;
use crate::ui::screens::{menu_listing, notice_line};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, CHEF_GOLD, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const NO_MATCHES: &str = "No menu items found";
const EMPTY_COURSE: &str = "No items in this category";

pub fn draw_filter(frame: &mut Frame<'_>, area: Rect, state: &MenuUiState, ui: &UiConfig) {
    let (picker_area, rest) = split_top(area, 4);
    frame.render_widget(picker(state.machine.filter()), picker_area);

    let list_height = rest.height.saturating_sub(1);
    let (list_area, notice_area) = split_top(rest, list_height);

    let groups = state.machine.filtered_group_by_course();
    if groups.is_empty() {
        let empty = Paragraph::new(Line::styled(NO_MATCHES, Style::default().fg(MUTED_TEXT)));
        frame.render_widget(empty, list_area);
    } else {
        let selected = state.selected_item().map(|item| item.id);
        let listing = menu_listing(&groups, selected, &ui.currency, EMPTY_COURSE);
        let offset = scroll_to(listing.selected_line.unwrap_or(0) + 1, list_area.height);
        frame.render_widget(
            Paragraph::new(listing.lines).scroll((offset, 0)),
            list_area,
        );
    }

    frame.render_widget(Paragraph::new(notice_line(state.notice.as_ref())), notice_area);
}

fn picker(current: CourseFilter) -> Paragraph<'static> {
    let mut options = Vec::new();
    for (idx, option) in CourseFilter::OPTIONS.iter().enumerate() {
        let label = format!(" {}:{} ", idx, option.label());
        let style = if *option == current {
            Style::default()
                .fg(CHEF_GOLD)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        options.push(Span::styled(label, style));
    }

    let lines = vec![
        Line::from(options),
        Line::styled(" [a] Show All Items", Style::default().fg(MUTED_TEXT)),
    ];
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Filter by Course ", Style::default().fg(CHEF_GOLD)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
