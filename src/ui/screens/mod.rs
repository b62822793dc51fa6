//! Body renderers, one per screen.

mod add_item;
mod filter;
mod home;

pub use add_item::draw_add_item;
pub use filter::draw_filter;
pub use home::draw_home;

use crate::menu::{CourseGroup, ItemId};
use crate::ui::format::format_price;
use crate::ui::menu::Notice;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, CHEF_GOLD, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Menu listing shared by the home and filter screens.
pub(crate) struct MenuListing {
    pub lines: Vec<Line<'static>>,
    /// Line index of the selected item's name, for scrolling.
    pub selected_line: Option<usize>,
}

/// Builds course headings with their items; an empty group gets
/// `empty_course` underneath.
pub(crate) fn menu_listing(
    groups: &[CourseGroup<'_>],
    selected: Option<ItemId>,
    currency: &str,
    empty_course: &str,
) -> MenuListing {
    let mut lines = Vec::new();
    let mut selected_line = None;
    let heading = Style::default().fg(CHEF_GOLD).add_modifier(Modifier::BOLD);

    for group in groups {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(group.course.to_string(), heading));
        if group.items.is_empty() {
            lines.push(Line::styled(
                format!("  {empty_course}"),
                Style::default().fg(MUTED_TEXT),
            ));
            continue;
        }
        for item in &group.items {
            let is_selected = selected == Some(item.id);
            if is_selected {
                selected_line = Some(lines.len());
            }
            let marker = if is_selected { "▶ " } else { "  " };
            let mut name_line = Line::from(vec![
                Span::styled(marker, Style::default().fg(CHEF_GOLD)),
                Span::styled(
                    item.name.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format_price(currency, item.price),
                    Style::default().fg(PRICE_TEXT),
                ),
            ]);
            let mut description_line = Line::styled(
                format!("    {}", item.description),
                Style::default().fg(MUTED_TEXT),
            );
            if is_selected {
                let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
                name_line = name_line.style(highlight);
                description_line = description_line.patch_style(highlight);
            }
            lines.push(name_line);
            lines.push(description_line);
        }
    }

    MenuListing {
        lines,
        selected_line,
    }
}

pub(crate) fn notice_line(notice: Option<&Notice>) -> Line<'static> {
    match notice {
        Some(notice) => {
            let color = if notice.is_error() { STATUS_ERROR } else { STATUS_OK };
            Line::styled(format!(" {}", notice.message()), Style::default().fg(color))
        }
        None => Line::from(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Course, Draft, MenuStateMachine};

    #[test]
    fn listing_marks_selected_item() {
        let mut machine = MenuStateMachine::new();
        machine
            .add_item(Draft::new("Soup", "Hot", Course::Starters, "5.50"))
            .unwrap();
        let steak = machine
            .add_item(Draft::new("Steak", "Grilled", Course::Mains, "20"))
            .unwrap();

        let groups = machine.group_by_course();
        let listing = menu_listing(&groups, Some(steak.id), "$", "none");
        // Starters, Soup, desc, blank, Mains, Steak
        assert_eq!(listing.selected_line, Some(5));
        assert_eq!(listing.lines.len(), 7);
    }

    #[test]
    fn empty_group_shows_placeholder() {
        let groups = vec![CourseGroup {
            course: Course::Dessert,
            items: Vec::new(),
        }];
        let listing = menu_listing(&groups, None, "$", "No items in this category");
        assert_eq!(listing.lines.len(), 2);
        assert_eq!(listing.lines[1].to_string(), "  No items in this category");
    }
}
