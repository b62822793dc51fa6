//! Plain-text rendering of the menu for the `print` command.

use crate::config::UiConfig;
use crate::menu::MenuStateMachine;
use crate::ui::format::{item_line, stats_lines};

const EMPTY_MENU: &str = "No menu items yet. Add your first item!";
const EMPTY_COURSE: &str = "No items in this category";

/// Renders the title, statistics and the menu under the current filter.
pub fn render_report(machine: &MenuStateMachine, ui: &UiConfig) -> String {
    let mut lines = vec![ui.title.clone(), String::new(), "Menu Statistics".to_string()];
    lines.extend(
        stats_lines(&machine.stats(), &ui.currency)
            .into_iter()
            .map(|line| format!("  {line}")),
    );
    lines.push(String::new());

    let groups = machine.filtered_group_by_course();
    if groups.is_empty() {
        lines.push(EMPTY_MENU.to_string());
    }
    for group in groups {
        lines.push(group.course.to_string());
        if group.items.is_empty() {
            lines.push(format!("  {EMPTY_COURSE}"));
        }
        lines.extend(
            group
                .items
                .into_iter()
                .map(|item| format!("  {}", item_line(item, &ui.currency))),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
