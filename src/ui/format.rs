use crate::menu::{MenuItem, MenuStats};

/// Price with the currency symbol and exactly two decimals: `$5.50`.
pub fn format_price(currency: &str, price: f64) -> String {
    format!("{currency}{price:.2}")
}

/// Statistics block lines, without the heading.
pub fn stats_lines(stats: &MenuStats, currency: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(stats.averages.len() + 1);
    lines.push(format!("Total Menu Items: {}", stats.total_items));
    for (course, average) in &stats.averages {
        lines.push(format!("{course}: {} avg", format_price(currency, *average)));
    }
    lines
}

/// Single-line item summary: `Soup - Hot  $5.50`.
pub fn item_line(item: &MenuItem, currency: &str) -> String {
    format!(
        "{} - {}  {}",
        item.name,
        item.description,
        format_price(currency, item.price)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Course, ItemId};

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price("$", 5.5), "$5.50");
        assert_eq!(format_price("$", 20.0), "$20.00");
        assert_eq!(format_price("€", 0.0), "€0.00");
        assert_eq!(format_price("$", 3.456), "$3.46");
    }

    #[test]
    fn stats_lines_cover_every_course() {
        let stats = MenuStats {
            total_items: 1,
            averages: vec![
                (Course::Starters, 5.5),
                (Course::Mains, 0.0),
                (Course::Dessert, 0.0),
                (Course::Drinks, 0.0),
            ],
        };
        assert_eq!(
            stats_lines(&stats, "$"),
            vec![
                "Total Menu Items: 1",
                "Starters: $5.50 avg",
                "Mains: $0.00 avg",
                "Dessert: $0.00 avg",
                "Drinks: $0.00 avg",
            ]
        );
    }

    #[test]
    fn item_line_layout() {
        let item = MenuItem {
            id: ItemId::new(1),
            name: "Soup".to_string(),
            description: "Hot".to_string(),
            course: Course::Starters,
            price: 5.5,
        };
        assert_eq!(item_line(&item, "$"), "Soup - Hot  $5.50");
    }
}
