use ratatui::layout::Rect;

/// Splits the terminal into header, body and footer strips.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// First `rows` rows of `area`, and whatever is left below.
pub fn split_top(area: Rect, rows: u16) -> (Rect, Rect) {
    let top_height = rows.min(area.height);
    let top = Rect {
        height: top_height,
        ..area
    };
    let rest = Rect {
        y: area.y + top_height,
        height: area.height - top_height,
        ..area
    };
    (top, rest)
}

/// Scroll offset that keeps `line` visible in a viewport of `height` rows.
pub fn scroll_to(line: usize, height: u16) -> u16 {
    let height = height.max(1) as usize;
    line.saturating_sub(height - 1).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn split_top_clamps() {
        let (top, rest) = split_top(Rect::new(0, 0, 10, 4), 6);
        assert_eq!(top.height, 4);
        assert_eq!(rest.height, 0);
    }

    #[test]
    fn scroll_keeps_line_in_view() {
        assert_eq!(scroll_to(3, 10), 0);
        assert_eq!(scroll_to(12, 10), 3);
        assert_eq!(scroll_to(5, 0), 5);
    }
}
