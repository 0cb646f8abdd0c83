//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the page column grows; wider terminals get side margins.
pub const MAX_PAGE_WIDTH: u16 = 110;

/// Primary screen layout: nav bar, scrolling page, status bar.
pub struct AppLayout {
    pub nav_area: Rect,
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // nav bar
                Constraint::Min(3),    // page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            nav_area: chunks[0],
            page_area: chunks[1],
            status_area: chunks[2],
        }
    }
}

/// Centre a column of at most `max_width` inside `area`, full height.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let w = area.width.min(max_width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, area.height)
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_sits_between_bars() {
        let l = AppLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(l.nav_area, Rect::new(0, 0, 80, 1));
        assert_eq!(l.page_area, Rect::new(0, 1, 80, 22));
        assert_eq!(l.status_area, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn wide_terminals_get_margins() {
        let l = AppLayout::from_area(Rect::new(0, 0, 200, 24));
        assert_eq!(
            centered_column(l.page_area, MAX_PAGE_WIDTH),
            Rect::new(45, 1, 110, 22)
        );
    }
}
