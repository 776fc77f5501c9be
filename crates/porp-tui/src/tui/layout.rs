// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Main Panel (68%)         | Sidebar (32%)          |
// |                          | +- My Needs (55%) ----+|
// |                          | +- Levels (45%) ------+|
// +-------------------------+------------------------+
// | Help / Prompt Bar (1 row)                         |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: league, pick counter, team on the clock, tabs.
    pub status_bar: Rect,
    /// Tab-switched content area.
    pub main_panel: Rect,
    /// Sidebar top: the user's open starting slots.
    pub my_needs: Rect,
    /// Sidebar bottom: current replacement levels.
    pub levels: Rect,
    /// Bottom row: key hints, or the text prompt while typing.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(8),    // main + sidebar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(vertical[1]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(horizontal[1]);

    AppLayout {
        status_bar: vertical[0],
        main_panel: horizontal[0],
        my_needs: sidebar[0],
        levels: sidebar[1],
        help_bar: vertical[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rects(layout: &AppLayout) -> [(&'static str, Rect); 5] {
        [
            ("status_bar", layout.status_bar),
            ("main_panel", layout.main_panel),
            ("my_needs", layout.my_needs),
            ("levels", layout.levels),
            ("help_bar", layout.help_bar),
        ]
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        for (name, rect) in all_rects(&layout) {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_bars_are_one_row() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn layout_main_panel_wider_than_sidebar() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        assert!(layout.main_panel.width > layout.my_needs.width);
        assert_eq!(layout.my_needs.width, layout.levels.width);
        assert!(layout.my_needs.y < layout.levels.y);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = build_layout(area);
        for (name, rect) in all_rects(&layout) {
            assert!(rect.right() <= area.width, "{name} exceeds width");
            assert!(rect.bottom() <= area.height, "{name} exceeds height");
        }
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let layout = build_layout(Rect::new(0, 0, 40, 12));
        for (name, rect) in all_rects(&layout) {
            assert!(rect.width > 0 && rect.height > 0, "{name} collapsed");
        }
    }
}
