use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::grid::LayoutMode;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub toolbar: Rect,
    pub table: Rect,
    pub pagination: Rect,
    pub status: Rect,
}

/// Split the screen. The toolbar is one bordered row in both modes; the
/// mobile layout uses two footer rows.
pub fn layout_regions(area: Rect, mode: LayoutMode) -> Regions {
    let (toolbar_height, pagination_height) = match mode {
        LayoutMode::Desktop => (3, 1),
        LayoutMode::Mobile => (3, 2),
    };
    let toolbar_height = area.height.min(toolbar_height);
    let status_height = 1.min(area.height.saturating_sub(toolbar_height));
    let pagination_height =
        pagination_height.min(area.height.saturating_sub(toolbar_height + status_height));
    let table_height =
        area.height.saturating_sub(toolbar_height + pagination_height + status_height);

    let toolbar = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: toolbar_height,
    };
    let table = Rect {
        x: area.x,
        y: toolbar.y + toolbar_height,
        width: area.width,
        height: table_height,
    };
    let pagination = Rect {
        x: area.x,
        y: table.y + table_height,
        width: area.width,
        height: pagination_height,
    };
    let status = Rect {
        x: area.x,
        y: pagination.y + pagination_height,
        width: area.width,
        height: status_height,
    };
    Regions {
        toolbar,
        table,
        pagination,
        status,
    }
}

/// Toolbar inner width, the figure the search box negotiation works from.
pub fn toolbar_width(screen_width: u16) -> u16 {
    screen_width.saturating_sub(2)
}

/// A rect of the given size centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let r = layout_regions(area, LayoutMode::Desktop);
        assert_eq!(r.toolbar.height, 3);
        assert_eq!(r.pagination.height, 1);
        assert_eq!(r.status.y + r.status.height, 40);
        assert_eq!(r.table.height, 35);
    }

    #[test]
    fn mobile_keeps_one_toolbar_row() {
        let r = layout_regions(Rect::new(0, 0, 60, 20), LayoutMode::Mobile);
        assert_eq!(r.toolbar.height, 3);
        assert_eq!(r.pagination.height, 2);
        assert_eq!(r.table.height, 14);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let r = layout_regions(Rect::new(0, 0, 20, 2), LayoutMode::Mobile);
        assert_eq!(r.toolbar.height, 2);
        assert_eq!(r.table.height, 0);
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(50, 5, area);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.y, 2);
    }
}
