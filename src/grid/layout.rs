//! Responsive toolbar negotiation.
//!
//! The toolbar holds a left control group (title, column picker), the search
//! box, and a right control group (refresh, export). When the header narrows
//! the search box gives up width first, never below a usable minimum; when it
//! widens the box grows back toward its default.

use serde::{Deserialize, Serialize};

/// Fixed widths feeding the negotiation, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub default_search_width: u16,
    pub min_search_width: u16,
    pub left_controls_width: u16,
    pub right_controls_width: u16,
    pub padding: u16,
    pub min_gap: u16,
    /// Below this viewport width the grid switches to the single-row mobile layout.
    pub mobile_breakpoint: u16,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            default_search_width: 32,
            min_search_width: 12,
            left_controls_width: 24,
            right_controls_width: 22,
            padding: 2,
            min_gap: 2,
            mobile_breakpoint: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayoutNegotiator {
    metrics: LayoutMetrics,
}

impl GridLayoutNegotiator {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn mode(&self, viewport_width: u16) -> LayoutMode {
        if viewport_width < self.metrics.mobile_breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// Width left for the search box once both control groups, padding and
    /// the minimum gap are reserved.
    pub fn available(&self, header_width: u16) -> u16 {
        let m = &self.metrics;
        header_width
            .saturating_sub(m.left_controls_width)
            .saturating_sub(m.right_controls_width)
            .saturating_sub(m.padding)
            .saturating_sub(m.min_gap)
    }

    /// Next search width after a header resize observation.
    pub fn negotiate(&self, header_width: u16, current: u16) -> u16 {
        let m = &self.metrics;
        let available = self.available(header_width);
        if available < current {
            return m.min_search_width.max(available).min(current);
        }
        if available > current && current < m.default_search_width {
            return m.default_search_width.min(available).max(current);
        }
        current
    }

    /// Search width in the mobile row. Title, search and the right group
    /// share one row and the search box takes all of the flex space, with no
    /// default ceiling.
    pub fn mobile_search_width(&self, header_width: u16) -> u16 {
        self.metrics
            .min_search_width
            .max(self.available(header_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negotiator() -> GridLayoutNegotiator {
        GridLayoutNegotiator::new(LayoutMetrics::default())
    }

    #[test]
    fn wide_header_keeps_default() {
        let n = negotiator();
        assert_eq!(n.negotiate(200, 32), 32);
    }

    #[test]
    fn narrow_header_shrinks_to_available() {
        let n = negotiator();
        // 90 - 24 - 22 - 2 - 2 = 40, then 70 leaves 20.
        assert_eq!(n.available(90), 40);
        assert_eq!(n.negotiate(70, 32), 20);
    }

    #[test]
    fn never_below_minimum() {
        let n = negotiator();
        assert_eq!(n.negotiate(40, 32), 12);
    }

    #[test]
    fn grows_back_to_default() {
        let n = negotiator();
        let shrunk = n.negotiate(70, 32);
        assert_eq!(n.negotiate(75, shrunk), 25);
        assert_eq!(n.negotiate(200, 25), 32);
    }

    #[test]
    fn mobile_row_fills_flex_space() {
        let n = negotiator();
        assert_eq!(n.mobile_search_width(79), 29);
        assert_eq!(n.mobile_search_width(60), 12);
        // No default ceiling once the row is wider than the default.
        let wide = GridLayoutNegotiator::new(LayoutMetrics {
            mobile_breakpoint: 140,
            ..LayoutMetrics::default()
        });
        assert_eq!(wide.mobile_search_width(120), 70);
    }

    #[test]
    fn breakpoint_selects_mode() {
        let n = negotiator();
        assert_eq!(n.mode(79), LayoutMode::Mobile);
        assert_eq!(n.mode(80), LayoutMode::Desktop);
    }
}
