//! Outbound intents the grid asks its owning page to fulfil.

use super::sort::SortDirection;

/// A request from the grid to its owner. The grid never applies these
/// itself: sorting, paging and searching all happen in the page, which then
/// hands the grid a new slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    Sort {
        key: String,
        direction: SortDirection,
    },
    SearchChange(String),
    PageChange(usize),
    /// The owner must also move back to page 1.
    PageSizeChange(usize),
    Export,
    Refresh,
    VisibleColumnsChange(Vec<String>),
    RowAction {
        action: &'static str,
        /// Index of the row within the rendered slice.
        row: usize,
    },
}

/// Pagination footer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    Page(usize),
}
