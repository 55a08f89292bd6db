//! Page arithmetic for client-side pagination.

/// Most numbered page buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Caller-owned pagination parameters.
///
/// `current_page` is 1-based. The grid renders whatever page it is given;
/// keeping it inside `1..=total_pages` is the caller's job
/// (see [`PageRequest::clamped`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl PageRequest {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            current_page,
            page_size,
            total_items,
        }
    }

    /// `ceil(total_items / page_size)`; zero when there are no items.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.page_size)
    }

    /// Same request with `current_page` forced into `[1, max(1, total_pages)]`.
    pub fn clamped(self) -> Self {
        let last = self.total_pages().max(1);
        Self {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }

    /// Index range of the visible slice, truncated to the collection.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// The visible slice of an already filtered and sorted collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// Button state and page numbers for the footer.
    pub fn controls(&self) -> PageControls {
        // A zero-page result still renders as a single page.
        let total = self.total_pages().max(1);
        let current = self.current_page;
        PageControls {
            first_enabled: current > 1,
            prev_enabled: current > 1,
            next_enabled: current < total,
            last_enabled: current < total,
            pages: page_window(current, total, MAX_PAGE_BUTTONS),
            current_page: current,
            total_pages: total,
        }
    }

    /// "1-10 of 42"-style range label used by the mobile footer.
    pub fn range_label(&self) -> String {
        let range = self.range();
        if range.is_empty() {
            return format!("0 of {}", self.total_items);
        }
        format!("{}-{} of {}", range.start + 1, range.end, self.total_items)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub first_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Up to `max` consecutive page numbers centred on `current`, shifted to
/// stay inside `1..=total`.
pub fn page_window(current: usize, total: usize, max: usize) -> Vec<usize> {
    if total == 0 || max == 0 {
        return Vec::new();
    }
    let count = max.min(total);
    let current = current.clamp(1, total);
    let start = current
        .saturating_sub(count / 2)
        .max(1)
        .min(total + 1 - count);
    (start..start + count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageRequest::new(1, 10, 0).total_pages(), 0);
        assert_eq!(PageRequest::new(1, 10, 10).total_pages(), 1);
        assert_eq!(PageRequest::new(1, 10, 11).total_pages(), 2);
        assert_eq!(PageRequest::new(1, 0, 11).total_pages(), 0);
    }

    #[test]
    fn last_page_slice_is_short() {
        let items: Vec<u32> = (0..23).collect();
        let page = PageRequest::new(3, 10, items.len());
        assert_eq!(page.slice(&items), &[20, 21, 22]);
        assert_eq!(page.range_label(), "21-23 of 23");
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let items: Vec<u32> = (0..5).collect();
        let page = PageRequest::new(4, 10, items.len());
        assert!(page.slice(&items).is_empty());
        assert_eq!(page.clamped().current_page, 1);
    }

    #[test]
    fn window_is_centred_and_clamped() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    }
}
