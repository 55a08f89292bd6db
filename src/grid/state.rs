//! View state owned by one grid instance.

use std::time::Instant;

use crate::ui::mvi::UiState;

use super::columns::ColumnVisibility;
use super::layout::LayoutMode;

/// Column picker popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Open {
        /// Index into the full (not just visible) column list.
        cursor: usize,
    },
}

/// Everything the grid owns itself. Records, sort, search text and
/// pagination all belong to the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridViewState {
    pub visibility: ColumnVisibility,
    /// Derived by layout negotiation; callers cannot set it.
    pub search_width: u16,
    pub layout_mode: LayoutMode,
    /// Last observed header width.
    pub header_width: Option<u16>,
    /// Local busy flag for the refresh button. Cosmetic: it expires on its
    /// own and says nothing about whether fresh data has arrived.
    pub refresh_until: Option<Instant>,
    pub picker: PickerState,
}

impl UiState for GridViewState {}

impl GridViewState {
    pub fn new(keys: Vec<String>, search_width: u16) -> Self {
        Self {
            visibility: ColumnVisibility::all(keys),
            search_width,
            ..Self::default()
        }
    }

    pub fn is_refreshing(&self, now: Instant) -> bool {
        self.refresh_until.is_some_and(|until| now < until)
    }

    pub fn picker_open(&self) -> bool {
        matches!(self.picker, PickerState::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_state_shows_every_column() {
        let state = GridViewState::new(vec!["a".into(), "b".into()], 32);
        assert_eq!(state.visibility.visible_keys(), vec!["a", "b"]);
        assert!(!state.picker_open());
    }

    #[test]
    fn refresh_flag_expires() {
        let now = Instant::now();
        let state = GridViewState {
            refresh_until: Some(now + Duration::from_millis(600)),
            ..GridViewState::default()
        };
        assert!(state.is_refreshing(now));
        assert!(!state.is_refreshing(now + Duration::from_millis(600)));
    }
}
