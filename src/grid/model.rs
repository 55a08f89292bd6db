//! The data grid as a pure function of (records, view state) → frame.
//!
//! [`DataGrid`] holds the declarative parts of a screen (columns, actions,
//! status callback, feature flags). [`DataGrid::frame`] turns one page of
//! records plus the grid's own view state into a [`GridFrame`] that any
//! renderer can draw; `ui::grid_view` draws it with ratatui. User gestures go
//! through the `DataGrid` methods below and come back as [`GridEvent`]s.

use std::fmt;
use std::time::{Duration, Instant};

use crate::ui::mvi::Reducer;

use super::actions::{ActionSource, RowAction};
use super::columns::{column_keys, Column};
use super::events::{GridEvent, PageNav};
use super::intent::GridIntent;
use super::layout::LayoutMode;
use super::pagination::{PageControls, PageRequest};
use super::reducer::GridReducer;
use super::sort::{SortIndicator, SortState};
use super::state::GridViewState;

/// Optional parts of the grid chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridFeatures {
    pub show_search: bool,
    pub show_column_selector: bool,
    pub show_export_button: bool,
    pub show_refresh_button: bool,
    pub show_pagination: bool,
    pub show_status_indicator: bool,
}

impl Default for GridFeatures {
    fn default() -> Self {
        Self {
            show_search: true,
            show_column_selector: true,
            show_export_button: true,
            show_refresh_button: true,
            show_pagination: true,
            show_status_indicator: true,
        }
    }
}

/// Status rail tone. The renderer picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Active,
    Inactive,
    Neutral,
}

pub type StatusFn<R> = Box<dyn Fn(&R) -> StatusTone>;

pub struct DataGrid<R> {
    title: String,
    columns: Vec<Column<R>>,
    actions: ActionSource<R>,
    status: Option<StatusFn<R>>,
    features: GridFeatures,
    empty_message: String,
}

impl<R> DataGrid<R> {
    pub fn new(title: impl Into<String>, columns: Vec<Column<R>>) -> Self {
        Self {
            title: title.into(),
            columns,
            actions: ActionSource::None,
            status: None,
            features: GridFeatures::default(),
            empty_message: "No records found".to_string(),
        }
    }

    pub fn actions(mut self, actions: ActionSource<R>) -> Self {
        self.actions = actions;
        self
    }

    pub fn status_color(mut self, status: impl Fn(&R) -> StatusTone + 'static) -> Self {
        self.status = Some(Box::new(status));
        self
    }

    pub fn features(mut self, features: GridFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn feature_flags(&self) -> GridFeatures {
        self.features
    }

    /// Fresh view state: every column visible, search box at `search_width`.
    pub fn initial_state(&self, search_width: u16) -> GridViewState {
        GridViewState::new(column_keys(&self.columns), search_width)
    }

    pub fn has_status_rail(&self) -> bool {
        self.features.show_status_indicator && self.status.is_some()
    }

    pub fn has_action_rail(&self) -> bool {
        self.actions.has_actions()
    }

    /// Build the frame for one render pass.
    pub fn frame(&self, input: GridInput<'_, R>, state: &GridViewState, now: Instant) -> GridFrame {
        let visible = state.visibility.filter(&self.columns);
        let has_status = self.has_status_rail();
        let has_actions = self.has_action_rail();

        let header = visible
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                title: column.title().to_string(),
                width: column.width_hint(),
                sortable: column.is_sortable(),
                indicator: column
                    .is_sortable()
                    .then(|| input.sort.indicator(column.key())),
            })
            .collect::<Vec<_>>();

        let body = if input.records.is_empty() {
            GridBody::Empty {
                message: self.empty_message.clone(),
                colspan: visible.len() + usize::from(has_status) + usize::from(has_actions),
            }
        } else {
            GridBody::Rows(
                input
                    .records
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(index, record)| GridRow {
                        index,
                        status: match &self.status {
                            Some(status) if has_status => Some(status(record)),
                            _ => None,
                        },
                        cells: visible.iter().map(|c| c.display(record)).collect(),
                        actions: self.actions.for_record(record),
                    })
                    .collect(),
            )
        };

        let footer = self.features.show_pagination.then(|| match state.layout_mode {
            LayoutMode::Desktop => PaginationFooter::Desktop {
                controls: input.page.controls(),
                range_label: input.page.range_label(),
                page_size: input.page.page_size,
            },
            LayoutMode::Mobile => {
                let controls = input.page.controls();
                PaginationFooter::Mobile {
                    range_label: input.page.range_label(),
                    prev_enabled: controls.prev_enabled,
                    next_enabled: controls.next_enabled,
                    current_page: controls.current_page,
                    total_pages: controls.total_pages,
                }
            }
        });

        GridFrame {
            toolbar: Toolbar {
                title: self.title.clone(),
                search: self.features.show_search.then(|| SearchBox {
                    query: input.search.to_string(),
                    width: state.search_width,
                }),
                column_selector: self.features.show_column_selector,
                export: self.features.show_export_button,
                refresh: self.features.show_refresh_button.then(|| RefreshButton {
                    busy: state.is_refreshing(now),
                }),
            },
            mode: state.layout_mode,
            header,
            has_status_rail: has_status,
            has_action_rail: has_actions,
            body,
            footer,
        }
    }

    /// A click on a column header. Non-sortable and unknown columns ask
    /// for nothing.
    pub fn click_header(&self, key: &str, sort: &SortState) -> Option<GridEvent> {
        let column = self.columns.iter().find(|c| c.key() == key)?;
        if !column.is_sortable() {
            return None;
        }
        let (key, direction) = sort.next_request(column.key());
        Some(GridEvent::Sort { key, direction })
    }

    /// A footer button. Disabled buttons emit nothing.
    pub fn navigate(&self, page: PageRequest, nav: PageNav) -> Option<GridEvent> {
        let controls = page.controls();
        let target = match nav {
            PageNav::First if controls.first_enabled => 1,
            PageNav::Prev if controls.prev_enabled => page.current_page - 1,
            PageNav::Next if controls.next_enabled => page.current_page + 1,
            PageNav::Last if controls.last_enabled => controls.total_pages,
            PageNav::Page(n) if n >= 1 && n <= controls.total_pages && n != page.current_page => n,
            _ => return None,
        };
        Some(GridEvent::PageChange(target))
    }

    pub fn change_page_size(&self, size: usize) -> Option<GridEvent> {
        (size > 0).then_some(GridEvent::PageSizeChange(size))
    }

    pub fn change_search(&self, query: impl Into<String>) -> Option<GridEvent> {
        self.features
            .show_search
            .then(|| GridEvent::SearchChange(query.into()))
    }

    pub fn click_export(&self) -> Option<GridEvent> {
        self.features.show_export_button.then_some(GridEvent::Export)
    }

    /// Refresh clicked: ask the owner to reload, and hold the spinner for
    /// `hold` regardless of when (or whether) the reload finishes.
    pub fn click_refresh(
        &self,
        state: GridViewState,
        now: Instant,
        hold: Duration,
    ) -> (GridViewState, Option<GridEvent>) {
        if !self.features.show_refresh_button {
            return (state, None);
        }
        let state = GridReducer::reduce(state, GridIntent::RefreshClicked { at: now, hold });
        (state, Some(GridEvent::Refresh))
    }

    /// Flip a column's visibility and report the new visible set.
    pub fn toggle_column(&self, state: GridViewState, key: &str) -> (GridViewState, GridEvent) {
        let state = GridReducer::reduce(
            state,
            GridIntent::ToggleColumn {
                key: key.to_string(),
            },
        );
        let keys = state.visibility.visible_keys();
        (state, GridEvent::VisibleColumnsChange(keys))
    }

    /// Toggle the column under the picker cursor.
    pub fn picker_toggle(&self, state: GridViewState) -> (GridViewState, Option<GridEvent>) {
        if !state.picker_open() {
            return (state, None);
        }
        let state = GridReducer::reduce(state, GridIntent::PickerToggle);
        let keys = state.visibility.visible_keys();
        (state, Some(GridEvent::VisibleColumnsChange(keys)))
    }

    /// An action button on row `row` of the rendered slice. Only actions the
    /// row actually offers are accepted.
    pub fn activate_action(
        &self,
        records: &[&R],
        row: usize,
        action: &str,
    ) -> Option<GridEvent> {
        let record = *records.get(row)?;
        let action = self
            .actions
            .for_record(record)
            .into_iter()
            .find(|a| a.id == action)?;
        Some(GridEvent::RowAction {
            action: action.id,
            row,
        })
    }
}

impl<R> fmt::Debug for DataGrid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("actions", &self.actions)
            .field("status", &self.status.is_some())
            .field("features", &self.features)
            .finish()
    }
}

/// Caller-owned inputs for one render pass.
#[derive(Debug)]
pub struct GridInput<'a, R> {
    /// The visible slice, already filtered, sorted and paged.
    pub records: &'a [&'a R],
    pub sort: &'a SortState,
    pub page: PageRequest,
    pub search: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame {
    pub toolbar: Toolbar,
    pub mode: LayoutMode,
    pub header: Vec<HeaderCell>,
    /// Pinned left rail, present only with a status callback.
    pub has_status_rail: bool,
    /// Pinned right rail.
    pub has_action_rail: bool,
    pub body: GridBody,
    pub footer: Option<PaginationFooter>,
}

impl GridFrame {
    /// Columns spanned by a full-width row.
    pub fn column_span(&self) -> usize {
        self.header.len() + usize::from(self.has_status_rail) + usize::from(self.has_action_rail)
    }

    pub fn row_count(&self) -> usize {
        match &self.body {
            GridBody::Rows(rows) => rows.len(),
            GridBody::Empty { .. } => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    pub title: String,
    pub search: Option<SearchBox>,
    pub column_selector: bool,
    pub export: bool,
    pub refresh: Option<RefreshButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub query: String,
    pub width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshButton {
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub width: Option<u16>,
    pub sortable: bool,
    /// `None` for columns that cannot be sorted.
    pub indicator: Option<SortIndicator>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridBody {
    Rows(Vec<GridRow>),
    /// A single explanatory row in place of zero rows.
    Empty { message: String, colspan: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub index: usize,
    pub status: Option<StatusTone>,
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationFooter {
    /// First/prev/numbered pages/next/last plus a page-size selector.
    Desktop {
        controls: PageControls,
        range_label: String,
        page_size: usize,
    },
    /// Two stacked rows: record range, then compact prev/next.
    Mobile {
        range_label: String,
        prev_enabled: bool,
        next_enabled: bool,
        current_page: usize,
        total_pages: usize,
    },
}
