//! Generic list-management engine: search, sort, paging, column visibility,
//! toolbar negotiation and the data grid frame built from them.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) for the state the grid owns:
//! - `state.rs` - `GridViewState` (visible columns, search width, refresh flag)
//! - `intent.rs` - resize, refresh, column picker gestures
//! - `reducer.rs` - state transitions
//! - `model.rs` - `DataGrid` frame builder and gesture → `GridEvent` mapping
//!
//! Everything the page owns (records, sort, search text, current page) stays
//! outside and is passed in per render.

mod actions;
mod columns;
mod events;
mod intent;
mod layout;
mod model;
mod pagination;
mod reducer;
mod search;
mod sort;
mod state;
mod value;

pub use actions::{ActionFactory, ActionSource, ActionVariant, RowAction};
pub use columns::{column_keys, Column, ColumnVisibility};
pub use events::{GridEvent, PageNav};
pub use intent::GridIntent;
pub use layout::{GridLayoutNegotiator, LayoutMetrics, LayoutMode};
pub use model::{
    DataGrid, GridBody, GridFeatures, GridFrame, GridInput, GridRow, HeaderCell,
    PaginationFooter, RefreshButton, SearchBox, StatusTone, Toolbar,
};
pub use pagination::{page_window, PageControls, PageRequest, MAX_PAGE_BUTTONS};
pub use reducer::GridReducer;
pub use search::{fold, SearchPredicate};
pub use sort::{
    compare_values, SortComparator, SortDirection, SortIndicator, SortKey, SortPolicy, SortState,
};
pub use state::{GridViewState, PickerState};
pub use value::CellValue;
