//! The admin console screen: a configured entity list backed by a JSON
//! fixture and an in-memory store.
//!
//! - `record.rs` - `DynamicRecord`, fixture loading and export
//! - `schema.rs` - columns, row actions and status rail from config
//! - `store.rs` - simulated backend applying mutations after a latency
//! - `page.rs` - `EntityPage`, the view-model tying grid and flow together

mod page;
mod record;
mod schema;
mod store;

pub use page::{EntityPage, FormMode, FormState, Notice, PageCommand};
pub use record::{export_records, load_records, parse_records, DataError, DynamicRecord};
pub use schema::{
    build_column, build_grid, column_configs, ACTION_EDIT, ACTION_INACTIVATE, ACTION_REACTIVATE,
};
pub use store::{run_mutation, Mutation, MutationError, RecordStore, SharedStore};
