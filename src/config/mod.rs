mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    ColumnConfig, ColumnFormat, Config, GridConfig, RefreshConfig, ScreenConfig, StoreConfig,
};
