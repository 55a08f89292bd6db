use serde::{Deserialize, Serialize};

use crate::flow::FlowMessages;
use crate::grid::{GridFeatures, LayoutMetrics, SortPolicy};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub layout: LayoutMetrics,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub flow: FlowMessages,
}

/// Which entity the console manages and how its records are shaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Singular label used in dialog texts (e.g., "agency").
    #[serde(default = "default_entity")]
    pub entity: String,
    /// Title shown in the toolbar (e.g., "Agencies").
    #[serde(default = "default_title")]
    pub title: String,
    /// Field holding the record identity.
    #[serde(default = "default_id_field")]
    pub id_field: String,
    /// Boolean field driving the status rail and (de)activation.
    #[serde(default = "default_status_field")]
    pub status_field: String,
    /// Field edited by the create/edit form.
    #[serde(default = "default_name_field")]
    pub name_field: String,
    /// Explicit columns. Empty means "one column per field of the first record".
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// One configured column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub key: String,
    pub title: String,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub policy: SortPolicy,
    #[serde(default)]
    pub format: ColumnFormat,
}

/// How a configured column renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    #[default]
    Text,
    /// Booleans shown as "Active"/"Inactive".
    Status,
    /// ISO timestamps shown as dates.
    Date,
}

/// Grid defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub show_search: bool,
    pub show_column_selector: bool,
    pub show_export_button: bool,
    pub show_refresh_button: bool,
    pub show_pagination: bool,
    pub show_status_indicator: bool,
}

/// Refresh spinner timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Minimum time the refresh spinner stays visible.
    pub spinner_ms: u64,
}

/// Simulated backend used by the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Delay before each mutation resolves.
    pub latency_ms: u64,
    /// Reject every Nth mutation (0 disables).
    pub fail_every: u32,
}

fn default_entity() -> String {
    "record".to_string()
}

fn default_title() -> String {
    "Records".to_string()
}

fn default_id_field() -> String {
    "id".to_string()
}

fn default_status_field() -> String {
    "active".to_string()
}

fn default_name_field() -> String {
    "name".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            entity: default_entity(),
            title: default_title(),
            id_field: default_id_field(),
            status_field: default_status_field(),
            name_field: default_name_field(),
            columns: Vec::new(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            show_search: true,
            show_column_selector: true,
            show_export_button: true,
            show_refresh_button: true,
            show_pagination: true,
            show_status_indicator: true,
        }
    }
}

impl GridConfig {
    pub fn features(&self) -> GridFeatures {
        GridFeatures {
            show_search: self.show_search,
            show_column_selector: self.show_column_selector,
            show_export_button: self.show_export_button,
            show_refresh_button: self.show_refresh_button,
            show_pagination: self.show_pagination,
            show_status_indicator: self.show_status_indicator,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { spinner_ms: 600 }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency_ms: 800,
            fail_every: 0,
        }
    }
}
