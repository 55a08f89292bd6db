//! Builds the grid descriptors for a configured entity screen.

use crate::config::{ColumnConfig, ColumnFormat, Config};
use crate::grid::{
    ActionSource, ActionVariant, CellValue, Column, DataGrid, RowAction, SortPolicy, StatusTone,
};

use super::record::DynamicRecord;

pub const ACTION_EDIT: &str = "edit";
pub const ACTION_INACTIVATE: &str = "inactivate";
pub const ACTION_REACTIVATE: &str = "reactivate";

/// Column set from config, or inferred from the first record when the
/// config lists none.
pub fn column_configs(config: &Config, sample: Option<&DynamicRecord>) -> Vec<ColumnConfig> {
    if !config.screen.columns.is_empty() {
        return config.screen.columns.clone();
    }
    let Some(sample) = sample else {
        return Vec::new();
    };
    sample
        .keys()
        .map(|key| {
            let value = sample.get(key);
            let format = if key == config.screen.status_field {
                ColumnFormat::Status
            } else if matches!(value, CellValue::Text(_)) && value.as_datetime().is_some() {
                ColumnFormat::Date
            } else {
                ColumnFormat::Text
            };
            let policy = match (&value, format) {
                (_, ColumnFormat::Date) => SortPolicy::Date,
                (CellValue::Integer(_) | CellValue::Decimal(_), _) => SortPolicy::Numeric,
                _ => SortPolicy::Lexicographic,
            };
            ColumnConfig {
                key: key.to_string(),
                title: title_case(key),
                sortable: true,
                width: None,
                policy,
                format,
            }
        })
        .collect()
}

pub fn build_column(spec: &ColumnConfig) -> Column<DynamicRecord> {
    let key = spec.key.clone();
    let mut column = Column::new(spec.key.clone(), spec.title.clone(), move |r: &DynamicRecord| {
        r.get(&key)
    })
    .policy(spec.policy);
    if spec.sortable {
        column = column.sortable();
    }
    if let Some(width) = spec.width {
        column = column.width(width);
    }
    match spec.format {
        ColumnFormat::Text => column,
        ColumnFormat::Status => {
            let key = spec.key.clone();
            column.render(move |_, r: &DynamicRecord| {
                let label = if r.flag(&key) { "Active" } else { "Inactive" };
                label.to_string()
            })
        }
        ColumnFormat::Date => column.render(|value, _| match value.as_datetime() {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => value.to_string(),
        }),
    }
}

/// The grid for one entity screen: columns, per-row actions following the
/// record's status, and a status rail.
pub fn build_grid(config: &Config, sample: Option<&DynamicRecord>) -> DataGrid<DynamicRecord> {
    let columns = column_configs(config, sample)
        .iter()
        .map(build_column)
        .collect();

    let status_field = config.screen.status_field.clone();
    let actions_field = status_field.clone();
    DataGrid::new(config.screen.title.clone(), columns)
        .actions(ActionSource::per_row(move |r: &DynamicRecord| {
            let toggle = if r.flag(&actions_field) {
                RowAction::new(ACTION_INACTIVATE, "⊘", "Deactivate").variant(ActionVariant::Danger)
            } else {
                RowAction::new(ACTION_REACTIVATE, "↺", "Activate").variant(ActionVariant::Primary)
            };
            vec![RowAction::new(ACTION_EDIT, "✎", "Edit"), toggle]
        }))
        .status_color(move |r: &DynamicRecord| {
            if r.raw(&status_field).is_none() {
                StatusTone::Neutral
            } else if r.flag(&status_field) {
                StatusTone::Active
            } else {
                StatusTone::Inactive
            }
        })
        .features(config.grid.features())
        .empty_message(format!("No {} found", config.screen.entity))
}

fn title_case(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DynamicRecord {
        let serde_json::Value::Object(fields) = json!({
            "id": 7,
            "name": "Sede",
            "created_at": "2024-01-05T10:00:00Z",
            "active": false
        }) else {
            unreachable!()
        };
        DynamicRecord::new(fields)
    }

    #[test]
    fn infers_columns_from_sample() {
        let configs = column_configs(&Config::default(), Some(&sample()));
        let keys: Vec<&str> = configs.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "name", "created_at", "active"]);
        assert_eq!(configs[0].policy, SortPolicy::Numeric);
        assert_eq!(configs[2].format, ColumnFormat::Date);
        assert_eq!(configs[2].title, "Created At");
        assert_eq!(configs[3].format, ColumnFormat::Status);
    }

    #[test]
    fn status_and_date_columns_render() {
        let record = sample();
        let configs = column_configs(&Config::default(), Some(&record));
        let columns: Vec<_> = configs.iter().map(build_column).collect();
        assert_eq!(columns[2].display(&record), "2024-01-05");
        assert_eq!(columns[3].display(&record), "Inactive");
    }

    #[test]
    fn inactive_record_offers_reactivate() {
        let grid = build_grid(&Config::default(), Some(&sample()));
        let record = sample();
        let records = [&record];
        assert!(grid.activate_action(&records, 0, ACTION_REACTIVATE).is_some());
        assert!(grid.activate_action(&records, 0, ACTION_INACTIVATE).is_none());
    }
}
