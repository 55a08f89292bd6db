//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use admin_grid::console::DynamicRecord;
use admin_grid::grid::{CellValue, Column, DataGrid, SortPolicy, StatusTone};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// A record from a JSON object literal.
pub fn record(value: Value) -> DynamicRecord {
    let Value::Object(fields) = value else {
        panic!("record fixture must be a JSON object");
    };
    DynamicRecord::new(fields)
}

/// `n` records with ids 1..=n, names "Unit 01".., odd ids active.
pub fn numbered_records(n: usize) -> Vec<DynamicRecord> {
    (1..=n)
        .map(|i| {
            record(serde_json::json!({
                "id": i,
                "name": format!("Unit {i:02}"),
                "active": i % 2 == 1,
            }))
        })
        .collect()
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Typed row used by grid-level tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Agency {
    pub id: i64,
    pub name: &'static str,
    pub active: bool,
}

pub fn agencies() -> Vec<Agency> {
    vec![
        Agency {
            id: 1,
            name: "Secretaría de Saúde",
            active: true,
        },
        Agency {
            id: 2,
            name: "Agência Norte",
            active: false,
        },
        Agency {
            id: 3,
            name: "Fundo Municipal",
            active: true,
        },
    ]
}

pub fn agency_columns() -> Vec<Column<Agency>> {
    vec![
        Column::new("id", "Id", |a: &Agency| CellValue::Integer(a.id))
            .sortable()
            .policy(SortPolicy::Numeric)
            .width(4),
        Column::new("name", "Name", |a: &Agency| CellValue::Text(a.name.to_string())).sortable(),
        Column::new("active", "Status", |a: &Agency| CellValue::Bool(a.active)),
    ]
}

pub fn agency_grid() -> DataGrid<Agency> {
    DataGrid::new("Agencies", agency_columns()).status_color(|a: &Agency| {
        if a.active {
            StatusTone::Active
        } else {
            StatusTone::Inactive
        }
    })
}
