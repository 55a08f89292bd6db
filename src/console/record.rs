//! Records loaded from JSON fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::grid::CellValue;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Data file '{path}' must contain a JSON array of objects")]
    NotAnArray { path: PathBuf },

    #[error("Entry {index} in '{path}' is not a JSON object")]
    NotAnObject { path: PathBuf, index: usize },

    #[error("Failed to write export '{path}': {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One row of an entity screen: an ordered field → value map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicRecord {
    fields: Map<String, Value>,
}

impl DynamicRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> CellValue {
        self.fields.get(key).map(CellValue::from).unwrap_or_default()
    }

    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// A truthy flag: JSON `true`, a non-zero number, or "true"/"1"/"yes".
    pub fn flag(&self, key: &str) -> bool {
        match self.fields.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => {
                matches!(s.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
            }
            _ => false,
        }
    }

    /// Identity as text, whatever JSON type backs it.
    pub fn id(&self, id_field: &str) -> Option<String> {
        match self.fields.get(id_field)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

pub fn load_records(path: &Path) -> Result<Vec<DynamicRecord>, DataError> {
    let content = fs::read_to_string(path).map_err(|e| DataError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_records(&content, path)
}

pub fn parse_records(content: &str, path: &Path) -> Result<Vec<DynamicRecord>, DataError> {
    let value: Value = serde_json::from_str(content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let Value::Array(items) = value else {
        return Err(DataError::NotAnArray {
            path: path.to_path_buf(),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(DynamicRecord::new(fields)),
            _ => Err(DataError::NotAnObject {
                path: path.to_path_buf(),
                index,
            }),
        })
        .collect()
}

/// Write records as a pretty JSON array.
pub fn export_records(path: &Path, records: &[&DynamicRecord]) -> Result<(), DataError> {
    let body = serde_json::to_string_pretty(records).map_err(|e| DataError::Export {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;
    fs::write(path, body).map_err(|e| DataError::Export {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_objects() {
        let records = parse_records(
            r#"[{"id": 1, "name": "Sede", "active": true}]"#,
            Path::new("mem.json"),
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("name"), CellValue::text("Sede"));
        assert_eq!(records[0].id("id").as_deref(), Some("1"));
        assert!(records[0].flag("active"));
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_records(r#"{"id": 1}"#, Path::new("mem.json")).unwrap_err();
        assert!(matches!(err, DataError::NotAnArray { .. }));
    }

    #[test]
    fn rejects_scalar_entries() {
        let err = parse_records(r#"[{"id": 1}, 2]"#, Path::new("mem.json")).unwrap_err();
        assert!(matches!(err, DataError::NotAnObject { index: 1, .. }));
    }

    #[test]
    fn missing_field_is_empty() {
        let record = DynamicRecord::default();
        assert_eq!(record.get("anything"), CellValue::Empty);
        assert!(!record.flag("active"));
    }
}
