//! In-memory stand-in for the entity backend.
//!
//! The console treats this as a remote service: mutations are applied from
//! a tokio task after a configurable latency, and the page only learns the
//! outcome through an event.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{ScreenConfig, StoreConfig};
use crate::flow::FlowKind;

use super::record::DynamicRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("No record with id '{id}'")]
    NotFound { id: String },

    #[error("Backend rejected the {kind} request")]
    Rejected { kind: FlowKind },
}

/// A change requested by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create { name: String },
    Edit { id: String, name: String },
    SetActive { id: String, active: bool },
}

impl Mutation {
    pub fn kind(&self) -> FlowKind {
        match self {
            Self::Create { .. } => FlowKind::Create,
            Self::Edit { .. } => FlowKind::Edit,
            Self::SetActive { active: false, .. } => FlowKind::Inactivate,
            Self::SetActive { active: true, .. } => FlowKind::Reactivate,
        }
    }
}

pub type SharedStore = Arc<Mutex<RecordStore>>;

#[derive(Debug)]
pub struct RecordStore {
    records: Vec<DynamicRecord>,
    id_field: String,
    name_field: String,
    status_field: String,
    fail_every: u32,
    attempts: u32,
}

impl RecordStore {
    pub fn new(records: Vec<DynamicRecord>, screen: &ScreenConfig, store: &StoreConfig) -> Self {
        Self {
            records,
            id_field: screen.id_field.clone(),
            name_field: screen.name_field.clone(),
            status_field: screen.status_field.clone(),
            fail_every: store.fail_every,
            attempts: 0,
        }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn snapshot(&self) -> Vec<DynamicRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn apply(&mut self, mutation: &Mutation) -> Result<(), MutationError> {
        self.attempts += 1;
        if self.fail_every > 0 && self.attempts % self.fail_every == 0 {
            return Err(MutationError::Rejected {
                kind: mutation.kind(),
            });
        }

        match mutation {
            Mutation::Create { name } => {
                let mut fields = Map::new();
                fields.insert(self.id_field.clone(), self.next_id());
                fields.insert(self.name_field.clone(), Value::String(name.clone()));
                fields.insert(self.status_field.clone(), Value::Bool(true));
                self.records.push(DynamicRecord::new(fields));
            }
            Mutation::Edit { id, name } => {
                let name_field = self.name_field.clone();
                self.find_mut(id)?
                    .set(&name_field, Value::String(name.clone()));
            }
            Mutation::SetActive { id, active } => {
                let status_field = self.status_field.clone();
                self.find_mut(id)?.set(&status_field, Value::Bool(*active));
            }
        }
        Ok(())
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut DynamicRecord, MutationError> {
        let id_field = &self.id_field;
        self.records
            .iter_mut()
            .find(|r| r.id(id_field).as_deref() == Some(id))
            .ok_or_else(|| MutationError::NotFound { id: id.to_string() })
    }

    /// One past the largest numeric id, or a string id when ids are not
    /// numeric.
    fn next_id(&self) -> Value {
        let numeric: Option<Vec<i64>> = self
            .records
            .iter()
            .map(|r| r.raw(&self.id_field).and_then(Value::as_i64))
            .collect();
        match numeric {
            Some(ids) => Value::from(ids.into_iter().max().unwrap_or(0) + 1),
            None => Value::String(format!("new-{}", self.records.len() + 1)),
        }
    }
}

/// Apply `mutation` after `latency`, the way a remote call would resolve.
pub async fn run_mutation(
    store: SharedStore,
    mutation: Mutation,
    latency: Duration,
) -> Result<(), MutationError> {
    tokio::time::sleep(latency).await;
    let result = store.lock().apply(&mutation);
    match &result {
        Ok(()) => tracing::info!(?mutation, "mutation applied"),
        Err(err) => tracing::warn!(?mutation, %err, "mutation failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(fail_every: u32) -> RecordStore {
        let Value::Object(fields) = json!({"id": 3, "name": "Sede", "active": true}) else {
            unreachable!()
        };
        RecordStore::new(
            vec![DynamicRecord::new(fields)],
            &ScreenConfig::default(),
            &StoreConfig {
                latency_ms: 0,
                fail_every,
            },
        )
    }

    #[test]
    fn create_assigns_next_numeric_id() {
        let mut store = store(0);
        store
            .apply(&Mutation::Create {
                name: "Anexo".into(),
            })
            .unwrap();
        let records = store.snapshot();
        assert_eq!(records[1].id("id").as_deref(), Some("4"));
        assert!(records[1].flag("active"));
    }

    #[test]
    fn set_active_flips_status() {
        let mut store = store(0);
        store
            .apply(&Mutation::SetActive {
                id: "3".into(),
                active: false,
            })
            .unwrap();
        assert!(!store.snapshot()[0].flag("active"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = store(0);
        let err = store
            .apply(&Mutation::Edit {
                id: "99".into(),
                name: "x".into(),
            })
            .unwrap_err();
        assert_eq!(err, MutationError::NotFound { id: "99".into() });
    }

    #[test]
    fn every_nth_attempt_is_rejected() {
        let mut store = store(2);
        let toggle = Mutation::SetActive {
            id: "3".into(),
            active: false,
        };
        assert!(store.apply(&toggle).is_ok());
        assert_eq!(
            store.apply(&toggle),
            Err(MutationError::Rejected {
                kind: FlowKind::Inactivate
            })
        );
    }

    #[tokio::test]
    async fn run_mutation_applies_after_latency() {
        let shared = store(0).shared();
        run_mutation(
            Arc::clone(&shared),
            Mutation::Create { name: "X".into() },
            Duration::from_millis(1),
        )
        .await
        .unwrap();
        assert_eq!(shared.lock().len(), 2);
    }
}
