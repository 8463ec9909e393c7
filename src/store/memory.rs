//! # In-Memory Document Store
//!
//! Default [`RecordStore`] backing the server, and the test double for the
//! API layer. Collections are vectors of JSON documents in insertion order;
//! ids are store-assigned UUIDs.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::{RecordStore, UpdateOutcome};

/// In-memory record store
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Collection name -> documents in insertion order
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The store-assigned identifier of a document
fn doc_id(doc: &Value) -> Option<&str> {
    doc.get("id").and_then(Value::as_str)
}

impl RecordStore for MemoryStore {
    fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read().map_err(|_| StoreError::poisoned())?;

        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn find_one(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let collections = self.collections.read().map_err(|_| StoreError::poisoned())?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc_id(doc) == Some(id)))
            .cloned())
    }

    fn insert(&self, collection: &str, fields: Value) -> StoreResult<Option<Value>> {
        let Value::Object(mut doc) = fields else {
            return Err(StoreError::Malformed(
                "document fields must be an object".to_string(),
            ));
        };

        // The id is store-assigned; a client-supplied one is discarded
        doc.insert(
            "id".to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
        let doc = Value::Object(doc);

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::poisoned())?;

        collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());

        Ok(Some(doc))
    }

    fn update_one(&self, collection: &str, id: &str, fields: Value) -> StoreResult<UpdateOutcome> {
        let Value::Object(patches) = fields else {
            return Err(StoreError::Malformed(
                "update fields must be an object".to_string(),
            ));
        };

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::poisoned())?;

        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc_id(doc) == Some(id)));

        let Some(Value::Object(doc)) = target else {
            return Ok(UpdateOutcome {
                matched: 0,
                modified: 0,
            });
        };

        let mut changed = false;
        for (key, value) in patches {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                changed = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(changed),
        })
    }

    fn delete_one(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::poisoned())?;

        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|doc| doc_id(doc) != Some(id));
        }

        Ok(())
    }
}
