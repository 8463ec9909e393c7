//! # Record Store
//!
//! The document store behind the catalog API. Handlers talk to the store
//! through the [`RecordStore`] trait and never hold record state themselves;
//! the store exclusively owns all persisted documents and assigns their ids.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw result of a single-document update.
///
/// `modified` counts documents whose content actually changed; a matched
/// document whose fields already held the submitted values does not count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Documents matching the target id (0 or 1)
    pub matched: u64,
    /// Documents whose content changed (0 or 1)
    pub modified: u64,
}

/// Store operations required by the API layer.
///
/// One call per request; concurrency discipline (locking, pooling) is the
/// implementation's own concern. Implementations must be shareable across
/// request handlers.
pub trait RecordStore: Send + Sync {
    /// All documents of a collection, in the store's natural order.
    fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>>;

    /// A single document by id, or `None` when no document matches.
    fn find_one(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;

    /// Insert a document built from `fields`; the store assigns the id.
    ///
    /// A store may acknowledge the write without materializing the document,
    /// in which case it returns `Ok(None)`.
    fn insert(&self, collection: &str, fields: Value) -> StoreResult<Option<Value>>;

    /// Merge `fields` into the document matching `id`. Never an upsert.
    fn update_one(&self, collection: &str, id: &str, fields: Value) -> StoreResult<UpdateOutcome>;

    /// Remove the document matching `id`. A missing id is not an error.
    fn delete_one(&self, collection: &str, id: &str) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_outcome_serialization() {
        let outcome = UpdateOutcome {
            matched: 1,
            modified: 1,
        };

        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["matched"], 1);
        assert_eq!(json["modified"], 1);
    }
}
