//! # Action Handlers
//!
//! The five operations, uniform across the three entities. Each action
//! validates its input, performs exactly one store call, and maps the
//! outcome to a response value or an [`ApiError`]. Actions hold no state
//! between requests; the store handle is injected at construction so a
//! fake store can stand in during tests.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::entity::{EntityDraft, EntityKind};
use crate::store::{RecordStore, UpdateOutcome};

use super::errors::{ApiError, ApiResult};
use super::request::{DeleteQuery, UpdateQuery};
use super::response::Ack;

/// The request-to-store mapping layer
pub struct CatalogApi {
    store: Arc<dyn RecordStore>,
}

impl CatalogApi {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// All records of the entity, in the store's order. An empty collection
    /// is an empty list, not a failure.
    pub fn list(&self, kind: EntityKind) -> ApiResult<Vec<Value>> {
        self.store
            .find_all(kind.collection())
            .map_err(|_| ApiError::InvalidRead(kind.collection().to_string()))
    }

    /// One record by id. A store failure reads as an invalid id; an
    /// unmatched id as not-found.
    pub fn get_by_id(&self, kind: EntityKind, id: &str) -> ApiResult<Value> {
        match self.store.find_one(kind.collection(), id) {
            Err(_) => Err(ApiError::InvalidRead("id".to_string())),
            Ok(None) => Err(ApiError::NotFound(kind.label())),
            Ok(Some(doc)) => Ok(doc),
        }
    }

    /// Create a record from a draft. The store assigns the id.
    pub fn create<D: EntityDraft>(&self, body: Option<D>) -> ApiResult<Value> {
        let entity = D::KIND.label();

        let draft = body.ok_or(ApiError::MissingField {
            entity,
            field: "name",
        })?;
        if draft.name().map_or(true, str::is_empty) {
            return Err(ApiError::MissingField {
                entity,
                field: "name",
            });
        }

        let created = self.store.insert(D::KIND.collection(), draft.fields())?;
        created.ok_or(ApiError::NotAdded(entity))
    }

    /// Replace the name of the record matching `query.id`. Never an upsert;
    /// the id check precedes the name check.
    pub fn update(&self, kind: EntityKind, query: UpdateQuery) -> ApiResult<UpdateOutcome> {
        let Some(id) = query.id() else {
            return Err(ApiError::MissingField {
                entity: kind.label(),
                field: "id",
            });
        };
        let Some(name) = query.name() else {
            return Err(ApiError::MissingField {
                entity: kind.label(),
                field: "name",
            });
        };

        let outcome = self
            .store
            .update_one(kind.collection(), id, json!({ "name": name }))?;

        // Zero modified rows covers both an unmatched id and an unchanged
        // name; the store contract does not distinguish them.
        if outcome.modified > 0 {
            Ok(outcome)
        } else {
            Err(ApiError::NotUpdated(kind.label()))
        }
    }

    /// Remove the record matching `query.id`. Deleting a nonexistent id is
    /// acknowledged, not an error.
    pub fn delete(&self, kind: EntityKind, query: DeleteQuery) -> ApiResult<Ack> {
        let Some(id) = query.id() else {
            return Err(ApiError::MissingField {
                entity: kind.label(),
                field: "id",
            });
        };

        self.store.delete_one(kind.collection(), id)?;

        Ok(Ack::ok())
    }
}
