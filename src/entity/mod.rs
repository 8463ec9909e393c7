//! # Entity Definitions
//!
//! The three record shapes of the catalog: carriers, manufacturers, and
//! phones. Each entity has an explicit record struct (the shape as stored),
//! a draft struct (the create payload, every field optional so presence is
//! a handler-level check), and a documented model for the API docs.

pub mod carrier;
pub mod manufacturer;
pub mod phone;

pub use carrier::{Carrier, CarrierDraft};
pub use manufacturer::{Manufacturer, ManufacturerDraft};
pub use phone::{Phone, PhoneDraft};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// The record types served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Carrier,
    Manufacturer,
    Phone,
}

impl EntityKind {
    /// Store collection holding this entity's records
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Carrier => "carriers",
            EntityKind::Manufacturer => "manufacturers",
            EntityKind::Phone => "phones",
        }
    }

    /// Singular label used in error messages
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Carrier => "carrier",
            EntityKind::Manufacturer => "manufacturer",
            EntityKind::Phone => "phone",
        }
    }

    /// Documented model name
    pub fn model(self) -> &'static str {
        match self {
            EntityKind::Carrier => "Carrier",
            EntityKind::Manufacturer => "Manufacturer",
            EntityKind::Phone => "Phone",
        }
    }
}

/// A create payload for one entity kind.
///
/// Drafts deserialize leniently; the handler checks that `name` is present
/// and non-empty before the store is touched. `fields` never includes an
/// id — ids are store-assigned.
pub trait EntityDraft: DeserializeOwned {
    /// Entity this draft creates
    const KIND: EntityKind;

    /// Caller-supplied name, if any
    fn name(&self) -> Option<&str>;

    /// Document fields to persist
    fn fields(&self) -> Value;
}
