//! The phone record
//!
//! Phones reference other records: `manufacturer` holds a manufacturer id
//! and `carriers` holds carrier ids. The store does not enforce referential
//! integrity, and neither does the API layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::docs::{FieldDoc, FieldType, ModelDoc};

use super::{EntityDraft, EntityKind};

/// A phone model as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    /// Id of the manufacturer of this phone
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Ids of the carriers that offer this phone
    #[serde(default)]
    pub carriers: Vec<String>,
    /// Availability status
    #[serde(default)]
    pub status: Option<String>,
}

/// Create payload for a phone
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub carriers: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl EntityDraft for PhoneDraft {
    const KIND: EntityKind = EntityKind::Phone;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn fields(&self) -> Value {
        let mut fields = serde_json::Map::new();
        if let Some(name) = &self.name {
            fields.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(manufacturer) = &self.manufacturer {
            fields.insert(
                "manufacturer".to_string(),
                Value::String(manufacturer.clone()),
            );
        }
        if !self.carriers.is_empty() {
            fields.insert(
                "carriers".to_string(),
                Value::Array(
                    self.carriers
                        .iter()
                        .map(|c| Value::String(c.clone()))
                        .collect(),
                ),
            );
        }
        if let Some(status) = &self.status {
            fields.insert("status".to_string(), Value::String(status.clone()));
        }
        Value::Object(fields)
    }
}

/// Documented shape of a phone record
pub fn model_doc() -> ModelDoc {
    ModelDoc::new("Phone")
        .field(FieldDoc::required(
            "id",
            FieldType::Uuid,
            "Phone unique identifier",
        ))
        .field(FieldDoc::required(
            "name",
            FieldType::String,
            "Name of the phone model",
        ))
        .field(FieldDoc::required(
            "manufacturer",
            FieldType::Uuid,
            "Id of the manufacturer of this phone",
        ))
        .field(FieldDoc::required(
            "carriers",
            FieldType::Array,
            "Ids of the carriers that offer this phone",
        ))
        .field(FieldDoc::required(
            "status",
            FieldType::String,
            "Availability status of this phone",
        ))
}
