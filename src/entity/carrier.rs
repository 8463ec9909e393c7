//! The carrier record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::docs::{FieldDoc, FieldType, ModelDoc};

use super::{EntityDraft, EntityKind};

/// A phone carrier as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrier {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
}

/// Create payload for a carrier
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarrierDraft {
    #[serde(default)]
    pub name: Option<String>,
}

impl EntityDraft for CarrierDraft {
    const KIND: EntityKind = EntityKind::Carrier;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn fields(&self) -> Value {
        let mut fields = serde_json::Map::new();
        if let Some(name) = &self.name {
            fields.insert("name".to_string(), Value::String(name.clone()));
        }
        Value::Object(fields)
    }
}

/// Documented shape of a carrier record
pub fn model_doc() -> ModelDoc {
    ModelDoc::new("Carrier")
        .field(FieldDoc::required(
            "id",
            FieldType::Uuid,
            "Carrier unique identifier",
        ))
        .field(FieldDoc::required(
            "name",
            FieldType::String,
            "Name of the carrier",
        ))
}
