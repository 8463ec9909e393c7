//! The manufacturer record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::docs::{FieldDoc, FieldType, ModelDoc};

use super::{EntityDraft, EntityKind};

/// A phone manufacturer as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
}

/// Create payload for a manufacturer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManufacturerDraft {
    #[serde(default)]
    pub name: Option<String>,
}

impl EntityDraft for ManufacturerDraft {
    const KIND: EntityKind = EntityKind::Manufacturer;

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

/// Documented shape of a manufacturer record
pub fn model_doc() -> ModelDoc {
    ModelDoc::new("Manufacturer")
        .field(FieldDoc::required(
            "id",
            FieldType::Uuid,
            "Manufacturer unique identifier",
        ))
        .field(FieldDoc::required(
            "name",
            FieldType::String,
            "Name of the manufacturer",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_fields() {
        let draft: ManufacturerDraft =
            serde_json::from_value(json!({"name": "Nokia"})).unwrap();
        assert_eq!(draft.name(), Some("Nokia"));
        assert_eq!(draft.fields(), json!({"name": "Nokia"}));
    }

    #[test]
    fn test_model_doc_required_fields() {
        let doc = model_doc();
        assert_eq!(doc.required_fields(), ["id", "name"]);
    }
}
