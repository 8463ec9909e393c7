//! # API Documentation
//!
//! Machine-readable documentation assembled from route metadata. The route
//! registrar describes every operation it binds; the entity modules describe
//! their record shapes. This module collects both into one JSON document
//! served at `/api-docs`.

use serde::Serialize;

use crate::entity;

/// Field types appearing in documented models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Uuid,
    String,
    Array,
}

/// One documented field of a record shape
#[derive(Debug, Clone, Serialize)]
pub struct FieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub description: String,
}

impl FieldDoc {
    pub fn required(
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            description: description.into(),
        }
    }

    pub fn optional(
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            description: description.into(),
        }
    }
}

/// Documented shape of one record type
#[derive(Debug, Clone, Serialize)]
pub struct ModelDoc {
    pub name: String,
    pub fields: Vec<FieldDoc>,
}

impl ModelDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDoc) -> Self {
        self.fields.push(field);
        self
    }

    /// Names of the fields marked required
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// Where an operation parameter is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// One documented parameter of an operation
#[derive(Debug, Clone, Serialize)]
pub struct ParamDoc {
    pub name: String,
    pub location: ParamLocation,
    #[serde(rename = "type")]
    pub data_type: String,
    pub required: bool,
    pub description: String,
}

impl ParamDoc {
    pub fn path(
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Path,
            data_type: data_type.into(),
            required: true,
            description: description.into(),
        }
    }

    pub fn query(
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Query,
            data_type: data_type.into(),
            required,
            description: description.into(),
        }
    }

    pub fn body(
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Body,
            data_type: data_type.into(),
            required: true,
            description: description.into(),
        }
    }
}

/// A response an operation is documented to produce
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMessageDoc {
    pub code: u16,
    pub message: String,
}

impl ResponseMessageDoc {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// One documented route binding
#[derive(Debug, Clone, Serialize)]
pub struct OperationDoc {
    pub method: &'static str,
    pub path: String,
    pub summary: String,
    pub notes: String,
    pub nickname: String,
    pub parameters: Vec<ParamDoc>,
    pub response_messages: Vec<ResponseMessageDoc>,
}

impl OperationDoc {
    pub fn new(method: &'static str, path: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            summary: summary.into(),
            notes: String::new(),
            nickname: String::new(),
            parameters: Vec::new(),
            response_messages: Vec::new(),
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn param(mut self, param: ParamDoc) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn response(mut self, response: ResponseMessageDoc) -> Self {
        self.response_messages.push(response);
        self
    }
}

/// The complete API documentation document
#[derive(Debug, Clone, Serialize)]
pub struct ApiDoc {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub models: Vec<ModelDoc>,
    pub operations: Vec<OperationDoc>,
}

impl ApiDoc {
    /// Assemble the documentation from the registrar's operation metadata
    /// and the entity model definitions.
    pub fn build(operations: Vec<OperationDoc>) -> Self {
        Self {
            title: "Phone catalog API",
            description: "A small database of cell phones, manufacturers, and carriers",
            version: env!("CARGO_PKG_VERSION"),
            models: vec![
                entity::carrier::model_doc(),
                entity::manufacturer::model_doc(),
                entity::phone::model_doc(),
            ],
            operations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_doc_builder() {
        let model = ModelDoc::new("Thing")
            .field(FieldDoc::required("id", FieldType::Uuid, "identifier"))
            .field(FieldDoc::optional("note", FieldType::String, "free text"));

        assert_eq!(model.fields.len(), 2);
        assert_eq!(model.required_fields(), ["id"]);
    }

    #[test]
    fn test_field_type_serializes_lowercase() {
        let json = serde_json::to_value(FieldType::Uuid).unwrap();
        assert_eq!(json, "uuid");
    }

    #[test]
    fn test_operation_doc_builder() {
        let op = OperationDoc::new("GET", "/carrier/{carrierId}", "Find carrier by ID")
            .notes("Returns a carrier based on ID")
            .nickname("getCarrierById")
            .param(ParamDoc::path(
                "carrierId",
                "ID of the carrier to return",
                "string",
            ))
            .response(ResponseMessageDoc::new(404, "carrier not found"));

        assert_eq!(op.parameters.len(), 1);
        assert_eq!(op.parameters[0].location, ParamLocation::Path);
        assert_eq!(op.response_messages[0].code, 404);
    }

    #[test]
    fn test_api_doc_carries_all_models() {
        let doc = ApiDoc::build(Vec::new());

        let names: Vec<&str> = doc.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Carrier", "Manufacturer", "Phone"]);
    }

    #[test]
    fn test_api_doc_serialization() {
        let doc = ApiDoc::build(vec![OperationDoc::new("GET", "/carrier/list", "List")]);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["operations"][0]["method"], "GET");
        assert_eq!(json["models"][0]["fields"][0]["type"], "uuid");
    }
}
