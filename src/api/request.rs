//! Query parameters of the mutating operations
//!
//! Both fields deserialize leniently; an empty string counts as absent so
//! that presence checks live in the actions, not in deserialization.

use serde::Deserialize;

/// Query string of an update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuery {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl UpdateQuery {
    /// Target id, if present and non-empty
    pub fn id(&self) -> Option<&str> {
        present(&self.id)
    }

    /// Replacement name, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }
}

/// Query string of a delete request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl DeleteQuery {
    /// Target id, if present and non-empty
    pub fn id(&self) -> Option<&str> {
        present(&self.id)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_counts_as_absent() {
        let query = UpdateQuery {
            id: Some(String::new()),
            name: Some("X".to_string()),
        };

        assert!(query.id().is_none());
        assert_eq!(query.name(), Some("X"));
    }

    #[test]
    fn test_delete_query_from_query_string() {
        let query: DeleteQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(query.id().is_none());
    }
}
