//! Shared request/response types used by API-facing crates.

use serde::{Deserialize, Serialize};

/// Greeting returned by the index route.
pub const INDEX_GREETING: &str = "Hello, World. This is simple Response for index!";

/// Raw query parameters of a directory read. Values are validated by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub order_by: Option<String>,
    pub order_by_direction: Option<String>,
    pub filter_by_name: Option<String>,
}

/// Listing returned for a directory target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
    pub is_directory: bool,
    pub files: Vec<String>,
}

impl DirectoryListing {
    #[must_use]
    pub fn new(files: Vec<String>) -> Self {
        Self {
            is_directory: true,
            files,
        }
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBody {
    pub file: String,
}

/// Acknowledgement for a successful write or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_uses_camel_case_keys() {
        let listing = DirectoryListing::new(vec!["a".to_string(), "b".to_string()]);

        let value = serde_json::to_value(&listing).expect("serialize listing");

        assert_eq!(
            value,
            serde_json::json!({ "isDirectory": true, "files": ["a", "b"] })
        );
    }

    #[test]
    fn list_query_reads_wire_names() {
        let query: ListQuery = serde_json::from_str(
            r#"{"orderBy":"size","orderByDirection":"Descending","filterByName":"^t"}"#,
        )
        .expect("deserialize query");

        assert_eq!(query.order_by.as_deref(), Some("size"));
        assert_eq!(query.order_by_direction.as_deref(), Some("Descending"));
        assert_eq!(query.filter_by_name.as_deref(), Some("^t"));
    }

    #[test]
    fn list_query_fields_are_optional() {
        let query: ListQuery = serde_json::from_str("{}").expect("deserialize empty query");

        assert_eq!(query, ListQuery::default());
    }
}
