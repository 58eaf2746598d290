//! Data Transfer Objects - request/response types for the API.
//!
//! Each operation has its own input schema, validated before the store is
//! touched. Note the author asymmetry: structured `{firstName, lastName}`
//! on input, a single display string on output. This is part of the
//! exercised contract and must not be unified.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured author input for post creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorInput,
}

impl CreatePostRequest {
    /// Check that every required field is present and non-empty.
    /// Returns the first offending field name.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("author.firstName", &self.author.first_name),
            ("author.lastName", &self.author.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Missing or empty field: {field}"));
            }
        }
        Ok(())
    }
}

/// Request to update a post. `id` must match the path; only `title` and
/// `content` are updatable, anything else in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A post as returned by every read and write operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePostRequest {
        CreatePostRequest {
            title: "T".into(),
            content: "C".into(),
            author: AuthorInput {
                first_name: "A".into(),
                last_name: "B".into(),
            },
        }
    }

    #[test]
    fn valid_create_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_fields_are_rejected_with_field_name() {
        let mut req = valid_request();
        req.title = "".into();
        assert!(req.validate().unwrap_err().contains("title"));

        let mut req = valid_request();
        req.content = "  ".into();
        assert!(req.validate().unwrap_err().contains("content"));

        let mut req = valid_request();
        req.author.first_name = "".into();
        assert!(req.validate().unwrap_err().contains("author.firstName"));

        let mut req = valid_request();
        req.author.last_name = "".into();
        assert!(req.validate().unwrap_err().contains("author.lastName"));
    }

    #[test]
    fn author_input_uses_camel_case_wire_names() {
        let req: CreatePostRequest = serde_json::from_value(serde_json::json!({
            "title": "T",
            "content": "C",
            "author": {"firstName": "A", "lastName": "B"},
        }))
        .unwrap();
        assert_eq!(req.author.first_name, "A");
        assert_eq!(req.author.last_name, "B");
    }

    #[test]
    fn update_request_ignores_unknown_fields() {
        let req: UpdatePostRequest = serde_json::from_value(serde_json::json!({
            "id": "f3b7cbcf-3c2a-4a0e-9c4c-6f2de5bb3a10",
            "title": "New",
            "author": "should be ignored",
            "created": 0,
        }))
        .unwrap();
        assert_eq!(req.title.as_deref(), Some("New"));
        assert!(req.content.is_none());
    }
}
