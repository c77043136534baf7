//! Post comment types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: String,
    pub name: String,
}

/// A comment on a page post or a reply to a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: Option<String>,
    /// Absent when the token may not see the author
    #[serde(default)]
    pub from: Option<CommentAuthor>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of comment creation and replies.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct CommentPayload<'a> {
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_deserialize() {
        let json = r#"{
            "from": {"name": "Sam", "id": "55"},
            "message": "Great news",
            "id": "104_1_9"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.from.unwrap().name, "Sam");
        assert_eq!(comment.message.as_deref(), Some("Great news"));
        assert!(comment.created_time.is_none());
    }

    #[test]
    fn test_comment_payload_serialize() {
        let json = serde_json::to_string(&CommentPayload { message: "Thanks!" }).unwrap();
        assert_eq!(json, r#"{"message":"Thanks!"}"#);
    }
}
