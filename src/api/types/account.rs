//! Personal account types: user info and managed pages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile picture wrapper, `{ "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub data: PictureData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub is_silhouette: Option<bool>,
}

/// Response of `user_info`, returned as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<Picture>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Page category entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A page managed by the user, with its page token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountPage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Page token for page-scoped operations
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_list: Vec<Category>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub picture: Option<Picture>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_keeps_unmodeled_fields() {
        let json = r#"{
            "id": "1017131143339271",
            "name": "Jane Doe",
            "picture": {"data": {"height": 50, "is_silhouette": false, "url": "https://example.com/p.jpg", "width": 50}},
            "email": "jane@example.com"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("Jane Doe"));
        assert_eq!(user.picture.unwrap().data.width, Some(50));
        assert_eq!(user.extra["email"], "jane@example.com");
        assert!(!user.extra.contains_key("name"));
    }

    #[test]
    fn test_account_page_deserialize() {
        let json = r#"{
            "name": "Coffee Corner",
            "access_token": "EAAPage",
            "category": "Cafe",
            "category_list": [{"id": "128673187201735", "name": "Coffee Shop"}],
            "tasks": ["ANALYZE", "ADVERTISE", "MODERATE", "CREATE_CONTENT", "MANAGE"],
            "id": "104"
        }"#;
        let page: AccountPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.access_token.as_deref(), Some("EAAPage"));
        assert_eq!(page.category_list[0].name, "Coffee Shop");
        assert_eq!(page.tasks.len(), 5);
        assert!(page.picture.is_none());
        assert!(page.extra.is_empty());
    }
}
