//! Page post types: payloads for publishing and the feed entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `share_text_post_to_page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPostPayload {
    pub message: String,
    /// `false` creates an unpublished (or scheduled) post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Unix timestamp or ISO 8601 string, passed through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_publish_time: Option<String>,
}

impl TextPostPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            published: None,
            scheduled_publish_time: None,
        }
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Schedule the post; also marks it unpublished, which the API requires.
    pub fn with_scheduled_publish_time(mut self, time: impl Into<String>) -> Self {
        self.published = Some(false);
        self.scheduled_publish_time = Some(time.into());
        self
    }
}

/// Body of `share_picture_post_to_page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicturePostPayload {
    /// Public URL of the image
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_publish_time: Option<String>,
}

impl PicturePostPayload {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            published: None,
            scheduled_publish_time: None,
        }
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_scheduled_publish_time(mut self, time: impl Into<String>) -> Self {
        self.published = Some(false);
        self.scheduled_publish_time = Some(time.into());
        self
    }
}

/// Body of `update_text_post_of_page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostPayload {
    pub message: String,
}

impl UpdatePostPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response of `share_picture_post_to_page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPhoto {
    /// Photo id
    pub id: String,
    /// Feed story id; absent for unpublished photos
    #[serde(default)]
    pub post_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_count: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A connection requested with `.summary(true)`, e.g. `likes` or `comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizedEdge {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub summary: Option<Summary>,
}

impl SummarizedEdge {
    /// `summary.total_count`, or 0 without a summary.
    pub fn total_count(&self) -> u64 {
        self.summary.as_ref().map_or(0, |s| s.total_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shares {
    pub count: u64,
}

/// A feed or scheduled post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub full_picture: Option<String>,
    #[serde(default)]
    pub permalink_url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub likes: Option<SummarizedEdge>,
    #[serde(default)]
    pub comments: Option<SummarizedEdge>,
    #[serde(default)]
    pub shares: Option<Shares>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
