//! Request payloads and response types for the Graph page API.
//!
//! Fields requested through a caller-supplied `fields` list are optional,
//! and anything not modeled here is kept in the type's `extra` map.

pub mod account;
pub mod comment;
pub mod insights;
pub mod page;
pub mod post;
pub mod token;

pub use account::*;
pub use comment::*;
pub use insights::*;
pub use page::*;
pub use post::*;
pub use token::*;

use serde::{Deserialize, Serialize};

/// List responses wrap their payload under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Cursor links; not followed by this client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<serde_json::Value>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// `{ "success": true }` returned by updates and deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Id of a newly created object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedObject {
    pub id: String,
}
