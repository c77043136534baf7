//! # Facebook Page API SDK
//!
//! Typed async client for the Graph API endpoints used to manage a page:
//! token exchange, managed-page discovery, page metadata, insights, and
//! post and comment CRUD.
//!
//! ## Modules
//!
//! - [`api`]: client, request builder, transport, errors and types
//! - [`network`]: default origin and API version
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fb_page_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PageApiClient::new("app_id", "app_secret")?;
//!
//!     let user_token = client.exchange_token("short_lived_token").await?.access_token;
//!     let pages = client.account_pages(&user_token, None).await?;
//!
//!     if let Some(page) = pages.first() {
//!         let id = page.id.as_deref().unwrap_or_default();
//!         let token = page.access_token.as_deref().unwrap_or_default();
//!         let post = client
//!             .share_text_post_to_page(id, token, &TextPostPayload::new("Hello from Rust"))
//!             .await?;
//!         println!("Created post {}", post.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Graph API REST client.
pub mod api;

/// Network constants (origin and API version).
pub mod network;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use fb_page_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ops, ApiResult, ClientConfig, ConfigError, ErrorCause, Operation, PageApiClient,
        PageApiClientBuilder, Transport, UpstreamError,
        // Parameters and payloads
        DatePreset, InsightsParams, InsightsPeriod, PicturePostPayload, TextPostPayload,
        UpdatePostPayload,
        // Responses
        AccessTokenResponse, AccountPage, Comment, CreatedObject, CreatedPhoto, InsightMetric,
        PageDetails, PagePost, PageReview, SuccessResponse, UserInfo,
    };

    pub use crate::network::{DEFAULT_API_VERSION, DEFAULT_GRAPH_URL};
}
