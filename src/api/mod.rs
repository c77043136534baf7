//! REST client module for the Graph page API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fb_page_api::api::{InsightsParams, PageApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PageApiClient::new("app_id", "app_secret")?;
//!
//!     let likes = client.page_likes("page_id", "page_token").await?;
//!     println!("Fans: {}", likes);
//!
//!     let stats = client
//!         .page_weekly_stats("page_id", "page_token", &InsightsParams::default())
//!         .await?;
//!     for metric in stats {
//!         println!("{} ({}): {} points", metric.name, metric.period, metric.values.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use fb_page_api::api::PageApiClient;
//! use std::time::Duration;
//!
//! let client = PageApiClient::builder("app_id", "app_secret")
//!     .api_version("v19.0")
//!     .timeout(Duration::from_secs(20))
//!     .build()?;
//! ```
//!
//! # Stateless use
//!
//! A server acting for several applications can share one [`Transport`] and
//! pass a [`ClientConfig`] per call:
//!
//! ```rust,ignore
//! use fb_page_api::api::{ops, ClientConfig, Transport};
//!
//! let transport = Transport::new()?;
//! let tenant = ClientConfig::new("app_id", "app_secret")?;
//! let user = ops::user_info(&transport, &tenant, "user_token", Some("id,name")).await?;
//! ```
//!
//! # Error Handling
//!
//! Every operation returns `ApiResult<T>`. A failure is one [`UpstreamError`]
//! whose message names the operation and whose cause keeps the root failure:
//!
//! ```rust,ignore
//! match client.delete_comment("comment_id", "page_token").await {
//!     Ok(done) => println!("deleted: {}", done.success),
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         if let Some(status) = e.status() {
//!             eprintln!("status {}", status);
//!         }
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod ops;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{PageApiClient, PageApiClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiResult, ConfigError, ErrorCause, GraphError, GraphErrorResponse, UpstreamError};
pub use request::{HttpMethod, Operation, OperationRequest, RequestBuilder, Route};
pub use transport::{Transport, TransportBuilder};
pub use types::*;
