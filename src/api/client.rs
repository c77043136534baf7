//! Constructor-bound Graph page API client.
//!
//! [`PageApiClient`] captures a [`ClientConfig`] and a [`Transport`] once and
//! exposes every operation as a method. Each method delegates to the
//! matching function in [`ops`](crate::api::ops).
//!
//! # Example
//!
//! ```rust,ignore
//! use fb_page_api::api::PageApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PageApiClient::new("app_id", "app_secret")?;
//!
//!     let long_lived = client.exchange_token("short_lived_token").await?;
//!     for page in client.account_pages(&long_lived.access_token, None).await? {
//!         println!("{:?}", page.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use crate::api::config::ClientConfig;
use crate::api::error::{ApiResult, ConfigError};
use crate::api::ops;
use crate::api::transport::{Transport, TransportBuilder};
use crate::api::types::*;

/// Builder for configuring [`PageApiClient`].
#[derive(Debug, Clone)]
pub struct PageApiClientBuilder {
    app_id: String,
    app_secret: String,
    api_version: Option<String>,
    base_url: Option<String>,
    transport: TransportBuilder,
}

impl PageApiClientBuilder {
    /// Create a new builder with the application credentials.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            api_version: None,
            base_url: None,
            transport: TransportBuilder::new(),
        }
    }

    /// Set the API version.
    ///
    /// Defaults to [`DEFAULT_API_VERSION`](crate::network::DEFAULT_API_VERSION).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set the base origin (defaults to [`DEFAULT_GRAPH_URL`](crate::network::DEFAULT_GRAPH_URL)).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a request timeout. None is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.timeout(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.transport = self.transport.header(name, value);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport = self.transport.user_agent(user_agent);
        self
    }

    /// Build the client. Performs no network I/O.
    pub fn build(self) -> Result<PageApiClient, ConfigError> {
        let mut config = ClientConfig::new(self.app_id, self.app_secret)?;
        if let Some(api_version) = self.api_version {
            config = config.with_api_version(api_version)?;
        }
        if let Some(base_url) = self.base_url {
            config = config.with_base_origin(&base_url)?;
        }

        let transport = self.transport.build()?;
        tracing::debug!(
            base_origin = %config.base_origin(),
            api_version = config.api_version(),
            "Graph page API client ready"
        );

        Ok(PageApiClient { config, transport })
    }
}

/// Graph page API client bound to one application.
#[derive(Debug, Clone)]
pub struct PageApiClient {
    config: ClientConfig,
    transport: Transport,
}

impl PageApiClient {
    /// Create a client with the default origin, API version and transport.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a credential is empty or the HTTP client
    /// cannot be initialized.
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        PageApiClientBuilder::new(app_id, app_secret).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> PageApiClientBuilder {
        PageApiClientBuilder::new(app_id, app_secret)
    }

    /// Assemble a client from parts, e.g. a transport shared with other clients.
    pub fn from_parts(config: ClientConfig, transport: Transport) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    // =========================================================================
    // Personal account
    // =========================================================================

    /// Exchange a short-lived user token for a long-lived one.
    pub async fn exchange_token(&self, short_lived_token: &str) -> ApiResult<AccessTokenResponse> {
        ops::exchange_token(&self.transport, &self.config, short_lived_token).await
    }

    /// Profile of the token's user. `fields` defaults to `name,picture`.
    pub async fn user_info(&self, access_token: &str, fields: Option<&str>) -> ApiResult<UserInfo> {
        ops::user_info(&self.transport, &self.config, access_token, fields).await
    }

    /// Pages the user manages, each with its page token.
    pub async fn account_pages(
        &self,
        access_token: &str,
        fields: Option<&str>,
    ) -> ApiResult<Vec<AccountPage>> {
        ops::account_pages(&self.transport, &self.config, access_token, fields).await
    }

    // =========================================================================
    // Page
    // =========================================================================

    pub async fn page_details(
        &self,
        page_id: &str,
        access_token: &str,
        fields: Option<&str>,
    ) -> ApiResult<PageDetails> {
        ops::page_details(&self.transport, &self.config, page_id, access_token, fields).await
    }

    pub async fn page_reviews(
        &self,
        page_id: &str,
        access_token: &str,
    ) -> ApiResult<Vec<PageReview>> {
        ops::page_reviews(&self.transport, &self.config, page_id, access_token).await
    }

    /// The page's `fan_count`.
    pub async fn page_likes(&self, page_id: &str, page_token: &str) -> ApiResult<u64> {
        ops::page_likes(&self.transport, &self.config, page_id, page_token).await
    }

    pub async fn page_analytics(
        &self,
        page_id: &str,
        page_token: &str,
        date_preset: Option<DatePreset>,
        period: Option<InsightsPeriod>,
    ) -> ApiResult<Vec<InsightMetric>> {
        ops::page_analytics(
            &self.transport,
            &self.config,
            page_id,
            page_token,
            date_preset,
            period,
        )
        .await
    }

    pub async fn page_weekly_stats(
        &self,
        page_id: &str,
        page_token: &str,
        params: &InsightsParams,
    ) -> ApiResult<Vec<InsightMetric>> {
        ops::page_weekly_stats(&self.transport, &self.config, page_id, page_token, params).await
    }

    pub async fn page_posts_reactions(
        &self,
        page_id: &str,
        page_token: &str,
        params: &InsightsParams,
    ) -> ApiResult<Vec<InsightMetric>> {
        ops::page_posts_reactions(&self.transport, &self.config, page_id, page_token, params).await
    }

    // =========================================================================
    // Posts
    // =========================================================================

    pub async fn page_posts(
        &self,
        page_id: &str,
        page_token: &str,
        fields: Option<&str>,
    ) -> ApiResult<Vec<PagePost>> {
        ops::page_posts(&self.transport, &self.config, page_id, page_token, fields).await
    }

    pub async fn page_scheduled_posts(
        &self,
        page_id: &str,
        page_token: &str,
        fields: Option<&str>,
    ) -> ApiResult<Vec<PagePost>> {
        ops::page_scheduled_posts(&self.transport, &self.config, page_id, page_token, fields).await
    }

    pub async fn share_text_post_to_page(
        &self,
        page_id: &str,
        page_token: &str,
        payload: &TextPostPayload,
    ) -> ApiResult<CreatedObject> {
        ops::share_text_post_to_page(&self.transport, &self.config, page_id, page_token, payload)
            .await
    }

    pub async fn share_picture_post_to_page(
        &self,
        page_id: &str,
        page_token: &str,
        payload: &PicturePostPayload,
    ) -> ApiResult<CreatedPhoto> {
        ops::share_picture_post_to_page(&self.transport, &self.config, page_id, page_token, payload)
            .await
    }

    pub async fn update_text_post_of_page(
        &self,
        post_id: &str,
        page_token: &str,
        payload: &UpdatePostPayload,
    ) -> ApiResult<SuccessResponse> {
        ops::update_text_post_of_page(&self.transport, &self.config, post_id, page_token, payload)
            .await
    }

    pub async fn delete_page_post(
        &self,
        post_id: &str,
        page_token: &str,
    ) -> ApiResult<SuccessResponse> {
        ops::delete_page_post(&self.transport, &self.config, post_id, page_token).await
    }

    // =========================================================================
    // Comments
    // =========================================================================

    pub async fn page_post_comments(
        &self,
        post_id: &str,
        page_token: &str,
        fields: Option<&str>,
    ) -> ApiResult<Vec<Comment>> {
        ops::page_post_comments(&self.transport, &self.config, post_id, page_token, fields).await
    }

    pub async fn comment_on_post(
        &self,
        post_id: &str,
        page_token: &str,
        comment: &str,
    ) -> ApiResult<CreatedObject> {
        ops::comment_on_post(&self.transport, &self.config, post_id, page_token, comment).await
    }

    pub async fn reply_on_comment(
        &self,
        comment_id: &str,
        page_token: &str,
        reply: &str,
    ) -> ApiResult<CreatedObject> {
        ops::reply_on_comment(&self.transport, &self.config, comment_id, page_token, reply).await
    }

    pub async fn delete_comment(
        &self,
        comment_id: &str,
        page_token: &str,
    ) -> ApiResult<SuccessResponse> {
        ops::delete_comment(&self.transport, &self.config, comment_id, page_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PageApiClient::new("app", "secret").unwrap();
        assert_eq!(client.config().api_version(), "v20.0");
        assert_eq!(
            client.config().base_origin().as_str(),
            "https://graph.facebook.com/"
        );
    }

    #[test]
    fn test_client_builder() {
        let client = PageApiClient::builder("app", "secret")
            .api_version("v19.0")
            .base_url("http://localhost:3000")
            .timeout(Duration::from_secs(60))
            .header("X-Custom-Header", "value")
            .build()
            .unwrap();

        assert_eq!(client.config().api_version(), "v19.0");
        assert_eq!(client.config().base_origin().as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_builder_rejects_empty_credentials() {
        assert!(matches!(
            PageApiClient::new("", "secret"),
            Err(ConfigError::MissingAppId)
        ));
        assert!(matches!(
            PageApiClient::builder("app", "").build(),
            Err(ConfigError::MissingAppSecret)
        ));
        assert!(matches!(
            PageApiClient::builder("app", "secret").api_version("").build(),
            Err(ConfigError::InvalidApiVersion)
        ));
    }

    #[test]
    fn test_from_parts_shares_transport() {
        let transport = Transport::new().unwrap();
        let first =
            PageApiClient::from_parts(ClientConfig::new("a", "s").unwrap(), transport.clone());
        let second = PageApiClient::from_parts(ClientConfig::new("b", "t").unwrap(), transport);
        assert_eq!(first.config().app_id(), "a");
        assert_eq!(second.config().app_id(), "b");
    }
}
