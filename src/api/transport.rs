//! HTTP transport shared by every operation.
//!
//! [`Transport`] owns one pooled `reqwest::Client`. It sends an
//! [`OperationRequest`], decodes a 2xx body into the caller's type, and
//! turns anything else into an [`UpstreamError`] for that operation.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::{ApiResult, ConfigError, ErrorCause, GraphErrorResponse, UpstreamError};
use crate::api::request::OperationRequest;

/// Builder for configuring [`Transport`].
#[derive(Debug, Clone, Default)]
pub struct TransportBuilder {
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
    user_agent: Option<String>,
}

impl TransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a request timeout. No timeout is applied unless set here.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the transport.
    pub fn build(self) -> Result<Transport, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in self.default_headers {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(10);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let http_client = builder.build().map_err(ConfigError::HttpClient)?;
        Ok(Transport { http_client })
    }
}

/// Pooled HTTP client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: Client,
}

impl Transport {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self, ConfigError> {
        TransportBuilder::new().build()
    }

    pub fn builder() -> TransportBuilder {
        TransportBuilder::new()
    }

    /// Send a request and decode the successful response body.
    pub async fn send<T: DeserializeOwned>(&self, request: &OperationRequest) -> ApiResult<T> {
        self.execute(request)
            .await
            .map_err(|cause| UpstreamError::new(request.operation, cause))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: &OperationRequest,
    ) -> Result<T, ErrorCause> {
        let url = request.url()?;

        tracing::debug!(
            operation = request.operation.name(),
            method = %request.method,
            path = %request.path,
            "Sending Graph API request"
        );

        let mut builder = self.http_client.request(request.method.into(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::parse_error_response(response).await);
        }

        tracing::debug!(
            operation = request.operation.name(),
            status = %status,
            "Graph API request succeeded"
        );

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ErrorCause::Json)
    }

    /// Read a non-2xx response into [`ErrorCause::Status`].
    async fn parse_error_response(response: reqwest::Response) -> ErrorCause {
        let status = response.status();
        let raw = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                return ErrorCause::Status {
                    status,
                    body: None,
                    raw: format!("body unreadable: {}", e),
                };
            }
        };

        let body = match serde_json::from_str::<GraphErrorResponse>(&raw) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(status = %status, "Error response is not a Graph error: {}", e);
                None
            }
        };

        ErrorCause::Status { status, body, raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        assert!(Transport::new().is_ok());
    }

    #[test]
    fn test_transport_builder() {
        let transport = Transport::builder()
            .timeout(Duration::from_secs(5))
            .header("X-Custom-Header", "value")
            .user_agent("fb-page-api-tests")
            .build();
        assert!(transport.is_ok());
    }

    #[test]
    fn test_invalid_header_name() {
        let err = Transport::builder()
            .header("bad header", "value")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { ref name, .. } if name == "bad header"));
    }

    #[test]
    fn test_invalid_header_value() {
        let err = Transport::builder()
            .header("X-Ok", "line\nbreak")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { .. }));
    }
}
