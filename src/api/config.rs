//! Immutable client configuration.

use std::fmt;

use reqwest::Url;

use crate::api::error::ConfigError;
use crate::network::{DEFAULT_API_VERSION, DEFAULT_GRAPH_URL};

/// Origin, API version and application credentials.
///
/// Built once and never mutated afterwards; the `with_*` methods consume
/// the value and return a new one.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_origin: Url,
    api_version: String,
    app_id: String,
    app_secret: String,
}

impl ClientConfig {
    /// Create a config for the default origin and API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAppId`] or [`ConfigError::MissingAppSecret`]
    /// when a credential is empty.
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        let app_secret = app_secret.into();
        if app_id.trim().is_empty() {
            return Err(ConfigError::MissingAppId);
        }
        if app_secret.trim().is_empty() {
            return Err(ConfigError::MissingAppSecret);
        }

        Ok(Self {
            base_origin: parse_origin(DEFAULT_GRAPH_URL)?,
            api_version: DEFAULT_API_VERSION.to_string(),
            app_id,
            app_secret,
        })
    }

    /// Use a specific API version, e.g. `"v19.0"`.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Result<Self, ConfigError> {
        let api_version = api_version.into();
        if api_version.trim().is_empty() {
            return Err(ConfigError::InvalidApiVersion);
        }
        self.api_version = api_version;
        Ok(self)
    }

    /// Point the client at another origin (a proxy or a mock server).
    pub fn with_base_origin(mut self, origin: &str) -> Result<Self, ConfigError> {
        self.base_origin = parse_origin(origin)?;
        Ok(self)
    }

    pub fn base_origin(&self) -> &Url {
        &self.base_origin
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_origin", &self.base_origin.as_str())
            .field("api_version", &self.api_version)
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

/// Parse an absolute http(s) origin; the path always ends with `/`.
fn parse_origin(origin: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: origin.to_string(),
        reason,
    };

    let mut url = Url::parse(origin.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("app", "secret").unwrap();
        assert_eq!(config.base_origin().as_str(), "https://graph.facebook.com/");
        assert_eq!(config.api_version(), "v20.0");
        assert_eq!(config.app_id(), "app");
        assert_eq!(config.app_secret(), "secret");
    }

    #[test]
    fn test_missing_credentials() {
        assert!(matches!(
            ClientConfig::new("", "secret"),
            Err(ConfigError::MissingAppId)
        ));
        assert!(matches!(
            ClientConfig::new("  ", "secret"),
            Err(ConfigError::MissingAppId)
        ));
        assert!(matches!(
            ClientConfig::new("app", ""),
            Err(ConfigError::MissingAppSecret)
        ));
    }

    #[test]
    fn test_api_version() {
        let config = ClientConfig::new("app", "secret")
            .unwrap()
            .with_api_version("v19.0")
            .unwrap();
        assert_eq!(config.api_version(), "v19.0");

        let err = ClientConfig::new("app", "secret")
            .unwrap()
            .with_api_version("")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiVersion));
    }

    #[test]
    fn test_base_origin_normalization() {
        let config = ClientConfig::new("app", "secret")
            .unwrap()
            .with_base_origin("http://localhost:8080/proxy?x=1")
            .unwrap();
        assert_eq!(config.base_origin().as_str(), "http://localhost:8080/proxy/");

        let config = config.with_base_origin("http://localhost:8080").unwrap();
        assert_eq!(config.base_origin().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_invalid_base_origin() {
        let base = ClientConfig::new("app", "secret").unwrap();
        assert!(matches!(
            base.clone().with_base_origin("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            base.with_base_origin("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new("app", "hunter2").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("app"));
        assert!(!debug.contains("hunter2"));
    }
}
