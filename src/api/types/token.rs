//! Token exchange types.

use serde::{Deserialize, Serialize};

/// Long-lived user token returned by the token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    /// Usually `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_deserialize() {
        let json = r#"{"access_token": "EAAB", "token_type": "bearer", "expires_in": 5183944}"#;
        let token: AccessTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "EAAB");
        assert_eq!(token.token_type.as_deref(), Some("bearer"));
        assert_eq!(token.expires_in, Some(5183944));
    }

    #[test]
    fn test_access_token_minimal() {
        let token: AccessTokenResponse =
            serde_json::from_str(r#"{"access_token": "EAAB"}"#).unwrap();
        assert!(token.expires_in.is_none());
    }
}
