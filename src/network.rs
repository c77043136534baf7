//! Network constants for the Graph API.

/// Default Graph API origin.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com/";

/// API version used when the caller does not pick one.
pub const DEFAULT_API_VERSION: &str = "v20.0";
