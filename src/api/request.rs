//! Request construction: the per-operation route table and [`RequestBuilder`].
//!
//! Every operation's HTTP method, path template and error description live
//! in [`Operation::route`]. A few routes of the wrapped API are addressed
//! without the version prefix; that quirk is confined to this table.

use std::fmt;

use reqwest::Url;
use serde::Serialize;

use crate::api::config::ClientConfig;
use crate::api::error::{ErrorCause, UpstreamError};

/// Query parameter carrying the caller's token.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Query keys whose values never appear in `Debug` output.
const REDACTED_PARAMS: [&str; 3] = [ACCESS_TOKEN_PARAM, "client_secret", "fb_exchange_token"];

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One remote capability exposed by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ExchangeToken,
    UserInfo,
    AccountPages,
    PageDetails,
    PageReviews,
    PageLikes,
    PageAnalytics,
    PageWeeklyStats,
    PagePostsReactions,
    PagePosts,
    PageScheduledPosts,
    ShareTextPostToPage,
    SharePicturePostToPage,
    UpdateTextPostOfPage,
    DeletePagePost,
    PagePostComments,
    CommentOnPost,
    ReplyOnComment,
    DeleteComment,
}

/// Static description of how an operation is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    /// Whether the path is prefixed with the API version
    pub versioned: bool,
    /// Resource path; `{id}` is the only placeholder
    pub template: &'static str,
    /// Fixed prefix of the operation's error messages
    pub description: &'static str,
}

const fn route(
    method: HttpMethod,
    versioned: bool,
    template: &'static str,
    description: &'static str,
) -> Route {
    Route {
        method,
        versioned,
        template,
        description,
    }
}

impl Operation {
    /// Every operation, in facade order.
    pub const ALL: [Operation; 19] = [
        Operation::ExchangeToken,
        Operation::UserInfo,
        Operation::AccountPages,
        Operation::PageDetails,
        Operation::PageReviews,
        Operation::PageLikes,
        Operation::PageAnalytics,
        Operation::PageWeeklyStats,
        Operation::PagePostsReactions,
        Operation::PagePosts,
        Operation::PageScheduledPosts,
        Operation::ShareTextPostToPage,
        Operation::SharePicturePostToPage,
        Operation::UpdateTextPostOfPage,
        Operation::DeletePagePost,
        Operation::PagePostComments,
        Operation::CommentOnPost,
        Operation::ReplyOnComment,
        Operation::DeleteComment,
    ];

    pub const fn route(self) -> Route {
        use HttpMethod::*;

        match self {
            Operation::ExchangeToken => route(
                Get,
                true,
                "oauth/access_token",
                "failed exchange short access token",
            ),
            Operation::UserInfo => route(Get, true, "me", "failed get user info"),
            Operation::AccountPages => route(Get, true, "me/accounts", "failed get pages infos"),
            Operation::PageDetails => route(Get, false, "{id}", "failed get page details"),
            Operation::PageReviews => {
                route(Get, false, "{id}/ratings", "failed get page reviews")
            }
            Operation::PageLikes => route(Get, true, "{id}", "failed get page likes count"),
            Operation::PageAnalytics => route(
                Get,
                true,
                "{id}/insights/page_impressions_unique",
                "failed get page's analytics",
            ),
            Operation::PageWeeklyStats => route(
                Get,
                true,
                "{id}/insights",
                "failed get page's weekly stats",
            ),
            Operation::PagePostsReactions => route(
                Get,
                true,
                "{id}/insights",
                "failed get page post's reactions",
            ),
            Operation::PagePosts => route(Get, true, "{id}/feed", "failed get page's posts"),
            Operation::PageScheduledPosts => route(
                Get,
                true,
                "{id}/scheduled_posts",
                "failed get page's scheduled posts",
            ),
            Operation::ShareTextPostToPage => {
                route(Post, true, "{id}/feed", "failed to share text post")
            }
            Operation::SharePicturePostToPage => {
                route(Post, true, "{id}/photos", "failed to share picture post")
            }
            Operation::UpdateTextPostOfPage => {
                route(Post, true, "{id}", "failed to update this text post")
            }
            Operation::DeletePagePost => route(Delete, true, "{id}", "failed delete page post"),
            Operation::PagePostComments => route(
                Get,
                true,
                "{id}/comments",
                "failed get comments of this post",
            ),
            Operation::CommentOnPost => {
                route(Post, true, "{id}/comments", "failed to comment on this post")
            }
            Operation::ReplyOnComment => route(
                Post,
                true,
                "{id}/comments",
                "failed to reply on this comment",
            ),
            Operation::DeleteComment => {
                route(Delete, true, "{id}", "failed delete this comment")
            }
        }
    }

    /// Snake-case name used in log events.
    pub fn name(self) -> &'static str {
        match self {
            Operation::ExchangeToken => "exchange_token",
            Operation::UserInfo => "user_info",
            Operation::AccountPages => "account_pages",
            Operation::PageDetails => "page_details",
            Operation::PageReviews => "page_reviews",
            Operation::PageLikes => "page_likes",
            Operation::PageAnalytics => "page_analytics",
            Operation::PageWeeklyStats => "page_weekly_stats",
            Operation::PagePostsReactions => "page_posts_reactions",
            Operation::PagePosts => "page_posts",
            Operation::PageScheduledPosts => "page_scheduled_posts",
            Operation::ShareTextPostToPage => "share_text_post_to_page",
            Operation::SharePicturePostToPage => "share_picture_post_to_page",
            Operation::UpdateTextPostOfPage => "update_text_post_of_page",
            Operation::DeletePagePost => "delete_page_post",
            Operation::PagePostComments => "page_post_comments",
            Operation::CommentOnPost => "comment_on_post",
            Operation::ReplyOnComment => "reply_on_comment",
            Operation::DeleteComment => "delete_comment",
        }
    }

    pub fn method(self) -> HttpMethod {
        self.route().method
    }

    /// Fixed error-message prefix.
    pub fn description(self) -> &'static str {
        self.route().description
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Route {
    /// Render the absolute path for this route.
    ///
    /// The id is inserted verbatim.
    pub fn render(&self, api_version: &str, id: &str) -> String {
        let resource = self.template.replace("{id}", id);
        if self.versioned {
            format!("/{}/{}", api_version, resource)
        } else {
            format!("/{}", resource)
        }
    }

    /// Whether the template expects an id.
    pub fn needs_id(&self) -> bool {
        self.template.contains("{id}")
    }
}

/// A fully described request, ready for the transport.
#[derive(Clone, PartialEq)]
pub struct OperationRequest {
    pub operation: Operation,
    pub method: HttpMethod,
    /// Origin the path is resolved against (always ends with `/`)
    pub origin: Url,
    /// Absolute path, e.g. `/v20.0/123/feed`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl OperationRequest {
    /// Resolve the full URL, query included.
    pub fn url(&self) -> Result<Url, ErrorCause> {
        let joined = format!("{}{}", self.origin, self.path.trim_start_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| ErrorCause::InvalidParameter(format!("invalid request url: {}", e)))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }

    /// Value of a query parameter, if set.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for OperationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query: Vec<(&str, &str)> = self
            .query
            .iter()
            .map(|(k, v)| {
                if REDACTED_PARAMS.contains(&k.as_str()) {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("OperationRequest")
            .field("operation", &self.operation)
            .field("method", &self.method)
            .field("origin", &self.origin.as_str())
            .field("path", &self.path)
            .field("query", &query)
            .field("body", &self.body)
            .finish()
    }
}

/// Builds an [`OperationRequest`] for one operation.
///
/// Validation failures are held until [`build`](Self::build), which reports
/// the first one as an [`UpstreamError`] for the operation.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    config: &'a ClientConfig,
    operation: Operation,
    id: Option<String>,
    query: Vec<(String, String)>,
    access_token: Option<String>,
    body: Option<serde_json::Value>,
    error: Option<ErrorCause>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ClientConfig, operation: Operation) -> Self {
        Self {
            config,
            operation,
            id: None,
            query: Vec::new(),
            access_token: None,
            body: None,
            error: None,
        }
    }

    fn fail(&mut self, cause: ErrorCause) {
        if self.error.is_none() {
            self.error = Some(cause);
        }
    }

    fn require(&mut self, name: &str, value: &str) -> bool {
        if value.is_empty() {
            self.fail(ErrorCause::InvalidParameter(format!("{} cannot be empty", name)));
            return false;
        }
        true
    }

    /// Path identifier substituted for `{id}`; must be non-empty.
    pub fn id(mut self, name: &str, value: &str) -> Self {
        if self.require(name, value) {
            self.id = Some(value.to_string());
        }
        self
    }

    /// Required query value; must be non-empty.
    pub fn required(mut self, key: &str, value: &str) -> Self {
        if self.require(key, value) {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Fixed query value, sent as given.
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Optional query value; `default` applies only when `value` is `None`.
    pub fn param_or(self, key: &str, value: Option<&str>, default: &str) -> Self {
        self.param(key, value.unwrap_or(default))
    }

    /// Caller token, sent as the `access_token` query parameter.
    pub fn access_token(mut self, token: &str) -> Self {
        if self.require(ACCESS_TOKEN_PARAM, token) {
            self.access_token = Some(token.to_string());
        }
        self
    }

    /// JSON request body.
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => self.fail(ErrorCause::Json(e)),
        }
        self
    }

    pub fn build(self) -> Result<OperationRequest, UpstreamError> {
        let operation = self.operation;
        if let Some(cause) = self.error {
            return Err(UpstreamError::new(operation, cause));
        }

        let route = operation.route();
        let id = match (route.needs_id(), self.id) {
            (true, Some(id)) => id,
            (true, None) => {
                return Err(UpstreamError::new(
                    operation,
                    ErrorCause::InvalidParameter(format!("{} requires a path id", operation)),
                ))
            }
            (false, _) => String::new(),
        };

        let mut query = self.query;
        if let Some(token) = self.access_token {
            query.push((ACCESS_TOKEN_PARAM.to_string(), token));
        }

        Ok(OperationRequest {
            operation,
            method: route.method,
            origin: self.config.base_origin().clone(),
            path: route.render(self.config.api_version(), &id),
            query,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("app-id", "app-secret").unwrap()
    }

    #[test]
    fn test_route_table_paths() {
        let cases = [
            (Operation::ExchangeToken, "/v20.0/oauth/access_token"),
            (Operation::UserInfo, "/v20.0/me"),
            (Operation::AccountPages, "/v20.0/me/accounts"),
            (Operation::PageDetails, "/42"),
            (Operation::PageReviews, "/42/ratings"),
            (Operation::PageLikes, "/v20.0/42"),
            (
                Operation::PageAnalytics,
                "/v20.0/42/insights/page_impressions_unique",
            ),
            (Operation::PageWeeklyStats, "/v20.0/42/insights"),
            (Operation::PagePostsReactions, "/v20.0/42/insights"),
            (Operation::PagePosts, "/v20.0/42/feed"),
            (Operation::PageScheduledPosts, "/v20.0/42/scheduled_posts"),
            (Operation::ShareTextPostToPage, "/v20.0/42/feed"),
            (Operation::SharePicturePostToPage, "/v20.0/42/photos"),
            (Operation::UpdateTextPostOfPage, "/v20.0/42"),
            (Operation::DeletePagePost, "/v20.0/42"),
            (Operation::PagePostComments, "/v20.0/42/comments"),
            (Operation::CommentOnPost, "/v20.0/42/comments"),
            (Operation::ReplyOnComment, "/v20.0/42/comments"),
            (Operation::DeleteComment, "/v20.0/42"),
        ];
        assert_eq!(cases.len(), Operation::ALL.len());
        for (op, expected) in cases {
            assert_eq!(op.route().render("v20.0", "42"), expected, "{}", op);
        }
    }

    #[test]
    fn test_route_methods() {
        let mutating: Vec<Operation> = Operation::ALL
            .into_iter()
            .filter(|op| op.method() != HttpMethod::Get)
            .collect();
        assert_eq!(
            mutating,
            vec![
                Operation::ShareTextPostToPage,
                Operation::SharePicturePostToPage,
                Operation::UpdateTextPostOfPage,
                Operation::DeletePagePost,
                Operation::CommentOnPost,
                Operation::ReplyOnComment,
                Operation::DeleteComment,
            ]
        );
        assert_eq!(Operation::DeleteComment.method(), HttpMethod::Delete);
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for op in Operation::ALL {
            assert!(seen.insert(op.description()), "duplicate prefix for {}", op);
        }
    }

    #[test]
    fn test_build_places_token_last() {
        let config = config();
        let request = RequestBuilder::new(&config, Operation::PagePostComments)
            .id("post_id", "1_2")
            .param_or("fields", None, "from,message")
            .access_token("page-token")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/v20.0/1_2/comments");
        assert_eq!(
            request.query,
            vec![
                ("fields".to_string(), "from,message".to_string()),
                ("access_token".to_string(), "page-token".to_string()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_explicit_empty_value_is_kept() {
        let config = config();
        let request = RequestBuilder::new(&config, Operation::UserInfo)
            .param_or("fields", Some(""), "name,picture")
            .access_token("token")
            .build()
            .unwrap();
        assert_eq!(request.query_param("fields"), Some(""));
    }

    #[test]
    fn test_empty_id_fails_with_operation_prefix() {
        let config = config();
        let err = RequestBuilder::new(&config, Operation::DeletePagePost)
            .id("post_id", "")
            .access_token("token")
            .build()
            .unwrap_err();
        assert_eq!(err.operation(), Operation::DeletePagePost);
        assert_eq!(
            err.message(),
            "failed delete page post. Error details: Invalid parameter: post_id cannot be empty"
        );
    }

    #[test]
    fn test_first_validation_error_wins() {
        let config = config();
        let err = RequestBuilder::new(&config, Operation::PageLikes)
            .id("page_id", "")
            .access_token("")
            .build()
            .unwrap_err();
        assert!(err.message().ends_with("page_id cannot be empty"));
    }

    #[test]
    fn test_blank_values_pass_through() {
        let config = config();
        let request = RequestBuilder::new(&config, Operation::PageLikes)
            .id("page_id", " ")
            .access_token(" ")
            .build()
            .unwrap();
        assert_eq!(request.path, "/v20.0/ ");
        assert_eq!(request.query_param("access_token"), Some(" "));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let config = config();
        let err = RequestBuilder::new(&config, Operation::PageLikes)
            .access_token("token")
            .build()
            .unwrap_err();
        assert!(matches!(err.cause(), ErrorCause::InvalidParameter(_)));
    }

    #[test]
    fn test_url_resolution() {
        let config = config()
            .with_base_origin("http://127.0.0.1:9000/graph")
            .unwrap();
        let request = RequestBuilder::new(&config, Operation::PageDetails)
            .id("page_id", "123")
            .param("fields", "about,bio")
            .access_token("tok en")
            .build()
            .unwrap();
        let url = request.url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9000/graph/123?fields=about%2Cbio&access_token=tok+en"
        );
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Message<'a> {
            message: &'a str,
        }

        let config = config();
        let request = RequestBuilder::new(&config, Operation::CommentOnPost)
            .id("post_id", "1_2")
            .access_token("token")
            .json_body(&Message { message: "hi" })
            .build()
            .unwrap();
        assert_eq!(request.body, Some(serde_json::json!({ "message": "hi" })));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = config();
        let request = RequestBuilder::new(&config, Operation::ExchangeToken)
            .param("client_secret", "app-secret")
            .required("fb_exchange_token", "short-lived")
            .build()
            .unwrap();
        let debug = format!("{:?}", request);
        assert!(!debug.contains("app-secret"));
        assert!(!debug.contains("short-lived"));
        assert!(debug.contains("<redacted>"));
    }
}
