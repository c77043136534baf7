//! Stateless operation facade.
//!
//! One async function per remote capability. Each takes the shared
//! [`Transport`] and the tenant's [`ClientConfig`] explicitly, so a server
//! can serve many applications over one connection pool.
//! [`PageApiClient`](crate::api::PageApiClient) wraps these with the
//! config captured once.
//!
//! List operations return the payload under the response's `data`
//! envelope; object operations return the response as-is.

use serde::de::DeserializeOwned;

use crate::api::config::ClientConfig;
use crate::api::error::{ApiResult, ErrorCause, UpstreamError};
use crate::api::request::{Operation, OperationRequest, RequestBuilder};
use crate::api::transport::Transport;
use crate::api::types::comment::CommentPayload;
use crate::api::types::page::FanCount;
use crate::api::types::*;

/// Default `fields` of `user_info`.
pub const DEFAULT_USER_FIELDS: &str = "name,picture";

/// Default `fields` of `account_pages`.
pub const DEFAULT_ACCOUNT_PAGE_FIELDS: &str =
    "picture, category_list,category, tasks, name, access_token";

/// Default `fields` of `page_details`.
pub const DEFAULT_PAGE_DETAILS_FIELDS: &str =
    "about,attire,bio,location,parking,hours,emails,website";

/// Default metrics of `page_weekly_stats`.
pub const DEFAULT_WEEKLY_STATS_METRICS: &str =
    "page_post_engagements,page_impressions,page_daily_follows_unique";

/// Default metrics of `page_posts_reactions`.
pub const DEFAULT_POST_REACTIONS_METRICS: &str = "page_actions_post_reactions_like_total, page_actions_post_reactions_love_total, page_actions_post_reactions_wow_total";

/// Default `fields` of `page_posts`.
pub const DEFAULT_POST_FIELDS: &str = "full_picture,message,permalink_url,created_time,likes.summary(true),comments.summary(true),shares";

/// Default `fields` of `page_scheduled_posts`.
pub const DEFAULT_SCHEDULED_POST_FIELDS: &str = "full_picture,message,permalink_url,created_time, likes.summary(true),comments.summary(true),shares";

/// Default `fields` of `page_post_comments`.
pub const DEFAULT_COMMENT_FIELDS: &str = "from,message";

async fn send_list<T: DeserializeOwned>(
    transport: &Transport,
    request: &OperationRequest,
) -> ApiResult<Vec<T>> {
    transport
        .send::<Envelope<Vec<T>>>(request)
        .await
        .map(Envelope::into_data)
}

fn insights_request(
    config: &ClientConfig,
    operation: Operation,
    page_id: &str,
    page_token: &str,
    params: &InsightsParams,
    defaults: (DatePreset, InsightsPeriod, &str),
) -> ApiResult<OperationRequest> {
    let (date_preset, period, metric) = defaults;
    RequestBuilder::new(config, operation)
        .id("page_id", page_id)
        .param("date_preset", params.date_preset.unwrap_or(date_preset).as_str())
        .param("period", params.period.unwrap_or(period).as_str())
        .param_or("metric", params.metric.as_deref(), metric)
        .access_token(page_token)
        .build()
}

// =============================================================================
// Personal account
// =============================================================================

/// Exchange a short-lived user token for a long-lived one.
///
/// Uses the app credentials from `config`; no `access_token` is sent.
pub async fn exchange_token(
    transport: &Transport,
    config: &ClientConfig,
    short_lived_token: &str,
) -> ApiResult<AccessTokenResponse> {
    let request = RequestBuilder::new(config, Operation::ExchangeToken)
        .param("grant_type", "fb_exchange_token")
        .required("client_id", config.app_id())
        .required("client_secret", config.app_secret())
        .required("fb_exchange_token", short_lived_token)
        .build()?;
    transport.send(&request).await
}

/// Profile of the token's user. `fields` defaults to [`DEFAULT_USER_FIELDS`].
pub async fn user_info(
    transport: &Transport,
    config: &ClientConfig,
    access_token: &str,
    fields: Option<&str>,
) -> ApiResult<UserInfo> {
    let request = RequestBuilder::new(config, Operation::UserInfo)
        .param_or("fields", fields, DEFAULT_USER_FIELDS)
        .access_token(access_token)
        .build()?;
    transport.send(&request).await
}

/// Pages the user manages, each with its page token.
pub async fn account_pages(
    transport: &Transport,
    config: &ClientConfig,
    access_token: &str,
    fields: Option<&str>,
) -> ApiResult<Vec<AccountPage>> {
    let request = RequestBuilder::new(config, Operation::AccountPages)
        .param_or("fields", fields, DEFAULT_ACCOUNT_PAGE_FIELDS)
        .access_token(access_token)
        .build()?;
    send_list(transport, &request).await
}

// =============================================================================
// Page
// =============================================================================

/// Business profile of a page. Addressed without the version prefix.
pub async fn page_details(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    access_token: &str,
    fields: Option<&str>,
) -> ApiResult<PageDetails> {
    let request = RequestBuilder::new(config, Operation::PageDetails)
        .id("page_id", page_id)
        .param_or("fields", fields, DEFAULT_PAGE_DETAILS_FIELDS)
        .access_token(access_token)
        .build()?;
    transport.send(&request).await
}

/// Ratings of a page. Addressed without the version prefix.
pub async fn page_reviews(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    access_token: &str,
) -> ApiResult<Vec<PageReview>> {
    let request = RequestBuilder::new(config, Operation::PageReviews)
        .id("page_id", page_id)
        .access_token(access_token)
        .build()?;
    send_list(transport, &request).await
}

/// The page's `fan_count`.
pub async fn page_likes(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
) -> ApiResult<u64> {
    let operation = Operation::PageLikes;
    let request = RequestBuilder::new(config, operation)
        .id("page_id", page_id)
        .param("fields", "fan_count")
        .access_token(page_token)
        .build()?;
    let page: FanCount = transport.send(&request).await?;
    page.fan_count
        .ok_or_else(|| UpstreamError::new(operation, ErrorCause::MissingField("fan_count")))
}

/// Unique impressions series. Defaults: `this_year`, `month`.
pub async fn page_analytics(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
    date_preset: Option<DatePreset>,
    period: Option<InsightsPeriod>,
) -> ApiResult<Vec<InsightMetric>> {
    let request = RequestBuilder::new(config, Operation::PageAnalytics)
        .id("page_id", page_id)
        .param("date_preset", date_preset.unwrap_or(DatePreset::ThisYear).as_str())
        .param("period", period.unwrap_or(InsightsPeriod::Month).as_str())
        .access_token(page_token)
        .build()?;
    send_list(transport, &request).await
}

/// Engagement, impressions and follows of last week.
/// Defaults: `last_week_mon_sun`, `day`, [`DEFAULT_WEEKLY_STATS_METRICS`].
pub async fn page_weekly_stats(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
    params: &InsightsParams,
) -> ApiResult<Vec<InsightMetric>> {
    let request = insights_request(
        config,
        Operation::PageWeeklyStats,
        page_id,
        page_token,
        params,
        (
            DatePreset::LastWeekMonSun,
            InsightsPeriod::Day,
            DEFAULT_WEEKLY_STATS_METRICS,
        ),
    )?;
    send_list(transport, &request).await
}

/// Reaction totals on the page's posts.
/// Defaults: `this_year`, `week`, [`DEFAULT_POST_REACTIONS_METRICS`].
pub async fn page_posts_reactions(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
    params: &InsightsParams,
) -> ApiResult<Vec<InsightMetric>> {
    let request = insights_request(
        config,
        Operation::PagePostsReactions,
        page_id,
        page_token,
        params,
        (
            DatePreset::ThisYear,
            InsightsPeriod::Week,
            DEFAULT_POST_REACTIONS_METRICS,
        ),
    )?;
    send_list(transport, &request).await
}

// =============================================================================
// Posts
// =============================================================================

pub async fn page_posts(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
    fields: Option<&str>,
) -> ApiResult<Vec<PagePost>> {
    let request = RequestBuilder::new(config, Operation::PagePosts)
        .id("page_id", page_id)
        .param_or("fields", fields, DEFAULT_POST_FIELDS)
        .access_token(page_token)
        .build()?;
    send_list(transport, &request).await
}

pub async fn page_scheduled_posts(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
    fields: Option<&str>,
) -> ApiResult<Vec<PagePost>> {
    let request = RequestBuilder::new(config, Operation::PageScheduledPosts)
        .id("page_id", page_id)
        .param_or("fields", fields, DEFAULT_SCHEDULED_POST_FIELDS)
        .access_token(page_token)
        .build()?;
    send_list(transport, &request).await
}

/// Publish (or schedule) a text post on the page feed.
pub async fn share_text_post_to_page(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
    payload: &TextPostPayload,
) -> ApiResult<CreatedObject> {
    let request = RequestBuilder::new(config, Operation::ShareTextPostToPage)
        .id("page_id", page_id)
        .access_token(page_token)
        .json_body(payload)
        .build()?;
    transport.send(&request).await
}

/// Publish a photo from a public URL.
pub async fn share_picture_post_to_page(
    transport: &Transport,
    config: &ClientConfig,
    page_id: &str,
    page_token: &str,
    payload: &PicturePostPayload,
) -> ApiResult<CreatedPhoto> {
    let request = RequestBuilder::new(config, Operation::SharePicturePostToPage)
        .id("page_id", page_id)
        .access_token(page_token)
        .json_body(payload)
        .build()?;
    transport.send(&request).await
}

pub async fn update_text_post_of_page(
    transport: &Transport,
    config: &ClientConfig,
    post_id: &str,
    page_token: &str,
    payload: &UpdatePostPayload,
) -> ApiResult<SuccessResponse> {
    let request = RequestBuilder::new(config, Operation::UpdateTextPostOfPage)
        .id("post_id", post_id)
        .access_token(page_token)
        .json_body(payload)
        .build()?;
    transport.send(&request).await
}

pub async fn delete_page_post(
    transport: &Transport,
    config: &ClientConfig,
    post_id: &str,
    page_token: &str,
) -> ApiResult<SuccessResponse> {
    let request = RequestBuilder::new(config, Operation::DeletePagePost)
        .id("post_id", post_id)
        .access_token(page_token)
        .build()?;
    transport.send(&request).await
}

// =============================================================================
// Comments
// =============================================================================

pub async fn page_post_comments(
    transport: &Transport,
    config: &ClientConfig,
    post_id: &str,
    page_token: &str,
    fields: Option<&str>,
) -> ApiResult<Vec<Comment>> {
    let request = RequestBuilder::new(config, Operation::PagePostComments)
        .id("post_id", post_id)
        .param_or("fields", fields, DEFAULT_COMMENT_FIELDS)
        .access_token(page_token)
        .build()?;
    send_list(transport, &request).await
}

pub async fn comment_on_post(
    transport: &Transport,
    config: &ClientConfig,
    post_id: &str,
    page_token: &str,
    comment: &str,
) -> ApiResult<CreatedObject> {
    let request = RequestBuilder::new(config, Operation::CommentOnPost)
        .id("post_id", post_id)
        .access_token(page_token)
        .json_body(&CommentPayload { message: comment })
        .build()?;
    transport.send(&request).await
}

pub async fn reply_on_comment(
    transport: &Transport,
    config: &ClientConfig,
    comment_id: &str,
    page_token: &str,
    reply: &str,
) -> ApiResult<CreatedObject> {
    let request = RequestBuilder::new(config, Operation::ReplyOnComment)
        .id("comment_id", comment_id)
        .access_token(page_token)
        .json_body(&CommentPayload { message: reply })
        .build()?;
    transport.send(&request).await
}

pub async fn delete_comment(
    transport: &Transport,
    config: &ClientConfig,
    comment_id: &str,
    page_token: &str,
) -> ApiResult<SuccessResponse> {
    let request = RequestBuilder::new(config, Operation::DeleteComment)
        .id("comment_id", comment_id)
        .access_token(page_token)
        .build()?;
    transport.send(&request).await
}
