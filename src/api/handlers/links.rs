//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::api::dto::click_count::{ClickCountRequest, ClickCountResponse};
use crate::api::dto::link::{CreateLinkRequest, LinkItem};
use crate::api::extract::JsonPayload;
use crate::error::AppError;
use crate::state::AppState;

fn to_items(links: Vec<crate::domain::entities::Link>) -> Vec<LinkItem> {
    links.into_iter().map(LinkItem::from).collect()
}

/// Lists all links.
///
/// # Endpoint
///
/// `GET /api/v1/links`
pub async fn link_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.link_service.list_links().await?;
    Ok(Json(to_items(links)))
}

/// Lists the links of one topic.
///
/// # Endpoint
///
/// `GET /api/v1/topics/{topic_id}/links`
///
/// An unknown topic returns an empty array. A non-numeric id returns 422.
pub async fn topic_links_handler(
    topic_id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let Path(topic_id) = topic_id?;
    let links = state.link_service.list_links_by_topic(topic_id).await?;
    Ok(Json(to_items(links)))
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/v1/links`
///
/// # Request Body
///
/// ```json
/// {
///   "link_title": "StackOverflow",
///   "long_link": "http://www.stackoverflow.com",
///   "short_link": "jet.fuel/5tU8",
///   "click_count": 0,
///   "topic_id": 1
/// }
/// ```
///
/// `click_count` is optional and defaults to `0`.
///
/// # Errors
///
/// Returns 422 if a required field is missing or the topic does not exist.
/// Returns 409 if `short_link` is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkItem>), AppError> {
    let link = state.link_service.create_link(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Records a click reported by a client.
///
/// # Endpoint
///
/// `PUT /api/v1/links/clickCountIncr`
///
/// # Request Body
///
/// ```json
/// { "shortLinkText": "jet.fuel/5ZvQv", "clickCount": 9 }
/// ```
///
/// The stored counter becomes `max(stored, clickCount) + 1`.
///
/// # Response
///
/// ```json
/// { "response": "click_count successfully incremented", "click_count": 10 }
/// ```
///
/// # Errors
///
/// Returns 422 if `shortLinkText` is missing or `clickCount` is negative or
/// above `MAX_CLICK_COUNT`.
/// Returns 404 if no link matches `shortLinkText`.
pub async fn click_count_handler(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<ClickCountRequest>,
) -> Result<(StatusCode, Json<ClickCountResponse>), AppError> {
    let click_count = state.resolver_service.increment_click_count(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(ClickCountResponse::new(click_count))))
}
