//! Handlers for topic endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::topic::{CreateTopicRequest, TopicItem};
use crate::api::extract::JsonPayload;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all topics.
///
/// # Endpoint
///
/// `GET /api/v1/topics`
///
/// Order is not guaranteed; clients sort by `id` when it matters.
pub async fn topic_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopicItem>>, AppError> {
    let topics = state.topic_service.list_topics().await?;

    Ok(Json(topics.into_iter().map(TopicItem::from).collect()))
}

/// Creates a topic.
///
/// # Endpoint
///
/// `POST /api/v1/topics`
///
/// # Request Body
///
/// ```json
/// { "name": "News" }
/// ```
///
/// # Errors
///
/// Returns 422 if `name` is missing or empty, including when the request
/// carries no JSON body.
pub async fn create_topic_handler(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateTopicRequest>,
) -> Result<(StatusCode, Json<TopicItem>), AppError> {
    let topic = state.topic_service.create_topic(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(topic.into())))
}
