//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::Topic;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with the current topics and the API overview.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub prefix: String,
    pub topics: Vec<Topic>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let mut topics = state.topic_service.list_topics().await?;
    topics.sort_by_key(|topic| topic.id);

    Ok(IndexTemplate {
        prefix: state.prefix().to_string(),
        topics,
    })
}
