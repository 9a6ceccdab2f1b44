//! API route configuration, nested under `/api/v1`.

use crate::api::handlers::{
    click_count_handler, create_link_handler, create_topic_handler, link_list_handler,
    topic_links_handler, topic_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Version 1 of the JSON API.
///
/// # Endpoints
///
/// - `GET  /topics`                  - List topics
/// - `POST /topics`                  - Create a topic
/// - `GET  /topics/{topic_id}/links` - List the links of a topic
/// - `GET  /links`                   - List links
/// - `POST /links`                   - Create a link
/// - `PUT  /links/clickCountIncr`    - Record a client-reported click
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/topics",
            get(topic_list_handler).post(create_topic_handler),
        )
        .route("/topics/{topic_id}/links", get(topic_links_handler))
        .route("/links", get(link_list_handler).post(create_link_handler))
        .route("/links/clickCountIncr", put(click_count_handler))
}
