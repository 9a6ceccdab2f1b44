//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /`                 - Home page (HTML)
//! - `GET /health`           - Health check
//! - `/api/v1/*`             - JSON API
//! - `GET /{prefix}/{code}`  - Short link redirect
//! - anything else           - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// The redirect route is mounted under the prefix held by `state`, so
/// `jet.fuel/5ZvQv` is served at `GET /jet.fuel/5ZvQv`.
pub fn router(state: AppState) -> Router {
    let redirect_path = format!("/{}/{{code}}", state.prefix());

    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .route(&redirect_path, get(redirect_handler))
        .nest("/api/v1", api::routes::v1_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
