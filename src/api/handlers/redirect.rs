//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination and counts the click.
///
/// # Endpoint
///
/// `GET /{prefix}/{code}` (e.g. `GET /jet.fuel/2H1PG`)
///
/// The lookup and the counter increment are one atomic store operation, so
/// concurrent redirects of the same code never lose a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_link = state.resolver_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_link)]))
}
