//! Fallback for unmatched routes.

use crate::error::AppError;

/// Answers every unmatched route with a JSON 404.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Route not found")
}
