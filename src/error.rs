//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Handlers let it bubble up and axum turns it
//! into a JSON response through the [`IntoResponse`] impl below:
//!
//! ```json
//! { "error": "Short link not found", "code": "not_found" }
//! ```
//!
//! | Variant      | Status | Code               |
//! |--------------|--------|--------------------|
//! | `Validation` | 422    | `validation_error` |
//! | `NotFound`   | 404    | `not_found`        |
//! | `Conflict`   | 409    | `conflict`         |
//! | `Internal`   | 500    | `internal_error`   |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned whenever a create request lacks a required field.
///
/// Existing clients match on this exact text, so it is shared by topics, links
/// and the click counter endpoint.
pub const MISSING_FIELD_MESSAGE: &str =
    "Expected format: { name: <String>}. You are missing the name property.";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Validation error carrying [`MISSING_FIELD_MESSAGE`].
    pub fn missing_field() -> Self {
        Self::validation(MISSING_FIELD_MESSAGE)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            code: self.code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::not_found("Record not found");
        }

        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return match db.constraint() {
                    Some("links_short_link_key") => {
                        AppError::conflict("A link with this short_link already exists.")
                    }
                    _ => AppError::conflict("Unique constraint violation"),
                };
            }

            if db.is_foreign_key_violation() {
                return AppError::validation("Referenced topic does not exist.");
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        tracing::debug!(?errors, "Rejected payload");
        AppError::missing_field()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Unreadable JSON body");
        AppError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Unparsable path parameter");
        AppError::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::missing_field().status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_body() {
        let body = AppError::missing_field().to_error_body();

        assert_eq!(body.error, MISSING_FIELD_MESSAGE);
        assert_eq!(body.code, "validation_error");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_other_sqlx_errors_map_to_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Database error");
    }
}
