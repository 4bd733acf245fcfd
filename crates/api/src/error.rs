//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Every error body is JSON of the form
//! `{"detail": "..."}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::MailError;

/// Detail returned when an insert fails.
pub const INSERT_FAILED: &str = "Failed to add data";

/// Detail returned when mail delivery fails after the document was stored.
pub const MAIL_FAILED: &str = "Failed to send email";

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is missing, malformed, or does not match the schema.
    #[error("Invalid request body: {0}")]
    Validation(#[from] JsonRejection),

    /// Inserting a submission failed.
    #[error("Insert failed: {0}")]
    Insert(RepositoryError),

    /// Reading from the store failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Composing or delivering mail failed.
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if !matches!(self, Self::Validation(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Validation(rejection) => rejection.status(),
            Self::Insert(_) | Self::Database(_) | Self::Mail(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose internal error details to clients
        let detail = match &self {
            Self::Validation(rejection) => rejection.body_text(),
            Self::Insert(_) => INSERT_FAILED.to_string(),
            Self::Database(_) => "Internal server error".to_string(),
            Self::Mail(_) => MAIL_FAILED.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
