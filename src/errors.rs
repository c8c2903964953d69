//! Centralized error handling.
//!
//! Every failure is rendered through the same `{msg, code, data?}` envelope
//! used for successful responses, with the logical status carried in `code`.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::{CODE_ERROR, CODE_FAILED};
use crate::types::{ApiResponse, EmptyObject};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    /// The request was refused; rendered without a `data` field.
    #[error("{0}")]
    Rejected(String),

    /// Nothing to return; rendered with an empty `data` object.
    #[error("{0}")]
    Empty(String),

    #[error("Record not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get the logical status code placed in the envelope
    pub fn code(&self) -> u16 {
        match self {
            AppError::Rejected(_)
            | AppError::Empty(_)
            | AppError::NotFound
            | AppError::Validation(_) => CODE_FAILED,
            AppError::Database(_) | AppError::Internal(_) => CODE_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "internal error".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Replace a not-found outcome with an operation-specific rejection.
    ///
    /// Store and internal errors pass through untouched.
    pub fn not_found_as(self, message: &str) -> Self {
        match self {
            AppError::NotFound => AppError::Rejected(message.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = self.user_message();

        match self {
            AppError::Empty(_) => ApiResponse::with_data(code, message, EmptyObject {}).into_response(),
            _ => ApiResponse::message(code, message).into_response(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        AppError::Rejected(msg.into())
    }

    pub fn empty(msg: impl Into<String>) -> Self {
        AppError::Empty(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::Value;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_rejected_has_no_data() {
        let (status, body) = body_json(AppError::rejected("user not found")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 400);
        assert_eq!(body["msg"], "user not found");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_empty_has_empty_object() {
        let (_, body) = body_json(AppError::empty("no data found")).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["data"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_database_error_is_hidden() {
        let err = AppError::from(sea_orm::DbErr::Custom("connection refused".into()));
        let (_, body) = body_json(err).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["msg"], "database error");
    }

    #[test]
    fn test_not_found_as_keeps_store_errors() {
        let err = AppError::NotFound.not_found_as("gone");
        assert!(matches!(err, AppError::Rejected(ref m) if m == "gone"));

        let err = AppError::internal("boom").not_found_as("gone");
        assert!(matches!(err, AppError::Internal(_)));
    }
}
