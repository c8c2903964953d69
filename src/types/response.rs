use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::CODE_OK;

/// Uniform response envelope: `{ "msg", "code", "data"? }`.
///
/// The transport status is always `200 OK`; `code` carries the logical outcome.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize = ()> {
    pub msg: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::with_data(CODE_OK, message, data)
    }

    pub fn with_data(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            msg: message.into(),
            code,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn ok(message: impl Into<String>) -> Self {
        Self::message(CODE_OK, message)
    }

    pub fn message(code: u16, message: impl Into<String>) -> Self {
        Self {
            msg: message.into(),
            code,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Serializes as `{}`; used as `data` on failed queries.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct EmptyObject {}
