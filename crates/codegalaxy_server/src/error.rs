//! HTTP error mapping.
//!
//! # Invariants
//! - Client mistakes (bad id, bad body, bad query, validation) are 400.
//! - Missing or foreign records are 404.
//! - Storage failures are 500 and logged; their detail is not echoed.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use codegalaxy_core::RepoError;
use log::error;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        code: &'static str,
        message: String,
    },
    NotFound(String),
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest { code, message } => ErrorBody {
                error: code,
                message,
            },
            Self::NotFound(message) => ErrorBody {
                error: "NOT_FOUND",
                message,
            },
            Self::Internal(detail) => {
                error!("event=http_error module=server status=error detail={detail}");
                ErrorBody {
                    error: "INTERNAL",
                    message: "internal server error".to_string(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::bad_request("VALIDATION", err.to_string()),
            RepoError::NotFound(id) => Self::NotFound(format!("record not found: {id}")),
            other @ (RepoError::Db(_) | RepoError::InvalidData(_)) => {
                Self::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::bad_request("INVALID_BODY", value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::bad_request("INVALID_ID", value.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::bad_request("INVALID_QUERY", value.body_text())
    }
}
