//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Client errors become JSON
//! bodies of the form `{"detail": ...}`; server errors are captured to Sentry
//! before responding with a generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use toko_core::{EntityKind, StoreError};

/// One reason a request was rejected before reaching a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Where the problem is, e.g. `["body"]` or `["path", "id"]`.
    pub loc: Vec<String>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable category.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ValidationIssue {
    fn body(msg: String, kind: &'static str) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg,
            kind,
        }
    }

    pub(crate) fn path(msg: String, kind: &'static str) -> Self {
        Self {
            loc: vec!["path".to_string(), "id".to_string()],
            msg,
            kind,
        }
    }
}

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// No record of this kind has the requested ID.
    #[error("{0} tidak ditemukan")]
    NotFound(EntityKind),

    /// The request body or path did not match the expected shape.
    #[error(
        "Validation failed: {}",
        .0.iter().map(|issue| issue.msg.as_str()).collect::<Vec<_>>().join("; ")
    )]
    Validation(Vec<ValidationIssue>),

    /// A store refused the operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            JsonRejection::BytesRejection(_) => "body_unreadable",
            _ => "invalid",
        };
        Self::Validation(vec![ValidationIssue::body(rejection.body_text(), kind)])
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let kind = match &rejection {
            PathRejection::FailedToDeserializePathParams(_) => "int_parsing",
            PathRejection::MissingPathParams(_) => "missing",
            _ => "invalid",
        };
        Self::Validation(vec![ValidationIssue::path(rejection.body_text(), kind)])
    }
}

impl AppError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::NotFound(_) => json!({ "detail": self.to_string() }),
            Self::Validation(issues) => {
                tracing::debug!(error = %self, "Rejected request");
                json!({ "detail": issues })
            }
            // Don't expose internal error details to clients
            Self::Store(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                json!({ "detail": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
