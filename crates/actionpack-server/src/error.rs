//! Server error types and the dispatch-outcome to status-code mapping

use actionpack_runtime::DispatchError;
use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error enum
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: missing keys {}", missing.join(", "))]
    Unauthorized { missing: Vec<String> },

    #[error("Invalid argument: missing {}", missing.join(", "))]
    InvalidArgument { missing: Vec<String> },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Execution failed: {0}")]
    Execution(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DispatchError> for ServerError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::PackNotFound(_) | DispatchError::ActionNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            DispatchError::Unauthorized { missing } => Self::Unauthorized { missing },
            DispatchError::InvalidArgument { missing } => Self::InvalidArgument { missing },
            DispatchError::Execution(message) => Self::Execution(message),
        }
    }
}

/// Error response DTO
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
    pub metadata: super::dto::ResponseMeta,
}

#[derive(Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServerError {
    pub fn to_http_response(&self, request_id: String) -> (StatusCode, Json<ErrorResponse>) {
        let (status, code, details) = match self {
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", None),
            ServerError::Unauthorized { missing } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", Some(json!({ "missing": missing })))
            }
            ServerError::InvalidArgument { missing } => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                Some(json!({ "missing": missing })),
            ),
            ServerError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", None),
            ServerError::Execution(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EXECUTION_FAILED", None)
            }
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", None),
        };

        let response = ErrorResponse {
            success: false,
            error: ErrorDetails {
                code: code.to_string(),
                message: self.to_string(),
                details,
            },
            metadata: super::dto::ResponseMeta { request_id },
        };

        (status, Json(response))
    }
}
