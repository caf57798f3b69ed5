//! REST API DTOs

use actionpack_core::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope wrapper
#[derive(Serialize)]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    pub data: T,
    pub metadata: ResponseMeta,
}

/// Response metadata
#[derive(Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
}

/// Describe query parameters
#[derive(Deserialize)]
pub struct DescribeQuery {
    #[serde(default)]
    pub format: Option<String>,
}

/// Execute request body
#[derive(Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub args: JsonObject,
}

/// Execute response payload
#[derive(Serialize)]
pub struct ExecuteResponse {
    pub result: Value,
}
