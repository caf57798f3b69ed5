//! Pack API handlers: listing, description and execution

use crate::{
    dto::{DescribeQuery, ExecuteRequest, ExecuteResponse, ResponseEnvelope, ResponseMeta},
    error::{ErrorResponse, ServerError},
    middleware::RequestId,
    AppState,
};
use actionpack_core::AuthContext;
use axum::{
    extract::{Extension, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Header prefix under which callers supply credential keys.
const CREDENTIAL_HEADER_PREFIX: &str = "x-key-";

/// GET /api/v1/packs
pub async fn list_packs(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ResponseEnvelope<serde_json::Value>> {
    Json(ResponseEnvelope {
        success: true,
        data: json!({ "packs": app_state.dispatcher.pack_names() }),
        metadata: ResponseMeta { request_id: request_id.0 },
    })
}

/// GET /api/v1/packs/:pack/actions
///
/// Returns the bare API description document (no envelope) so the output
/// stays valid for generic OpenAPI tooling; `?format=yaml` selects a YAML
/// rendering.
pub async fn describe_pack(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(pack): Path<String>,
    Query(query): Query<DescribeQuery>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let document = app_state
        .dispatcher
        .describe(&pack)
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(request_id.0.clone()))?;

    match query.format.as_deref() {
        Some("yaml") => {
            let yaml = serde_yaml::to_string(&document)
                .map_err(|e| ServerError::Internal(e.to_string()))
                .map_err(|e| e.to_http_response(request_id.0.clone()))?;
            Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response())
        }
        _ => Ok(Json(document).into_response()),
    }
}

/// POST /api/v1/packs/:pack/actions/:action/execute
pub async fn execute_action(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((pack, action)): Path<(String, String)>,
    headers: HeaderMap,
    Json(request): Json<ExecuteRequest>,
) -> Result<Json<ResponseEnvelope<ExecuteResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let credentials = credentials_from_headers(&headers);

    let result = app_state
        .dispatcher
        .invoke(&pack, &action, credentials, &request.args)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(request_id.0.clone()))?;

    Ok(Json(ResponseEnvelope {
        success: true,
        data: ExecuteResponse { result },
        metadata: ResponseMeta { request_id: request_id.0 },
    }))
}

/// Build the request-scoped auth context from `x-key-*` headers. The full
/// header name is the credential key; header names arrive lowercased and
/// the context matches case-insensitively.
fn credentials_from_headers(headers: &HeaderMap) -> AuthContext {
    AuthContext::from_pairs(headers.iter().filter_map(|(name, value)| {
        let name = name.as_str();
        if !name.starts_with(CREDENTIAL_HEADER_PREFIX) {
            return None;
        }
        value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
    }))
}
