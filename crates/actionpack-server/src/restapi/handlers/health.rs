//! Health check handlers

use crate::{
    dto::{ResponseEnvelope, ResponseMeta},
    middleware::RequestId,
    AppState,
};
use axum::{
    extract::{Extension, State},
    response::Json,
};
use serde_json::json;

/// GET /api/v1/health
pub async fn health_check(
    State(_app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ResponseEnvelope<serde_json::Value>> {
    Json(ResponseEnvelope {
        success: true,
        data: json!({
            "status": "healthy",
            "service": "actionpack-server",
            "version": env!("CARGO_PKG_VERSION")
        }),
        metadata: ResponseMeta { request_id: request_id.0 },
    })
}
