//! REST API router

use crate::{middleware::RequestIdLayer, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create REST API router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(super::handlers::health::health_check))
        .route("/api/v1/packs", get(super::handlers::packs::list_packs))
        .route("/api/v1/packs/:pack/actions", get(super::handlers::packs::describe_pack))
        .route(
            "/api/v1/packs/:pack/actions/:action/execute",
            post(super::handlers::packs::execute_action),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(RequestIdLayer),
        )
        .with_state(app_state)
}
