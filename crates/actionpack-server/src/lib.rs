//! Actionpack server
//!
//! REST transport over the dispatcher: pack listing, API descriptions and
//! guarded action execution.

pub mod app_state;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod restapi;

// Re-export key types
pub use app_state::AppState;
pub use error::{ServerError, ServerResult};

/// Serve the REST API on the given address.
pub async fn serve(app_state: AppState, addr: &str) -> ServerResult<()> {
    restapi::serve(app_state, addr).await
}
