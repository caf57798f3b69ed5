//! Dispatcher facade consumed by the transport layer

use crate::{error::DispatchResult, runner::ActionRunner};
use actionpack_core::{AuthContext, JsonObject};
use actionpack_registry::PackRegistry;
use actionpack_schema::OpenApiDocument;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Entry point for the two inbound operations: describe and invoke.
///
/// Every call instantiates a fresh pack from the registry, so an auth
/// context built from one request's credentials is never visible to
/// another request.
pub struct Dispatcher {
    registry: Arc<PackRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<PackRegistry>) -> Self {
        Self { registry }
    }

    /// Names of all packs available for dispatch.
    pub fn pack_names(&self) -> Vec<String> {
        self.registry.pack_names()
    }

    /// The API description for one pack. Descriptions derive from the
    /// manifest alone, so the pack is instantiated without credentials.
    pub fn describe(&self, pack_name: &str) -> DispatchResult<OpenApiDocument> {
        let pack = self.registry.instantiate(pack_name, AuthContext::new())?;
        Ok(ActionRunner::new(pack).get_actions())
    }

    /// Invoke one action with request-derived credentials and arguments.
    pub async fn invoke(
        &self,
        pack_name: &str,
        action: &str,
        credentials: AuthContext,
        args: &JsonObject,
    ) -> DispatchResult<JsonValue> {
        let pack = self.registry.instantiate(pack_name, credentials)?;
        ActionRunner::new(pack).run_action(action, args).await
    }
}
