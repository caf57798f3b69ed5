//! Pack traits: the capability provider contract and its factory

use crate::{auth::AuthContext, error::CoreResult, types::PackManifest};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Named arguments for one invocation.
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A named bundle of actions sharing one auth context.
///
/// Packs declare their operations as an explicit manifest built at
/// construction time; there is no runtime signature inspection. The runner
/// enforces the secure gate and required-argument check against the
/// manifest before `call` is reached, so implementations may assume a known
/// action name and complete required arguments when invoked through it.
#[async_trait]
pub trait ActionPack: Send + Sync {
    /// Pack name as it appears in API paths, unique within a registry.
    fn name(&self) -> &str;

    /// The declared table of operations.
    fn manifest(&self) -> &PackManifest;

    /// The credential context supplied at construction.
    fn auth(&self) -> &AuthContext;

    /// Credential keys the pack's secure actions require. Empty by default.
    fn auth_keys(&self) -> &[String] {
        &[]
    }

    /// Invoke a named operation with named arguments.
    async fn call(&self, action: &str, args: &JsonObject) -> CoreResult<JsonValue>;
}

impl std::fmt::Debug for dyn ActionPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionPack").field("name", &self.name()).finish()
    }
}

/// Creates pack instances bound to a given auth context.
///
/// One factory per pack type is registered at startup; a fresh instance is
/// created per request so credential state is never shared.
pub trait PackFactory: Send + Sync {
    fn pack_name(&self) -> &str;

    fn create(&self, auth: AuthContext) -> Arc<dyn ActionPack>;
}
