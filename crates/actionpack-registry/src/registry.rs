//! Registry of pack factories, populated at startup via registrar functions

use crate::error::{RegistryError, RegistryResult};
use actionpack_core::{ActionPack, AuthContext, PackFactory};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps pack names to their factories.
///
/// Discovery is explicit: each pack crate exposes a registrar function that
/// the process calls at startup. Instantiation always produces a fresh pack
/// bound to the supplied auth context, so credential state never outlives a
/// request.
#[derive(Default)]
pub struct PackRegistry {
    factories: HashMap<String, Arc<dyn PackFactory>>,
}

impl PackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. Registrations are deduplicated by pack name;
    /// a later registration replaces the earlier one.
    pub fn register(&mut self, factory: Arc<dyn PackFactory>) {
        let name = factory.pack_name().to_string();
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::warn!(pack = %name, "replacing previously registered pack factory");
        } else {
            tracing::debug!(pack = %name, "registered pack factory");
        }
    }

    /// Names of all registered packs, sorted for stable listings.
    pub fn pack_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Create a fresh pack instance bound to the given auth context.
    pub fn instantiate(
        &self,
        name: &str,
        auth: AuthContext,
    ) -> RegistryResult<Arc<dyn ActionPack>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::PackNotFound(name.to_string()))?;
        Ok(factory.create(auth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionpack_core::{CoreResult, JsonObject, PackManifest};
    use async_trait::async_trait;
    use serde_json::{json, Value as JsonValue};

    struct StubPack {
        name: &'static str,
        manifest: PackManifest,
        auth: AuthContext,
    }

    #[async_trait]
    impl ActionPack for StubPack {
        fn name(&self) -> &str {
            self.name
        }

        fn manifest(&self) -> &PackManifest {
            &self.manifest
        }

        fn auth(&self) -> &AuthContext {
            &self.auth
        }

        async fn call(&self, _action: &str, _args: &JsonObject) -> CoreResult<JsonValue> {
            Ok(json!({"ok": true}))
        }
    }

    struct StubFactory {
        name: &'static str,
    }

    impl PackFactory for StubFactory {
        fn pack_name(&self) -> &str {
            self.name
        }

        fn create(&self, auth: AuthContext) -> Arc<dyn ActionPack> {
            Arc::new(StubPack { name: self.name, manifest: PackManifest::new(), auth })
        }
    }

    #[test]
    fn names_are_sorted_and_deduplicated() {
        let mut registry = PackRegistry::new();
        registry.register(Arc::new(StubFactory { name: "Weather" }));
        registry.register(Arc::new(StubFactory { name: "TextUtils" }));
        registry.register(Arc::new(StubFactory { name: "Weather" }));

        assert_eq!(registry.pack_names(), vec!["TextUtils", "Weather"]);
        assert!(registry.contains("Weather"));
        assert!(!registry.contains("weather"));
    }

    #[test]
    fn instantiate_binds_the_supplied_auth_context() {
        let mut registry = PackRegistry::new();
        registry.register(Arc::new(StubFactory { name: "Weather" }));

        let auth = AuthContext::from_pairs([("X-Key-A", "v")]);
        let pack = registry.instantiate("Weather", auth).unwrap();
        assert_eq!(pack.auth().get("x-key-a"), Some("v"));
    }

    #[test]
    fn unknown_pack_is_a_not_found_error() {
        let registry = PackRegistry::new();
        let err = registry.instantiate("Nope", AuthContext::new()).unwrap_err();
        assert!(matches!(err, RegistryError::PackNotFound(name) if name == "Nope"));
    }
}
