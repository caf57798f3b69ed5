//! Application state shared by the REST handlers

use actionpack_registry::PackRegistry;
use actionpack_runtime::Dispatcher;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create app state with all bundled packs registered.
    pub fn new() -> Self {
        let mut registry = PackRegistry::new();
        for registrar in actionpack_packs::registrars() {
            registrar(&mut registry);
        }
        Self::with_registry(registry)
    }

    /// Create app state over an explicit registry (tests register their own
    /// packs this way).
    pub fn with_registry(registry: PackRegistry) -> Self {
        Self { dispatcher: Arc::new(Dispatcher::new(Arc::new(registry))) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
