//! Request-scoped credential context

use std::collections::HashMap;

/// Credential key/value mapping owned by exactly one pack instance.
///
/// Built once from request metadata and immutable afterwards; a fresh pack
/// instance (and therefore a fresh context) is constructed per invocation,
/// so contexts are never shared across requests. Key lookup is
/// case-insensitive because keys typically arrive as HTTP header names,
/// which transports lowercase, while packs declare them in documented
/// spelling (e.g. `X-Key-OpenWeatherMap-API`).
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    entries: HashMap<String, String>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into().to_ascii_lowercase(), v.into()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_ascii_lowercase())
    }

    /// Declared keys absent from this context, in declaration order and
    /// declared spelling.
    pub fn missing_keys(&self, declared: &[String]) -> Vec<String> {
        declared.iter().filter(|key| !self.contains(key)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
