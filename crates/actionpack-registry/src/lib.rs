pub mod error;
pub mod registry;

// Re-export commonly used types
pub use error::{RegistryError, RegistryResult};
pub use registry::PackRegistry;

/// A simple function type alias to allow pack crates to expose a registrar function
pub type PackRegistrar = fn(&mut PackRegistry);
