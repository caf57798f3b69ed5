pub mod args;
pub mod auth;
pub mod error;
pub mod pack;
pub mod types;

// Re-export commonly used types
pub use auth::AuthContext;
pub use error::{CoreError, CoreResult};
pub use pack::{ActionPack, JsonObject, PackFactory};
pub use types::{ActionSpec, PackManifest, ParamSpec, WireType};
