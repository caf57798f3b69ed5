//! Error taxonomy for guarded dispatch
//!
//! Every invocation resolves to a value or one of these kinds; nothing at
//! this layer escapes as an unhandled fault. The transport maps kinds to
//! status codes.

use actionpack_registry::RegistryError;
use thiserror::Error;

pub type DispatchResult<T> = Result<T, DispatchError>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Pack '{0}' not found")]
    PackNotFound(String),

    #[error("Action '{0}' not found")]
    ActionNotFound(String),

    #[error("Missing authentication keys for secure action: {}", missing.join(", "))]
    Unauthorized { missing: Vec<String> },

    #[error("Missing required arguments: {}", missing.join(", "))]
    InvalidArgument { missing: Vec<String> },

    #[error("Action execution failed: {0}")]
    Execution(String),
}

impl From<RegistryError> for DispatchError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::PackNotFound(name) => Self::PackNotFound(name),
        }
    }
}
