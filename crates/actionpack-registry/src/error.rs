//! Error types for the pack registry

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Pack '{0}' is not registered")]
    PackNotFound(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
