pub mod document;
pub mod synthesize;

// Re-export commonly used types
pub use document::{
    Info, MediaType, OpenApiDocument, Operation, Parameter, PathItem, ResponseObject, SchemaObject,
};
pub use synthesize::{synthesize, ACTIONS_PATH_PREFIX};
