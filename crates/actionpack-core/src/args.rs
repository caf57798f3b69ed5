//! Typed accessors over named invocation arguments

use crate::{
    error::{CoreError, CoreResult},
    pack::JsonObject,
};

/// Fetch a required string argument.
pub fn str_arg<'a>(args: &'a JsonObject, name: &str) -> CoreResult<&'a str> {
    args.get(name)
        .ok_or_else(|| CoreError::InvalidArgument(format!("'{}' is required", name)))?
        .as_str()
        .ok_or_else(|| CoreError::InvalidArgument(format!("'{}' must be a string", name)))
}

/// Fetch an optional unsigned integer argument, falling back to a default.
pub fn u64_arg_or(args: &JsonObject, name: &str, default: u64) -> CoreResult<u64> {
    match args.get(name) {
        None => Ok(default),
        Some(value) => value
            .as_u64()
            .ok_or_else(|| CoreError::InvalidArgument(format!("'{}' must be an integer", name))),
    }
}
