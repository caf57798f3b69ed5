//! OpenAPI 3.0 document types for the synthesized API description
//!
//! Only the subset the synthesizer emits is modeled; the structs serialize
//! to a document valid against the OpenAPI schema so generic tooling can
//! consume it.

use actionpack_core::WireType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Complete API description for one pack, rebuilt fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    pub paths: IndexMap<String, PathItem>,
}

impl OpenApiDocument {
    /// Operation ids present in the document, in path order.
    pub fn operation_ids(&self) -> Vec<&str> {
        self.paths.values().map(|item| item.post.operation_id.as_str()).collect()
    }
}

/// Info block naming the pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Every synthesized operation dispatches via POST, so a path item carries
/// exactly that one verb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    pub post: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: String,
    pub description: String,
    pub operation_id: String,
    pub parameters: Vec<Parameter>,
    pub responses: IndexMap<String, ResponseObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub description: String,
    pub required: bool,
    pub schema: SchemaObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaObject {
    #[serde(rename = "type")]
    pub ty: WireType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: SchemaObject,
}
