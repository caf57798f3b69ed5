//! Schema synthesis: pack manifest -> OpenAPI description

use crate::document::{
    Info, MediaType, OpenApiDocument, Operation, Parameter, PathItem, ResponseObject, SchemaObject,
};
use actionpack_core::{ActionSpec, PackManifest, WireType};
use indexmap::IndexMap;

/// Fixed path prefix all synthesized operations live under.
pub const ACTIONS_PATH_PREFIX: &str = "/v1/actions";

const OPENAPI_VERSION: &str = "3.0.3";

/// Build the API description for one pack.
///
/// One path entry per public action at
/// `{prefix}/{PackName}/{operationId}`. Every operation dispatches via
/// POST: an action invocation is an execution regardless of its name, and
/// inferring GET/DELETE from a name prefix would hand mutations a "safe"
/// verb. A spec that cannot be rendered is skipped rather than failing the
/// whole document.
pub fn synthesize(pack_name: &str, manifest: &PackManifest) -> OpenApiDocument {
    let mut paths = IndexMap::new();
    for spec in manifest.public_actions() {
        let Some(operation) = operation_for(spec) else {
            continue;
        };
        let path = format!("{}/{}/{}", ACTIONS_PATH_PREFIX, pack_name, spec.name);
        paths.insert(path, PathItem { post: operation });
    }

    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: format!("{} API", pack_name),
            version: "1.0.0".to_string(),
            description: format!("API for {}", pack_name),
        },
        paths,
    }
}

fn operation_for(spec: &ActionSpec) -> Option<Operation> {
    if spec.name.is_empty() {
        return None;
    }

    let parameters = spec
        .params
        .iter()
        .map(|param| Parameter {
            name: param.name.clone(),
            location: "query".to_string(),
            description: param.description.clone(),
            required: param.required,
            schema: SchemaObject { ty: param.ty },
        })
        .collect();

    let mut responses = IndexMap::new();
    responses.insert(
        "200".to_string(),
        ResponseObject {
            description: "Success".to_string(),
            content: Some(IndexMap::from([(
                "application/json".to_string(),
                // Placeholder shape; return values are not validated against it
                MediaType { schema: SchemaObject { ty: WireType::Object } },
            )])),
        },
    );

    Some(Operation {
        tags: vec!["POST".to_string()],
        summary: spec.summary().to_string(),
        description: spec.long_description().to_string(),
        operation_id: spec.name.clone(),
        parameters,
        responses,
    })
}
