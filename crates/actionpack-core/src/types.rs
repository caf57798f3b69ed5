//! Manifest data model: wire types, parameter specs, action specs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The fixed set of wire types the schema synthesizer may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireType {
    Integer,
    Number,
    Boolean,
    String,
    Array,
    Object,
}

impl WireType {
    /// Map a declared type name into the wire-type set. Unmapped names
    /// fall back to `string`.
    pub fn from_declared(declared: &str) -> Self {
        match declared {
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" | "int" | "integer" => Self::Integer,
            "f32" | "f64" | "float" | "number" => Self::Number,
            "bool" | "boolean" => Self::Boolean,
            "str" | "string" => Self::String,
            "array" | "list" | "vec" => Self::Array,
            "object" | "map" | "dict" => Self::Object,
            _ => Self::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// One named parameter of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub ty: WireType,
    pub required: bool,
    pub description: String,
}

impl ParamSpec {
    /// A parameter with no default value.
    pub fn required(
        name: impl Into<String>,
        declared: &str,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: WireType::from_declared(declared),
            required: true,
            description: description.into(),
        }
    }

    /// A parameter with a default value in the operation's contract.
    pub fn optional(
        name: impl Into<String>,
        declared: &str,
        description: impl Into<String>,
    ) -> Self {
        Self { required: false, ..Self::required(name, declared, description) }
    }
}

/// One invocable operation: name, documentation, secure flag and parameters.
///
/// `doc` is free text; the first line is the summary, the remainder the long
/// description. The response shape is a placeholder object and is never
/// validated against actual return values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    pub doc: String,
    pub secure: bool,
    pub params: Vec<ParamSpec>,
}

impl ActionSpec {
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self { name: name.into(), doc: doc.into(), secure: false, params: Vec::new() }
    }

    /// Mark the action as requiring a populated auth context.
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// First line of the documentation, or empty.
    pub fn summary(&self) -> &str {
        self.doc.lines().next().unwrap_or("").trim()
    }

    /// Everything after the first line, or empty.
    pub fn long_description(&self) -> &str {
        match self.doc.split_once('\n') {
            Some((_, rest)) => rest.trim(),
            None => "",
        }
    }

    /// Names starting with `_` are private and excluded from enumeration.
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// Ordered table of the actions a pack exposes, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackManifest {
    actions: IndexMap<String, ActionSpec>,
}

impl PackManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action spec. A duplicate name replaces the earlier entry.
    pub fn with(mut self, spec: ActionSpec) -> Self {
        self.actions.insert(spec.name.clone(), spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ActionSpec> {
        self.actions.get(name)
    }

    /// All actions in declaration order, private entries excluded.
    pub fn public_actions(&self) -> impl Iterator<Item = &ActionSpec> {
        self.actions.values().filter(|spec| !spec.is_private())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
