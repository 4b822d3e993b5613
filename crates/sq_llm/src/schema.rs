//! JSON schema derivation and normalization for structured output queries.

use schemars::{schema_for, JsonSchema};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Top-level keys that stay at the root when a schema is wrapped.
const METADATA_KEYS: &[&str] = &[
    "$schema",
    "$id",
    "$anchor",
    "$comment",
    "title",
    "description",
];

/// Name of the synthesized property holding a non-object payload.
pub(crate) const RESULT_KEY: &str = "result";

/// A schema guaranteed to describe a JSON object, usable as the parameters of
/// a tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSchema {
    pub schema: Map<String, Value>,

    /// Whether the original schema content was nested under a `result`
    /// property because its top-level `type` was not `"object"`. Carried
    /// through the pipeline so reconciliation knows to unwrap the payload.
    pub wrapped: bool,
}

/// Derive the JSON schema describing `T`.
///
/// Fails if the derived schema's root is not a key/value mapping (schemars
/// produces boolean schemas for some trivial types), since only a mapping can
/// be turned into tool parameters.
pub fn for_type<T: JsonSchema>() -> Result<Map<String, Value>> {
    match serde_json::to_value(schema_for!(T))? {
        Value::Object(schema) => Ok(schema),
        value => Err(Error::Schema(format!(
            "schema for `{}` is not a JSON object: {value}",
            std::any::type_name::<T>()
        ))),
    }
}

/// Guarantee an object-shaped schema.
///
/// Tool call arguments are always a JSON object, so an object-shaped schema
/// passes through untouched. A schema describing a scalar, array or union
/// payload has its content moved under a single `result` property instead,
/// keeping only recognized metadata keys at the top level.
#[must_use]
pub fn normalize(schema: Map<String, Value>) -> NormalizedSchema {
    if schema.get("type").and_then(Value::as_str) == Some("object") {
        return NormalizedSchema {
            schema,
            wrapped: false,
        };
    }

    let mut outer = Map::new();
    let mut inner = Map::new();
    for (key, value) in schema {
        if METADATA_KEYS.contains(&key.as_str()) {
            outer.insert(key, value);
        } else {
            inner.insert(key, value);
        }
    }

    outer.insert("type".to_owned(), Value::String("object".to_owned()));
    outer.insert(
        "properties".to_owned(),
        Value::Object(Map::from_iter([(
            RESULT_KEY.to_owned(),
            Value::Object(inner),
        )])),
    );

    NormalizedSchema {
        schema: outer,
        wrapped: true,
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
