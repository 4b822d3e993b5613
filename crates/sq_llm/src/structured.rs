//! Tools for requesting structured data from LLMs using tool calls.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{error::Category, Map, Value};
use sq_azure::types::response::ChatCompletion;
use sq_prompt::Prompt;
use tracing::debug;

use crate::{
    error::{Error, Result},
    provider::Provider,
    query::StructuredQuery,
    schema::{self, RESULT_KEY},
};

/// Request structured data from the LLM for any type `T` that implements
/// [`JsonSchema`] and [`DeserializeOwned`].
///
/// The schema derived for `T` is normalized to an object shape, attached as
/// the parameters of a single forced tool call, and the tool's arguments are
/// converted back into `T`. One network round trip per invocation, nothing is
/// cached or retried.
pub async fn completion<T>(provider: &dyn Provider, deployment: &str, prompt: Prompt) -> Result<T>
where
    T: JsonSchema + DeserializeOwned,
{
    let target = schema::for_type::<T>()?;
    let query = StructuredQuery::new(schema::normalize(target.clone()), prompt);

    let response = provider.chat_completion(deployment, &query.request()).await?;
    let arguments = extract(&response)?;

    reconcile(arguments, &target, query.wrapped())
}

/// Locate the single expected tool invocation and parse its raw JSON
/// arguments.
///
/// Only the first choice and its first tool call are consulted; the request
/// forces exactly one tool, so anything beyond that is ignored.
pub fn extract(response: &ChatCompletion) -> Result<Map<String, Value>> {
    let choice = response.choices.first().ok_or(Error::NoChoices)?;
    let call = choice.message.tool_calls.first().ok_or(Error::NoToolCall)?;

    debug!(tool = call.name(), "Extracted tool call from response.");

    match serde_json::from_str(call.arguments()) {
        Ok(Value::Object(arguments)) => Ok(arguments),
        Ok(_) | Err(_) => Err(Error::NoToolCall),
    }
}

/// Convert raw tool call arguments into `T`, undoing the `result` nesting for
/// wrapped schemas, then assert the value against the schema derived for `T`.
pub fn reconcile<T>(
    mut arguments: Map<String, Value>,
    target: &Map<String, Value>,
    wrapped: bool,
) -> Result<T>
where
    T: JsonSchema + DeserializeOwned,
{
    let value = if wrapped {
        arguments.remove(RESULT_KEY).unwrap_or(Value::Null)
    } else {
        Value::Object(arguments)
    };

    let typed = serde_json::from_value(value.clone()).map_err(classify)?;
    ensure_type::<T>(&value, target)?;

    Ok(typed)
}

/// A `Data` error means the model produced valid JSON of the wrong shape,
/// which a caller-level retry or prompt revision can fix. Every other
/// category passes through unchanged.
fn classify(error: serde_json::Error) -> Error {
    match error.classify() {
        Category::Data => Error::Conversion(error),
        Category::Io | Category::Syntax | Category::Eof => Error::Json(error),
    }
}

/// Final assertion that the converted value satisfies the schema derived for
/// `T`.
///
/// A failure here means the conversion accepted a value the schema rejects,
/// i.e. an inconsistency between the two, and is reported with the expected
/// type and the runtime shape of the response.
fn ensure_type<T: JsonSchema>(value: &Value, target: &Map<String, Value>) -> Result<()> {
    let schema = Value::Object(target.clone());
    let validator =
        jsonschema::validator_for(&schema).map_err(|error| Error::Schema(error.to_string()))?;

    if validator.is_valid(value) {
        return Ok(());
    }

    Err(Error::Narrowing {
        expected: std::any::type_name::<T>(),
        found: json_type(value),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "structured_tests.rs"]
mod tests;
