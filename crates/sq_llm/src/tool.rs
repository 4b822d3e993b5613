//! The forced "report result" tool offered to the model.

use serde_json::Value;
use sq_azure::types::tool::{Tool, ToolChoice, ToolChoiceFunction, ToolFunction};

use crate::schema::NormalizedSchema;

/// Name of the schema enforcement tool.
pub(crate) const RESULT_TOOL_NAME: &str = "getResults";

/// The single tool offered to the model, carrying the normalized schema as
/// its parameters.
#[must_use]
pub fn result_tool(schema: &NormalizedSchema) -> Vec<Tool> {
    vec![Tool::Function {
        function: ToolFunction {
            name: RESULT_TOOL_NAME.to_owned(),
            description: Some(description(schema)),
            parameters: schema.schema.clone(),
        },
    }]
}

/// The directive forcing the model to call [`result_tool`] instead of
/// responding with free text.
#[must_use]
pub fn result_tool_choice() -> ToolChoice {
    ToolChoice::Function {
        function: ToolChoiceFunction {
            name: RESULT_TOOL_NAME.to_owned(),
        },
    }
}

fn description(schema: &NormalizedSchema) -> String {
    let mut description = "Report the requested results".to_owned();
    if let Some(desc) = schema.schema.get("description").and_then(Value::as_str) {
        description.push_str(&format!(" using the following description:\n\n{desc}"));
    }

    description
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
