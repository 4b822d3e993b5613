use serde_json::json;
use sq_azure::types::tool::{Tool, ToolChoice};

use super::*;
use crate::schema::normalize;

fn normalized() -> NormalizedSchema {
    normalize(
        json!({
            "type": "object",
            "description": "The current weather",
            "properties": {"temperature": {"type": "integer"}},
        })
        .as_object()
        .unwrap()
        .clone(),
    )
}

#[test]
fn exactly_one_tool_named_get_results() {
    let schema = normalized();
    let tools = result_tool(&schema);

    assert_eq!(tools.len(), 1);

    let Tool::Function { function } = &tools[0];
    assert_eq!(function.name, RESULT_TOOL_NAME);
    assert_eq!(function.parameters, schema.schema);
}

#[test]
fn tool_choice_names_the_same_tool() {
    let tools = result_tool(&normalized());
    let Tool::Function { function } = &tools[0];

    let ToolChoice::Function { function: choice } = result_tool_choice();
    assert_eq!(choice.name, function.name);
}

#[test]
fn description_embeds_schema_description() {
    let tools = result_tool(&normalized());

    let Tool::Function { function } = &tools[0];
    let description = function.description.as_deref().unwrap();
    assert!(description.contains("The current weather"), "{description}");
}

#[test]
fn wire_serialization_matches_forced_tool_call_contract() {
    let tools = result_tool(&normalized());

    let tool = serde_json::to_value(&tools[0]).unwrap();
    assert_eq!(tool["type"], "function");
    assert_eq!(tool["function"]["name"], "getResults");
    assert_eq!(tool["function"]["parameters"]["type"], "object");

    let choice = serde_json::to_value(result_tool_choice()).unwrap();
    assert_eq!(choice["type"], "function");
    assert_eq!(choice["function"]["name"], "getResults");
}
