use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Tool {
    Function { function: ToolFunction },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFunction {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// See: <https://platform.openai.com/docs/guides/function-calling>
    pub parameters: Map<String, Value>,
}

/// A directive forcing the model to call one named function instead of
/// responding with free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ToolChoice {
    Function { function: ToolChoiceFunction },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolChoiceFunction {
    pub name: String,
}

/// A tool invocation as reported by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ToolCall {
    Function {
        id: Option<String>,
        function: FunctionCall,
    },
}

impl ToolCall {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function { function, .. } => &function.name,
        }
    }

    /// The JSON-encoded arguments string produced by the model.
    #[must_use]
    pub fn arguments(&self) -> &str {
        match self {
            Self::Function { function, .. } => &function.arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}
