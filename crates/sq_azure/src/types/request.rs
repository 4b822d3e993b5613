use serde::Serialize;

use super::tool::{Tool, ToolChoice};

/// Chat completion request matching the Azure OpenAI API schema.
///
/// The model is addressed through the deployment in the request path, not the
/// request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChatCompletion {
    /// The list of messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<RequestMessage>,

    /// Tool calling field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,

    /// Which tool the model must call, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "role")]
pub enum RequestMessage {
    System(Message),
    User(Message),
    Assistant(Message),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Message {
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
