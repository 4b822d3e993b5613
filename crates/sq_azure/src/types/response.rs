use serde::Deserialize;
use time::OffsetDateTime;

use super::tool::ToolCall;

/// A chat completion response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatCompletion {
    /// The ID of the response.
    pub id: String,

    /// The time the response was created.
    #[serde(with = "time::serde::timestamp")]
    pub created: OffsetDateTime,

    /// The model used to generate the response.
    pub model: String,

    /// A list of "choices" made by the model in response to the prompt.
    ///
    /// More than one choice can be requested, but only the first is relevant
    /// for forced tool calls.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Usage statistics for the completion request.
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: usize,

    /// `None` while the model is still generating, in streaming mode.
    pub finish_reason: Option<FinishReason>,

    pub message: ResponseMessage,
}

/// The reason why the assistant stopped generating tokens.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The assistant has finished requesting a tool call execution.
    ToolCalls,

    /// The assistant has stopped generating tokens.
    Stop,

    /// The assistant has reached the maximum length of accepted tokens.
    Length,

    /// The assistant has filtered out the content due to a flag from content
    /// filters.
    ContentFilter,

    /// Undefined/unknown finish reason.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The provider's error envelope, returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub code: Option<String>,
    pub message: String,
}
