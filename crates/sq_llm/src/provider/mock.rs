//! Mock provider for testing structured output without real API calls.
//!
//! Returns a predetermined reply from [`chat_completion`], allowing tests to
//! simulate the provider behaviors the pipeline has to classify: a forced
//! tool call, a free-text answer, an empty choice list, or a provider-side
//! failure.
//!
//! [`chat_completion`]: Provider::chat_completion

use async_trait::async_trait;
use serde_json::Value;
use sq_azure::types::{
    request,
    response::{ChatCompletion, Choice, FinishReason, ResponseMessage},
    tool::{FunctionCall, ToolCall},
};
use time::OffsetDateTime;

use super::Provider;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct MockProvider {
    reply: Reply,
}

#[derive(Debug, Clone)]
enum Reply {
    Response(ChatCompletion),
    Error(String),
}

impl MockProvider {
    /// Create a mock provider returning the given response verbatim.
    #[must_use]
    pub fn new(response: ChatCompletion) -> Self {
        Self {
            reply: Reply::Response(response),
        }
    }

    /// A response whose first choice invokes `name` with `arguments`.
    #[must_use]
    pub fn with_tool_call(name: impl Into<String>, arguments: &Value) -> Self {
        Self::with_raw_arguments(name, arguments.to_string())
    }

    /// Same as [`with_tool_call`], but with a raw (possibly malformed)
    /// arguments string.
    ///
    /// [`with_tool_call`]: MockProvider::with_tool_call
    #[must_use]
    pub fn with_raw_arguments(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self::new(response(
            ResponseMessage {
                role: "assistant".to_owned(),
                content: None,
                tool_calls: vec![ToolCall::Function {
                    id: Some("call-0".to_owned()),
                    function: FunctionCall {
                        name: name.into(),
                        arguments: arguments.into(),
                    },
                }],
            },
            FinishReason::ToolCalls,
        ))
    }

    /// A free-text reply without any tool call.
    #[must_use]
    pub fn with_message(content: impl Into<String>) -> Self {
        Self::new(response(
            ResponseMessage {
                role: "assistant".to_owned(),
                content: Some(content.into()),
                tool_calls: vec![],
            },
            FinishReason::Stop,
        ))
    }

    /// A reply without any completion choices.
    #[must_use]
    pub fn with_empty_choices() -> Self {
        let mut response = response(
            ResponseMessage {
                role: "assistant".to_owned(),
                content: None,
                tool_calls: vec![],
            },
            FinishReason::Stop,
        );
        response.choices.clear();

        Self::new(response)
    }

    /// A provider-side failure.
    #[must_use]
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Error(message.into()),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn chat_completion(
        &self,
        _deployment: &str,
        _request: &request::ChatCompletion,
    ) -> Result<ChatCompletion> {
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Error(message) => Err(sq_azure::Error::Api {
                code: 500,
                message: message.clone(),
            }
            .into()),
        }
    }
}

fn response(message: ResponseMessage, finish_reason: FinishReason) -> ChatCompletion {
    ChatCompletion {
        id: "chatcmpl-mock".to_owned(),
        created: OffsetDateTime::UNIX_EPOCH,
        model: "mock-model".to_owned(),
        choices: vec![Choice {
            index: 0,
            finish_reason: Some(finish_reason),
            message,
        }],
        usage: None,
    }
}
