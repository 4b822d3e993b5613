use sq_azure::types::request::{ChatCompletion, Message, RequestMessage};
use sq_prompt::Prompt;

use crate::{schema::NormalizedSchema, tool};

/// A structured query for LLMs.
#[derive(Debug, Clone)]
pub struct StructuredQuery {
    /// The prompt to render into the single user message.
    prompt: Prompt,

    /// The (already normalized) schema to enforce the shape of the response.
    schema: NormalizedSchema,
}

impl StructuredQuery {
    /// Create a new structured query.
    #[must_use]
    pub fn new(schema: NormalizedSchema, prompt: Prompt) -> Self {
        Self { prompt, schema }
    }

    pub(crate) fn wrapped(&self) -> bool {
        self.schema.wrapped
    }

    /// The wire request for one chat completion: exactly one user message
    /// with the rendered prompt, the single result tool, and the forced tool
    /// choice naming it.
    #[must_use]
    pub fn request(&self) -> ChatCompletion {
        ChatCompletion {
            messages: vec![RequestMessage::User(Message::new(self.prompt.render()))],
            tools: tool::result_tool(&self.schema),
            tool_choice: Some(tool::result_tool_choice()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
