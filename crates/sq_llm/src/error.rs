pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The provider call itself failed (network, auth, provider-side error).
    #[error("LLM call failed: {0}")]
    Llm(#[from] sq_azure::Error),

    /// The response carried no completion choices.
    #[error("No completion choices")]
    NoChoices,

    /// The first choice carried no usable tool call.
    #[error("No relevant response from the LLM")]
    NoToolCall,

    /// The requested type's schema cannot be used as tool parameters.
    #[error("invalid result schema: {0}")]
    Schema(String),

    /// The model's arguments parsed as JSON but do not fit the requested
    /// type. A caller-level retry or prompt revision can fix this.
    #[error(
        "The response from the LLM does not match the requested type. Retrying and/or validating \
         the prompt could fix the response."
    )]
    Conversion(#[source] serde_json::Error),

    /// JSON handling failed for a reason other than a type mismatch.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Conversion succeeded but the value still fails the schema assertion
    /// for the requested type.
    #[error("expected response of type `{expected}`, found a JSON {found}")]
    Narrowing {
        expected: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        if std::mem::discriminant(self) != std::mem::discriminant(other) {
            return false;
        }

        // Good enough for testing purposes
        format!("{self:?}") == format!("{other:?}")
    }
}
