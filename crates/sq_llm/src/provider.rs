pub mod mock;

use async_trait::async_trait;
use sq_azure::types::{request, response};

use crate::error::Result;

/// Transport boundary for a single chat completion round trip.
///
/// One operation: send a request to a named deployment, suspend until the
/// provider answers or fails. Timeouts and cancellation belong to the
/// implementation, not to this trait.
#[async_trait]
pub trait Provider: std::fmt::Debug + Send + Sync {
    async fn chat_completion(
        &self,
        deployment: &str,
        request: &request::ChatCompletion,
    ) -> Result<response::ChatCompletion>;
}

#[async_trait]
impl Provider for sq_azure::Client {
    async fn chat_completion(
        &self,
        deployment: &str,
        request: &request::ChatCompletion,
    ) -> Result<response::ChatCompletion> {
        sq_azure::Client::chat_completion(self, deployment, request)
            .await
            .map_err(Into::into)
    }
}
