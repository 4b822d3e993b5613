use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{error, trace};

use crate::{
    error::{Error, Result},
    types::{request, response},
};

/// Header carrying the API key, as expected by Azure deployments.
const API_KEY_HEADER: &str = "api-key";

pub const DEFAULT_API_VERSION: &str = "2024-06-01";

#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    api_version: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client for one Azure OpenAI resource.
    ///
    /// `base_url` is the resource endpoint, e.g.
    /// `https://my-resource.openai.azure.com`.
    #[must_use]
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            api_version: DEFAULT_API_VERSION.to_owned(),
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build HTTP headers required for making API calls.
    /// Returns an error if any header value cannot be constructed.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers.insert(
            API_KEY_HEADER,
            self.api_key
                .parse()
                .map_err(|e| Error::Config(format!("Invalid API key header format: {e}")))?,
        );

        Ok(headers)
    }

    /// Perform a single, non-streaming chat completion against a named
    /// deployment.
    ///
    /// Retries and timeouts are left to the caller.
    pub async fn chat_completion(
        &self,
        deployment: &str,
        request: &request::ChatCompletion,
    ) -> Result<response::ChatCompletion> {
        let url = format!(
            "{}/openai/deployments/{deployment}/chat/completions",
            self.base_url
        );
        let headers = self.build_headers()?;

        trace!(
            %url,
            deployment,
            api_version = %self.api_version,
            headers = ?[(CONTENT_TYPE.as_str(), "application/json"), (API_KEY_HEADER, "[REDACTED]")],
            "Triggering request."
        );

        let response = self
            .http_client
            .post(&url)
            .query(&[("api-version", self.api_version.as_str())])
            .headers(headers)
            .json(request)
            .send()
            .await?;

        trace!(
            status = response.status().as_u16(),
            content_length = response.content_length().unwrap_or_default(),
            "Received response."
        );

        let status = response.status();
        let body = response.text().await?;

        if status.is_client_error() || status.is_server_error() {
            let status = status.as_u16();
            error!(status, body, "Unexpected response.");

            return Err(parse_error(status, body));
        }

        serde_json::from_str(&body).map_err(Into::into)
    }
}

/// Extract the provider's error message from the response body, falling back
/// to the raw body if the envelope doesn't match.
fn parse_error(code: u16, body: String) -> Error {
    match serde_json::from_str::<response::ErrorEnvelope>(&body) {
        Ok(envelope) => Error::Api {
            code,
            message: envelope.error.message,
        },
        Err(_) => Error::Api {
            code,
            message: body,
        },
    }
}
