//! HTTP client and wire types for the Azure OpenAI chat completions API.

mod client;
mod error;
pub mod types;

pub use client::{Client, DEFAULT_API_VERSION};
pub use error::Error;
