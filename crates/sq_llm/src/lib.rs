//! Schema-enforced structured output from chat LLMs.
//!
//! A chat completions API only returns free-form text or tool call arguments.
//! This crate bridges that gap for callers that want a strongly-typed result:
//! it derives a JSON schema for the requested type, forces the model to
//! invoke a single synthetic "report result" tool carrying that schema, and
//! converts the tool's arguments back into the requested type, distinguishing
//! model output problems from transport failures.

mod error;
pub mod provider;
pub mod query;
pub mod schema;
pub mod structured;
pub mod tool;

pub use error::Error;
pub use provider::Provider;
