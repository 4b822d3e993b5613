//! Prompt templates built from literal segments and typed insertions.

mod insertion;
mod prompt;

pub use insertion::{Document, Insertion};
pub use prompt::Prompt;
