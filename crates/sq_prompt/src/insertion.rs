use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A typed value interleaved between the literal segments of a [`Prompt`].
///
/// A [`Document`] contributes its textual content when rendered, every other
/// variant contributes its default string representation.
///
/// [`Prompt`]: crate::Prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Insertion {
    Document(Document),
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Json(Value),
}

impl fmt::Display for Insertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(document) => f.write_str(&document.content),
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
            Self::Bool(value) => value.fmt(f),
            Self::Json(value) => value.fmt(f),
        }
    }
}

impl From<Document> for Insertion {
    fn from(document: Document) -> Self {
        Self::Document(document)
    }
}

impl From<&str> for Insertion {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Insertion {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Insertion {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Insertion {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Insertion {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Value> for Insertion {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// A text document with a known source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub source: String,
    pub content: String,
}

impl Document {
    #[must_use]
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }
}
