use crate::insertion::Insertion;

/// An ordered sequence of literal string segments with typed insertion values
/// interleaved between them.
///
/// The number of literals is always one more than the number of insertions,
/// maintained by construction: [`Prompt::new`] seeds the first literal, and
/// every [`insert`] pushes an (initially empty) trailing literal that
/// [`literal`] extends.
///
/// [`insert`]: Prompt::insert
/// [`literal`]: Prompt::literal
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    literals: Vec<String>,
    insertions: Vec<Insertion>,
}

impl Prompt {
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literals: vec![literal.into()],
            insertions: vec![],
        }
    }

    /// Append an insertion value after the current trailing literal.
    #[must_use]
    pub fn insert(mut self, insertion: impl Into<Insertion>) -> Self {
        self.insertions.push(insertion.into());
        self.literals.push(String::new());
        self
    }

    /// Extend the trailing literal segment.
    #[must_use]
    pub fn literal(mut self, literal: impl AsRef<str>) -> Self {
        if let Some(last) = self.literals.last_mut() {
            last.push_str(literal.as_ref());
        }

        self
    }

    /// Concatenate literal, stringified insertion, literal, ... into a single
    /// string, trimmed of leading and trailing whitespace.
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered = self.literals[0].clone();
        for (insertion, literal) in self.insertions.iter().zip(&self.literals[1..]) {
            rendered.push_str(&insertion.to_string());
            rendered.push_str(literal);
        }

        rendered.trim().to_owned()
    }
}

impl From<&str> for Prompt {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl From<String> for Prompt {
    fn from(literal: String) -> Self {
        Self::new(literal)
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
