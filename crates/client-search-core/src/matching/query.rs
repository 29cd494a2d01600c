//! Search query normalization

use crate::fields::Field;

/// Shape of a normalized query, used to pick the name-search tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryShape {
    /// No tokens after trimming.
    Empty,
    /// Exactly one word, hyphens included.
    SingleWord,
    /// Two or more whitespace-separated words.
    MultiWord,
}

/// A query string plus its target field, normalized once per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    tokens: Vec<String>,
    field: Field,
}

impl SearchQuery {
    /// Trim and lower-case `query`, split it into search parts, and
    /// canonicalize `field`.
    pub fn new(query: &str, field: &str) -> Self {
        let text = query.trim().to_lowercase();
        let tokens = text.split_whitespace().map(str::to_string).collect();
        Self {
            text,
            tokens,
            field: Field::parse(field),
        }
    }

    /// Query against the full name.
    pub fn name(query: &str) -> Self {
        Self::new(query, crate::fields::DEFAULT_FIELD)
    }

    /// The trimmed, lower-cased query.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace-separated search parts, never empty strings.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn shape(&self) -> QueryShape {
        match self.tokens.as_slice() {
            [] => QueryShape::Empty,
            [_] => QueryShape::SingleWord,
            _ => QueryShape::MultiWord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_once() {
        let q = SearchQuery::new("  John   DOE ", "name");
        assert_eq!(q.text(), "john   doe");
        assert_eq!(q.tokens(), ["john", "doe"]);
        assert_eq!(q.field(), &Field::FullName);
    }

    #[test]
    fn shapes() {
        assert_eq!(SearchQuery::name("").shape(), QueryShape::Empty);
        assert_eq!(SearchQuery::name(" \t ").shape(), QueryShape::Empty);
        assert_eq!(SearchQuery::name("Ann").shape(), QueryShape::SingleWord);
        assert_eq!(SearchQuery::name("john-paul").shape(), QueryShape::SingleWord);
        assert_eq!(SearchQuery::name("John Doe").shape(), QueryShape::MultiWord);
    }

    #[test]
    fn empty_query_has_no_tokens() {
        let q = SearchQuery::new("", "email");
        assert!(q.is_empty());
        assert!(q.tokens().is_empty());
    }
}
