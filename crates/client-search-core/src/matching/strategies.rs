//! Match strategies
//!
//! Every function here takes values that are already lower-cased. An empty
//! query, query token, or field value never matches.

use serde::Serialize;

/// Which rule accepted a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Whole value equals the query.
    Exact,
    /// Query occurs inside the value.
    Substring,
    /// A value token equals or starts with a query token.
    TokenPrefix,
    /// A name token equals the single query word.
    WholeWord,
    /// Every query word equals some name token.
    AllTokens,
    /// Email contains the query (name fallback only).
    EmailContains,
}

/// Split a name on whitespace and hyphens.
pub fn name_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|token| !token.is_empty())
}

#[inline]
pub fn exact_match(query: &str, value: &str) -> Option<MatchKind> {
    if !query.is_empty() && query == value {
        Some(MatchKind::Exact)
    } else {
        None
    }
}

#[inline]
pub fn substring_match(query: &str, value: &str) -> Option<MatchKind> {
    if !query.is_empty() && value.contains(query) {
        Some(MatchKind::Substring)
    } else {
        None
    }
}

/// Any whitespace token of `value` equals or starts with any query token.
pub fn token_prefix_match(tokens: &[String], value: &str) -> Option<MatchKind> {
    let hit = value.split_whitespace().any(|field_token| {
        tokens
            .iter()
            .filter(|token| !token.is_empty())
            .any(|token| field_token.starts_with(token.as_str()))
    });
    hit.then_some(MatchKind::TokenPrefix)
}

/// Some name token equals `word` exactly. No prefix or substring matching.
pub fn whole_word_match(word: &str, name: &str) -> Option<MatchKind> {
    if word.is_empty() {
        return None;
    }
    name_tokens(name)
        .any(|token| token == word)
        .then_some(MatchKind::WholeWord)
}

/// Every query token equals at least one name token (AND across tokens).
pub fn all_tokens_match(tokens: &[String], name: &str) -> Option<MatchKind> {
    if tokens.is_empty() || tokens.iter().any(|token| token.is_empty()) {
        return None;
    }
    let parts: Vec<&str> = name_tokens(name).collect();
    tokens
        .iter()
        .all(|token| parts.contains(&token.as_str()))
        .then_some(MatchKind::AllTokens)
}

/// Generic field rules: exact, then substring, then token prefix.
pub fn field_match(query: &str, tokens: &[String], value: &str) -> Option<MatchKind> {
    if value.is_empty() {
        return None;
    }
    exact_match(query, value)
        .or_else(|| substring_match(query, value))
        .or_else(|| token_prefix_match(tokens, value))
}

/// Name fallback: the generic rules on the name, or the email containing
/// the query.
pub fn name_or_email_match(
    query: &str,
    tokens: &[String],
    name: &str,
    email: &str,
) -> Option<MatchKind> {
    field_match(query, tokens, name).or_else(|| {
        if email.is_empty() {
            None
        } else {
            substring_match(query, email).map(|_| MatchKind::EmailContains)
        }
    })
}
