//! Record Matching Engine
//!
//! Decides which raw records match a free-text query on a chosen field.
//!
//! # Generic fields
//!
//! A record matches when its resolved value (lower-cased) is:
//!
//! 1. Equal to the query
//! 2. A superstring of the query
//! 3. Tokenized on whitespace with some token equal to, or starting with,
//!    some query token
//!
//! # Full name (tiers, first applicable wins)
//!
//! 1. Multi-word query: exact full-name match; if none, every query word
//!    must equal a name token (names split on whitespace and hyphens)
//! 2. Single word, hyphenated or not: whole-token match only (`ann` never
//!    matches `anna`, `mary-ann` never matches `Mary-Anne`)
//!
//! Empty queries match nothing.
//!
//! # Example
//!
//! ```rust
//! use client_search_core::matching::{MatchEngine, SearchQuery};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"full_name": "John Doe"}).as_object().unwrap().clone(),
//!     json!({"full_name": "John Doe Jr"}).as_object().unwrap().clone(),
//! ];
//!
//! let hits = MatchEngine::new().search(&records, &SearchQuery::name("john doe"));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].index, 0);
//! ```

mod engine;
mod query;
mod strategies;

pub use engine::{MatchEngine, MatchHit, SearchOptions};
pub use query::{QueryShape, SearchQuery};
pub use strategies::{name_tokens, MatchKind};
