//! Client Search Core
//!
//! Matching and grouping engine for client records. Pure and synchronous:
//! records come in through a [`RecordSource`], results go out as
//! [`Record`]s. Transport, file loading, and rendering live in the
//! `client-search` crate.
//!
//! - `fields` - field name canonicalization and value lookup
//! - `matching` - query normalization, match strategies, tiered name search
//! - `duplicates` - grouping records that share an email
//! - `source` - the record source trait and an in-memory source
//! - `service` - `ClientSearch`, tying a source to the engine
//!
//! # Example
//!
//! ```rust
//! use client_search_core::{ClientSearch, MemorySource};
//! use serde_json::json;
//!
//! let source = MemorySource::from_json(json!([
//!     {"id": 1, "full_name": "John Doe", "email": "john@example.com"},
//!     {"id": 2, "full_name": "Ann Lee", "email": "ann@example.com"},
//!     {"id": 3, "full_name": "Anna Lee", "email": "JOHN@example.com"},
//! ])).unwrap();
//!
//! let search = ClientSearch::new(source);
//!
//! let anns = search.search("Ann", "full_name");
//! assert_eq!(anns.len(), 1);
//! assert_eq!(anns[0].full_name(), "Ann Lee");
//!
//! let duplicates = search.find_duplicate_emails();
//! assert_eq!(duplicates.get("john@example.com").unwrap().len(), 2);
//! ```

pub mod duplicates;
pub mod fields;
pub mod matching;
pub mod record;
pub mod service;
pub mod source;

// Re-export main types at crate root
pub use duplicates::{group_by_email, DuplicateGroup, DuplicateGroups};
pub use fields::{Field, DEFAULT_FIELD};
pub use matching::{MatchEngine, MatchHit, MatchKind, SearchOptions, SearchQuery};
pub use record::{RawRecord, Record};
pub use service::ClientSearch;
pub use source::{MemorySource, RecordSource, SourceError, SourceResult};
