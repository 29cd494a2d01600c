//! Record source abstraction
//!
//! The core never performs I/O itself. It consumes a `RecordSource`, which
//! returns either a list of raw records or a `SourceError`. Implementations:
//!
//! - **Memory**: fixed in-memory list (`MemorySource`)
//! - **HTTP** and **file**: live in the application crate
//!
//! # Example
//!
//! ```rust
//! use client_search_core::source::{MemorySource, RecordSource};
//! use serde_json::json;
//!
//! let source = MemorySource::from_json(json!([
//!     {"id": 1, "full_name": "John Doe", "email": "john@example.com"}
//! ])).unwrap();
//!
//! let records = source.fetch_records().unwrap();
//! assert_eq!(records.len(), 1);
//! ```

mod decode;
mod error;
mod memory;
mod traits;

pub use decode::{records_from_json, records_from_str};
pub use error::{SourceError, SourceResult};
pub use memory::MemorySource;
pub use traits::RecordSource;
