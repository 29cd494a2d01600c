//! # Client Search
//!
//! Front ends for `client-search-core`:
//! - **config**: source selection (HTTP API or local file) and defaults
//! - **sources**: blocking HTTP and file record sources
//! - **output**: table, JSON and CSV rendering
//! - **server**: REST API (`/health`, `/query`, `/duplicates`)
//! - **cli**: the `client-search` command line
//! - **error**: common error type
//! - **tracing**: logging setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use client_search::config::SourceConfig;
//! use client_search_core::ClientSearch;
//!
//! let source = SourceConfig::File("clients.json".into()).build()?;
//! let results = ClientSearch::new(source).try_search("john", "full_name")?;
//! println!("{} matches", results.len());
//! # Ok::<(), client_search::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod server;
pub mod sources;
pub mod tracing;

pub use error::{Error, Result};
