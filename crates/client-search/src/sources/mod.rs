//! Record sources backed by the outside world
//!
//! - `HttpSource` - `GET <base>/clients.json` with a blocking reqwest client
//! - `FileSource` - a local JSON file
//!
//! Both decode through `client_search_core::source::records_from_str`, so a
//! single JSON object is accepted as a one-record list.

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;
