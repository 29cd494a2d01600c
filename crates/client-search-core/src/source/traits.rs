//! Record source trait definitions

use crate::record::RawRecord;
use crate::source::error::SourceResult;

/// Anything that can hand over a snapshot of raw client records.
///
/// Implementations exist for:
/// - HTTP JSON endpoints and local JSON files (application crate)
/// - Testing: in-memory (`MemorySource`)
///
/// Retrieval is synchronous; callers match against the returned snapshot
/// and keep no state between calls.
pub trait RecordSource {
    /// Retrieve every record the source currently holds.
    fn fetch_records(&self) -> SourceResult<Vec<RawRecord>>;

    /// Short description used in log lines.
    fn describe(&self) -> String {
        "record source".to_string()
    }
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn fetch_records(&self) -> SourceResult<Vec<RawRecord>> {
        (**self).fetch_records()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn fetch_records(&self) -> SourceResult<Vec<RawRecord>> {
        (**self).fetch_records()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
