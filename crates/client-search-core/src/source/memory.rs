//! In-memory record source
//!
//! Holds a fixed list of records. Used by tests and by callers that already
//! have their data in hand.

use serde_json::Value;

use crate::record::RawRecord;
use crate::source::decode::records_from_json;
use crate::source::error::SourceResult;
use crate::source::traits::RecordSource;

/// In-memory record source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a source with initial records.
    pub fn with_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Create a source from a JSON array (or single object).
    pub fn from_json(value: Value) -> SourceResult<Self> {
        Ok(Self::with_records(records_from_json(value)?))
    }

    pub fn push(&mut self, record: RawRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for MemorySource {
    fn fetch_records(&self) -> SourceResult<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}
