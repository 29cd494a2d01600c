//! Local JSON file source

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use client_search_core::source::records_from_str;
use client_search_core::{RawRecord, RecordSource, SourceError, SourceResult};
use tracing::debug;

/// Reads the client list from a JSON file on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn fetch_records(&self) -> SourceResult<Vec<RawRecord>> {
        debug!(path = %self.path.display(), "reading clients");

        let contents = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(self.path.display().to_string()),
            _ => SourceError::Backend(format!("{}: {}", self.path.display(), e)),
        })?;

        records_from_str(&contents)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
