//! ClientSearch - the two operations exposed over a record source.
//!
//! `search` and `find_duplicate_emails` are total: a failed retrieval is
//! logged and treated as "no records". The `try_` variants return the
//! `SourceError` instead so front ends can report the cause.

use tracing::{debug, warn};

use crate::duplicates::{self, DuplicateGroups};
use crate::matching::{MatchEngine, SearchOptions, SearchQuery};
use crate::record::{self, Record};
use crate::source::{RecordSource, SourceResult};

/// Search service bound to one record source.
#[derive(Debug, Clone)]
pub struct ClientSearch<S> {
    source: S,
}

impl<S: RecordSource> ClientSearch<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Records matching `query` on `field`; a blank field means the full name.
    pub fn search(&self, query: &str, field: &str) -> Vec<Record> {
        self.search_with(query, field, &SearchOptions::default())
    }

    pub fn search_with(&self, query: &str, field: &str, options: &SearchOptions) -> Vec<Record> {
        self.try_search_with(query, field, options)
            .unwrap_or_else(|e| {
                warn!(source = %self.source.describe(), error = %e, "record retrieval failed, returning no results");
                Vec::new()
            })
    }

    pub fn try_search(&self, query: &str, field: &str) -> SourceResult<Vec<Record>> {
        self.try_search_with(query, field, &SearchOptions::default())
    }

    pub fn try_search_with(
        &self,
        query: &str,
        field: &str,
        options: &SearchOptions,
    ) -> SourceResult<Vec<Record>> {
        let records = self.source.fetch_records()?;
        let query = SearchQuery::new(query, field);
        let hits = MatchEngine::with_options(options.clone()).search(&records, &query);

        debug!(
            fetched = records.len(),
            matched = hits.len(),
            field = query.field().key(),
            "search complete"
        );

        Ok(record::assemble(hits.iter().map(|hit| &records[hit.index])))
    }

    /// Groups of two or more records sharing a normalized email.
    pub fn find_duplicate_emails(&self) -> DuplicateGroups {
        self.try_find_duplicate_emails().unwrap_or_else(|e| {
            warn!(source = %self.source.describe(), error = %e, "record retrieval failed, reporting no duplicates");
            DuplicateGroups::default()
        })
    }

    pub fn try_find_duplicate_emails(&self) -> SourceResult<DuplicateGroups> {
        let records = self.source.fetch_records()?;
        let groups = duplicates::find_duplicate_emails(&records);
        debug!(fetched = records.len(), groups = groups.len(), "duplicate scan complete");
        Ok(groups)
    }
}
