//! MatchEngine - record selection for a normalized query

use serde::Serialize;
use tracing::debug;

use super::query::{QueryShape, SearchQuery};
use super::strategies::{self, MatchKind};
use crate::fields::Field;
use crate::record::RawRecord;

/// A record accepted by the engine, by position in the input slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchHit {
    pub index: usize,
    pub kind: MatchKind,
}

impl MatchHit {
    fn new(index: usize, kind: MatchKind) -> Self {
        Self { index, kind }
    }
}

/// Search options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keep at most this many hits, in input order.
    pub limit: Option<usize>,
    /// Only accept values equal to the query; skips every other rule.
    pub exact: bool,
}

/// Stateless matcher over a snapshot of raw records.
///
/// Hits always come back in input order, so repeated searches over the
/// same records are order-stable.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    options: SearchOptions,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Select the records matching `query`.
    ///
    /// Empty queries match nothing. Name queries go through the tiered
    /// name strategy; every other field uses the per-record predicate.
    pub fn search(&self, records: &[RawRecord], query: &SearchQuery) -> Vec<MatchHit> {
        if query.is_empty() {
            debug!("empty query, no records selected");
            return Vec::new();
        }

        let mut hits = if self.options.exact {
            self.exact_hits(records, query)
        } else if query.field().is_name() {
            self.name_hits(records, query)
        } else {
            records
                .iter()
                .enumerate()
                .filter_map(|(idx, record)| {
                    self.match_record(record, query)
                        .map(|kind| MatchHit::new(idx, kind))
                })
                .collect()
        };

        if let Some(limit) = self.options.limit {
            hits.truncate(limit);
        }
        hits
    }

    /// Per-record predicate: exact, substring, or token-prefix match on the
    /// query's field. Missing or empty values never match.
    ///
    /// For the full name this is the broad fallback rule, which also accepts
    /// records whose email contains the query.
    pub fn match_record(&self, record: &RawRecord, query: &SearchQuery) -> Option<MatchKind> {
        if query.is_empty() {
            return None;
        }

        if query.field().is_name() {
            let name = lowered(record, &Field::FullName).unwrap_or_default();
            let email = lowered(record, &Field::Email).unwrap_or_default();
            return strategies::name_or_email_match(query.text(), query.tokens(), &name, &email);
        }

        let value = lowered(record, query.field())?;
        strategies::field_match(query.text(), query.tokens(), &value)
    }

    fn exact_hits(&self, records: &[RawRecord], query: &SearchQuery) -> Vec<MatchHit> {
        records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                let value = lowered(record, query.field())?;
                strategies::exact_match(query.text(), value.trim())
                    .map(|kind| MatchHit::new(idx, kind))
            })
            .collect()
    }

    /// Tiered name search; the first tier that applies decides the result.
    fn name_hits(&self, records: &[RawRecord], query: &SearchQuery) -> Vec<MatchHit> {
        let shape = query.shape();
        match shape {
            QueryShape::Empty => Vec::new(),
            QueryShape::MultiWord => {
                let names = full_names(records);
                let exact = collect_hits(&names, |name| strategies::exact_match(query.text(), name));
                if !exact.is_empty() {
                    debug!(hits = exact.len(), "name search: exact tier");
                    return exact;
                }
                let all = collect_hits(&names, |name| {
                    strategies::all_tokens_match(query.tokens(), name)
                });
                debug!(hits = all.len(), "name search: all-tokens tier");
                all
            }
            QueryShape::SingleWord => {
                let names = full_names(records);
                let word = &query.tokens()[0];
                let hits = collect_hits(&names, |name| strategies::whole_word_match(word, name));
                debug!(hits = hits.len(), "name search: whole-word tier");
                hits
            }
        }
    }
}

fn lowered(record: &RawRecord, field: &Field) -> Option<String> {
    field.resolve(record).map(|value| value.to_lowercase())
}

fn full_names(records: &[RawRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| lowered(record, &Field::FullName).unwrap_or_default())
        .collect()
}

fn collect_hits<F>(names: &[String], rule: F) -> Vec<MatchHit>
where
    F: Fn(&str) -> Option<MatchKind>,
{
    names
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| rule(name).map(|kind| MatchHit::new(idx, kind)))
        .collect()
}
