//! Duplicate email grouping.
//!
//! Records are keyed by their normalized (trimmed, lower-cased) email.
//! Records without an email, or with a blank one, never take part. Only
//! groups with at least two members survive. Group order is the order in
//! which each email was first seen; records keep their input order inside
//! a group.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::record::{RawRecord, Record};

/// Records sharing one normalized email.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub email: String,
    pub records: Vec<Record>,
}

/// Ordered mapping from normalized email to its duplicate records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DuplicateGroups {
    groups: Vec<DuplicateGroup>,
}

impl DuplicateGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Records for a normalized email.
    pub fn get(&self, email: &str) -> Option<&[Record]> {
        self.groups
            .iter()
            .find(|group| group.email == email)
            .map(|group| group.records.as_slice())
    }

    /// Emails in first-seen order.
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.email.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DuplicateGroup> {
        self.groups.iter()
    }
}

impl IntoIterator for DuplicateGroups {
    type Item = DuplicateGroup;
    type IntoIter = std::vec::IntoIter<DuplicateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a DuplicateGroups {
    type Item = &'a DuplicateGroup;
    type IntoIter = std::slice::Iter<'a, DuplicateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for DuplicateGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.email, &group.records)?;
        }
        map.end()
    }
}

/// Grouping key for an email, or `None` when it is blank.
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Group records by normalized email, keeping groups of two or more.
pub fn group_by_email<I>(records: I) -> DuplicateGroups
where
    I: IntoIterator<Item = Record>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for record in records {
        let Some(email) = record.email().and_then(|e| normalize_email(&e)) else {
            continue;
        };

        match index.get(&email) {
            Some(&slot) => groups[slot].records.push(record),
            None => {
                index.insert(email.clone(), groups.len());
                groups.push(DuplicateGroup {
                    email,
                    records: vec![record],
                });
            }
        }
    }

    groups.retain(|group| group.records.len() >= 2);
    DuplicateGroups { groups }
}

/// Wrap raw records and group them by email.
pub fn find_duplicate_emails(records: &[RawRecord]) -> DuplicateGroups {
    group_by_email(records.iter().cloned().map(Record::new))
}
