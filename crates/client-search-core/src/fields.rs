//! Field resolution
//!
//! Maps a user-supplied field name onto the record keys to read. Two fields
//! have aliases (`name` for the full name, several spellings of email); any
//! other name is looked up as given, then lower-cased, then by its snake-case
//! equivalent so `Phone Number`, `phone-number` and `phone_number` all land on
//! the same key.

use crate::record::{value_to_string, RawRecord};

/// Field searched when the caller names none.
pub const DEFAULT_FIELD: &str = "full_name";

/// A canonicalized search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Other(String),
}

impl Field {
    /// Canonicalize a field name. Blank names mean the full name.
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "name" | "full_name" => Field::FullName,
            "email" | "mail" | "e-mail" | "e_mail" => Field::Email,
            _ => Field::Other(trimmed.to_string()),
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Field::FullName)
    }

    /// Primary record key for this field.
    pub fn key(&self) -> &str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Other(name) => name,
        }
    }

    /// Read this field from a raw record.
    ///
    /// `None` means the field is missing (absent or null), which is distinct
    /// from an empty string. A missing full name is synthesized from
    /// `first_name`/`last_name` when either is present.
    pub fn resolve(&self, record: &RawRecord) -> Option<String> {
        match self {
            Field::FullName => {
                lookup(record, "full_name").or_else(|| synthesize_full_name(record))
            }
            Field::Email => lookup(record, "email"),
            Field::Other(name) => lookup(record, name),
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::parse(name)
    }
}

/// Snake-case form used to compare field names across naming conventions.
pub fn symbol_form(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Three-step lookup: key as given, lower-cased key, then any key with the
/// same symbol form. First non-null value wins.
pub(crate) fn lookup(record: &RawRecord, name: &str) -> Option<String> {
    if let Some(value) = record.get(name).and_then(value_to_string) {
        return Some(value);
    }

    let lower = name.to_lowercase();
    if lower != name {
        if let Some(value) = record.get(&lower).and_then(value_to_string) {
            return Some(value);
        }
    }

    let wanted = symbol_form(name);
    if wanted.is_empty() {
        return None;
    }
    record
        .iter()
        .filter(|(key, _)| symbol_form(key) == wanted)
        .find_map(|(_, value)| value_to_string(value))
}

fn synthesize_full_name(record: &RawRecord) -> Option<String> {
    let first = lookup(record, "first_name");
    let last = lookup(record, "last_name");
    if first.is_none() && last.is_none() {
        return None;
    }

    let name = [first, last]
        .into_iter()
        .flatten()
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some(name)
}
