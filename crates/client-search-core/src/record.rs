//! Raw records and the `Record` entity built from them.
//!
//! A source hands over raw records: ordered, string-keyed JSON objects with
//! no guaranteed key casing. `Record` wraps one raw record and exposes typed
//! accessors for the handful of fields the search tool cares about, plus a
//! generic `field` accessor for everything else.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::fields::{self, Field};

/// A record as delivered by a source, in original key order.
pub type RawRecord = Map<String, Value>;

/// Render a JSON value as a string. Null is treated as absent.
pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// A client record returned from a search or duplicate scan.
///
/// Immutable once built. `full_name` is total: it falls back to the
/// `first_name`/`last_name` pair and finally to the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    data: RawRecord,
}

impl Record {
    /// Wrap a raw record.
    pub fn new(data: RawRecord) -> Self {
        Self { data }
    }

    /// Build from an arbitrary JSON value; only objects are records.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(data) => Some(Self::new(data)),
            _ => None,
        }
    }

    /// The underlying raw mapping.
    pub fn data(&self) -> &RawRecord {
        &self.data
    }

    pub fn into_raw(self) -> RawRecord {
        self.data
    }

    /// Record identifier rendered as a string (numeric and string ids both work).
    pub fn id(&self) -> Option<String> {
        fields::lookup(&self.data, "id")
    }

    pub fn full_name(&self) -> String {
        Field::FullName.resolve(&self.data).unwrap_or_default()
    }

    pub fn email(&self) -> Option<String> {
        Field::Email.resolve(&self.data)
    }

    /// Explicit `first_name`, or the first word of the full name.
    pub fn first_name(&self) -> Option<String> {
        if let Some(first) = fields::lookup(&self.data, "first_name") {
            return Some(first);
        }
        self.full_name()
            .split_whitespace()
            .next()
            .map(str::to_string)
    }

    /// Explicit `last_name`, or every word of the full name after the first.
    ///
    /// A single-word name yields `Some("")`; an empty name yields `None`.
    pub fn last_name(&self) -> Option<String> {
        if let Some(last) = fields::lookup(&self.data, "last_name") {
            return Some(last);
        }
        let full_name = self.full_name();
        let mut words = full_name.split_whitespace();
        words.next()?;
        Some(words.collect::<Vec<_>>().join(" "))
    }

    /// Name for display: the trimmed full name, else the email, else `""`.
    pub fn display_name(&self) -> String {
        let name = self.full_name().trim().to_string();
        if name.is_empty() {
            self.email().unwrap_or_default()
        } else {
            name
        }
    }

    /// Generic accessor for any field, using the same resolution rules as search.
    pub fn field(&self, name: &str) -> Option<String> {
        Field::parse(name).resolve(&self.data)
    }
}

impl From<RawRecord> for Record {
    fn from(data: RawRecord) -> Self {
        Self::new(data)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.data {
            if key == "full_name" && value.is_null() {
                map.serialize_entry(key, &self.full_name())?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        if !self.data.contains_key("full_name") {
            map.serialize_entry("full_name", &self.full_name())?;
        }
        map.end()
    }
}

/// Wrap the raw records that survived matching or grouping.
pub fn assemble<'a, I>(records: I) -> Vec<Record>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    records.into_iter().cloned().map(Record::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn complete_data() {
        let r = record(json!({
            "id": 1,
            "first_name": "John",
            "last_name": "Doe",
            "full_name": "John Doe",
            "email": "john@example.com"
        }));
        assert_eq!(r.id().as_deref(), Some("1"));
        assert_eq!(r.first_name().as_deref(), Some("John"));
        assert_eq!(r.last_name().as_deref(), Some("Doe"));
        assert_eq!(r.full_name(), "John Doe");
        assert_eq!(r.email().as_deref(), Some("john@example.com"));
    }

    #[test]
    fn missing_name_defaults_to_empty() {
        let r = record(json!({"id": 2, "email": "jane@example.com"}));
        assert_eq!(r.full_name(), "");
        assert_eq!(r.first_name(), None);
        assert_eq!(r.last_name(), None);
    }

    #[test]
    fn null_name_defaults_to_empty() {
        let r = record(json!({"full_name": null}));
        assert_eq!(r.full_name(), "");
        assert_eq!(r.first_name(), None);
    }

    #[test]
    fn derives_parts_from_full_name() {
        let r = record(json!({"full_name": "Juan de la Cruz"}));
        assert_eq!(r.first_name().as_deref(), Some("Juan"));
        assert_eq!(r.last_name().as_deref(), Some("de la Cruz"));

        let single = record(json!({"full_name": "Madonna"}));
        assert_eq!(single.first_name().as_deref(), Some("Madonna"));
        assert_eq!(single.last_name().as_deref(), Some(""));
    }

    #[test]
    fn synthesizes_full_name_from_parts() {
        let r = record(json!({"id": 4, "first_name": "Bob", "last_name": "Johnson"}));
        assert_eq!(r.full_name(), "Bob Johnson");
    }

    #[test]
    fn string_ids_are_kept() {
        let r = record(json!({"id": "c-17"}));
        assert_eq!(r.id().as_deref(), Some("c-17"));
        assert_eq!(record(json!({})).id(), None);
    }

    #[test]
    fn id_uses_field_resolution() {
        let r = record(json!({"ID": 42, "Email": "a@x.com"}));
        assert_eq!(r.id().as_deref(), Some("42"));
        assert_eq!(r.id(), r.field("id"));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(record(json!({"full_name": "John Doe"})).display_name(), "John Doe");
        assert_eq!(
            record(json!({"full_name": "", "email": "john@example.com"})).display_name(),
            "john@example.com"
        );
        assert_eq!(
            record(json!({"full_name": null, "email": null})).display_name(),
            ""
        );
    }

    #[test]
    fn generic_field_access() {
        let r = record(json!({"Phone": "555-0100", "vip": true}));
        assert_eq!(r.field("phone").as_deref(), Some("555-0100"));
        assert_eq!(r.field("vip").as_deref(), Some("true"));
        assert_eq!(r.field("address"), None);
    }

    #[test]
    fn serializes_in_source_order_with_full_name() {
        let r = record(json!({"id": 1, "email": "a@x.com", "custom": "v"}));
        let out = serde_json::to_string(&r).unwrap();
        assert_eq!(out, r#"{"id":1,"email":"a@x.com","custom":"v","full_name":""}"#);

        let named = record(json!({"full_name": "Ann Lee", "id": 2}));
        let out = serde_json::to_string(&named).unwrap();
        assert_eq!(out, r#"{"full_name":"Ann Lee","id":2}"#);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("text")).is_none());
    }
}
