//! Turning decoded JSON into raw records

use serde_json::Value;

use crate::record::RawRecord;
use crate::source::error::{SourceError, SourceResult};

/// Accept a JSON array of objects, or a single object as a one-record list.
pub fn records_from_json(value: Value) -> SourceResult<Vec<RawRecord>> {
    match value {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(SourceError::InvalidData(format!(
                    "element {} is {}, expected an object",
                    idx,
                    kind_of(&other)
                ))),
            })
            .collect(),
        other => Err(SourceError::InvalidData(format!(
            "expected a list of records, got {}",
            kind_of(&other)
        ))),
    }
}

/// Parse a JSON document into raw records.
pub fn records_from_str(input: &str) -> SourceResult<Vec<RawRecord>> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| SourceError::InvalidJson(e.to_string()))?;
    records_from_json(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
