//! CSV output. Record headers are the union of keys in first-seen order.

use std::io::Write;

use client_search_core::{DuplicateGroups, Record};

use super::flatten;
use crate::error::Result;

pub(crate) fn write_records<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    let rows = flatten(records);

    let mut headers: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut writer = csv::Writer::from_writer(out);
    if !headers.is_empty() {
        writer.write_record(&headers)?;
    }
    for row in &rows {
        writer.write_record(headers.iter().map(|h| csv_value(row.get(h))))?;
    }
    writer.flush()?;
    Ok(())
}

/// One row per record: `email,id,full_name`.
pub(crate) fn write_duplicates<W: Write>(out: &mut W, groups: &DuplicateGroups) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["email", "id", "full_name"])?;
    for group in groups {
        for record in &group.records {
            writer.write_record([
                group.email.clone(),
                record.id().unwrap_or_default(),
                record.full_name(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn csv_value(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
