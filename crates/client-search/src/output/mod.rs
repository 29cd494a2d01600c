//! Rendering search results and duplicate groups
//!
//! Every renderer writes to a `Write` so the CLI can target stdout and tests
//! can target a buffer.

mod csv;
mod json;
mod table;

use std::io::Write;

use client_search_core::{DuplicateGroups, Record};
use serde_json::{Map, Value};

use crate::error::Result;

pub use table::Table;

pub const NO_RESULTS: &str = "No results found.";
pub const NO_DUPLICATES: &str = "No duplicate emails found.";

/// Fields shown by default when the records carry enough of them.
const STANDARD_FIELDS: [&str; 4] = ["id", "full_name", "name", "email"];
/// Minimum number of standard fields for the standard layout.
const MIN_STANDARD_FIELDS: usize = 3;
/// Columns taken from the first record otherwise.
const FALLBACK_FIELDS: usize = 5;

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Unknown names fall back to the table format.
impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

pub fn render_records<W: Write>(out: &mut W, records: &[Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::write_pretty(out, &records),
        OutputFormat::Csv => csv::write_records(out, records),
        OutputFormat::Table => {
            if records.is_empty() {
                writeln!(out, "{}", NO_RESULTS)?;
                return Ok(());
            }
            let rows = flatten(records);
            let fields = display_fields(&rows[0]);
            let mut table = Table::new(fields.iter().map(|f| heading(f)).collect());
            for row in &rows {
                table.push(fields.iter().map(|f| cell(row.get(f.as_str()))).collect());
            }
            table.write_to(out)
        }
    }
}

pub fn render_duplicates<W: Write>(
    out: &mut W,
    groups: &DuplicateGroups,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => json::write_pretty(out, groups),
        OutputFormat::Csv => csv::write_duplicates(out, groups),
        OutputFormat::Table => {
            if groups.is_empty() {
                writeln!(out, "{}", NO_DUPLICATES)?;
                return Ok(());
            }
            for group in groups {
                writeln!(out)?;
                writeln!(out, "Duplicate email: {}", group.email)?;
                let mut table = Table::new(vec!["ID".to_string(), "Full Name".to_string()]);
                for record in &group.records {
                    table.push(vec![
                        record.id().unwrap_or_else(|| "N/A".to_string()),
                        record.full_name(),
                    ]);
                }
                table.write_to(out)?;
            }
            Ok(())
        }
    }
}

/// Records as they serialize, so `full_name` is always present.
pub(crate) fn flatten(records: &[Record]) -> Vec<Map<String, Value>> {
    records
        .iter()
        .map(|record| match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            _ => record.data().clone(),
        })
        .collect()
}

/// Columns for a result set, chosen from its first row.
pub fn display_fields(first: &Map<String, Value>) -> Vec<String> {
    let standard: Vec<String> = STANDARD_FIELDS
        .iter()
        .filter(|field| first.contains_key(**field))
        .map(|field| field.to_string())
        .collect();

    if standard.len() >= MIN_STANDARD_FIELDS {
        standard
    } else {
        first.keys().take(FALLBACK_FIELDS).cloned().collect()
    }
}

/// `full_name` becomes `Full name`.
pub fn heading(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Cell text for a value; missing and null render as `N/A`.
pub(crate) fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_search_core::group_by_email;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        value
            .as_array()
            .unwrap()
            .iter()
            .cloned()
            .filter_map(Record::from_value)
            .collect()
    }

    fn render(records: &[Record], format: OutputFormat) -> String {
        let mut out = Vec::new();
        render_records(&mut out, records, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("yaml"), OutputFormat::Table);
    }

    #[test]
    fn headings() {
        assert_eq!(heading("full_name"), "Full name");
        assert_eq!(heading("id"), "Id");
        assert_eq!(heading("EMAIL"), "Email");
        assert_eq!(heading(""), "");
    }

    #[test]
    fn standard_fields_when_present() {
        let first = json!({"id": 1, "full_name": "A", "email": "a@x.com", "phone": "1"});
        assert_eq!(
            display_fields(first.as_object().unwrap()),
            vec!["id", "full_name", "email"]
        );
    }

    #[test]
    fn first_keys_otherwise() {
        let first = json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6, "id": 7});
        assert_eq!(
            display_fields(first.as_object().unwrap()),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn table_with_missing_cells() {
        let output = render(
            &records(json!([
                {"id": 1, "full_name": "John Doe", "email": "john@example.com"},
                {"id": 2, "full_name": "No Email"}
            ])),
            OutputFormat::Table,
        );
        assert!(output.contains("Full name"));
        assert!(output.contains("John Doe"));
        assert!(output.contains("N/A"));
    }

    #[test]
    fn empty_table() {
        assert_eq!(render(&[], OutputFormat::Table), "No results found.\n");
    }

    #[test]
    fn json_includes_full_name() {
        let output = render(
            &records(json!([{"id": 8, "first_name": "Bob", "last_name": "Johnson"}])),
            OutputFormat::Json,
        );
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["full_name"], json!("Bob Johnson"));
    }

    #[test]
    fn empty_json_is_array() {
        assert_eq!(render(&[], OutputFormat::Json).trim(), "[]");
    }

    #[test]
    fn duplicate_tables() {
        let groups = group_by_email(records(json!([
            {"id": 1, "full_name": "John Doe", "email": "dup@example.com"},
            {"id": 3, "full_name": "Johnny", "email": "DUP@example.com"}
        ])));

        let mut out = Vec::new();
        render_duplicates(&mut out, &groups, OutputFormat::Table).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Duplicate email: dup@example.com"));
        assert!(output.contains("Full Name"));
        assert!(output.contains("Johnny"));
    }

    #[test]
    fn no_duplicates_message() {
        let mut out = Vec::new();
        render_duplicates(&mut out, &DuplicateGroups::default(), OutputFormat::Table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No duplicate emails found.\n");
    }
}
