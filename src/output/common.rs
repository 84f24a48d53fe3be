//! Common utilities for output formatters

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Report;

/// Escape a value for CSV output
/// Handles commas, quotes, and line breaks according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// One report row keyed by header, serialized in column order
pub struct KeyedRow<'a> {
    headers: &'a [&'static str],
    cells: &'a [String],
}

impl Serialize for KeyedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(self.cells) {
            map.serialize_entry(header, cell)?;
        }
        map.end()
    }
}

/// Rows keyed by header, for structured output (JSON/YAML)
pub fn keyed_rows(report: &Report) -> Vec<KeyedRow<'_>> {
    report
        .rows
        .iter()
        .map(|row| KeyedRow {
            headers: &report.headers,
            cells: row,
        })
        .collect()
}
