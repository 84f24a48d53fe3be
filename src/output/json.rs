//! JSON output formatter

use std::io::{self, Write};

use super::common::keyed_rows;
use super::{Formatter, Report};

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, out: &mut dyn Write, report: &Report) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&keyed_rows(report))?;
        writeln!(out, "{}", json)
    }
}
