//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod csv;
mod json;
mod table;
mod yaml;

use std::io::{self, Write};

use crate::cf::AppRecord;
use crate::cli::{Column, OutputFormat};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;
pub use self::yaml::YamlFormatter;

/// Rendered report: column headers plus one row of display strings per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Report {
    /// Project records onto the given columns
    pub fn new(records: &[AppRecord], columns: &[Column]) -> Self {
        Self {
            headers: columns.iter().map(Column::header).collect(),
            rows: records
                .iter()
                .map(|record| {
                    columns
                        .iter()
                        .map(|column| record.cell(*column).to_string())
                        .collect()
                })
                .collect(),
        }
    }
}

/// Trait for output formatters
pub trait Formatter {
    /// Write the report to `out`
    fn format(&self, out: &mut dyn Write, report: &Report) -> io::Result<()>;
}

/// Output app records in the specified format
pub fn output_apps<W: Write>(
    out: &mut W,
    records: &[AppRecord],
    columns: &[Column],
    format: OutputFormat,
    no_header: bool,
) -> io::Result<()> {
    let report = Report::new(records, columns);
    match format {
        OutputFormat::Table => TableFormatter { no_header }.format(out, &report),
        OutputFormat::Csv => CsvFormatter { no_header }.format(out, &report),
        OutputFormat::Json => JsonFormatter.format(out, &report),
        OutputFormat::Yaml => YamlFormatter.format(out, &report),
    }
}
