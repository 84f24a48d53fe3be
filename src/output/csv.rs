//! CSV output formatter

use std::io::{self, Write};

use super::common::escape_csv;
use super::{Formatter, Report};

/// Formatter for CSV output
pub struct CsvFormatter {
    pub no_header: bool,
}

impl Formatter for CsvFormatter {
    fn format(&self, out: &mut dyn Write, report: &Report) -> io::Result<()> {
        if !self.no_header {
            writeln!(out, "{}", report.headers.join(","))?;
        }

        for row in &report.rows {
            let cells: Vec<String> = row.iter().map(|cell| escape_csv(cell)).collect();
            writeln!(out, "{}", cells.join(","))?;
        }
        Ok(())
    }
}
