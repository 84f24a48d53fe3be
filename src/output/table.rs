//! Table output formatter

use comfy_table::{presets::NOTHING, Table};
use std::io::{self, Write};

use super::{Formatter, Report};

/// Formatter for ASCII table output
pub struct TableFormatter {
    pub no_header: bool,
}

impl Formatter for TableFormatter {
    fn format(&self, out: &mut dyn Write, report: &Report) -> io::Result<()> {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !self.no_header {
            table.set_header(report.headers.clone());
        }

        for row in &report.rows {
            table.add_row(row);
        }

        writeln!(out, "{table}")
    }
}
