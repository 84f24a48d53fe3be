//! YAML output formatter

use std::io::{self, Write};

use super::common::keyed_rows;
use super::{Formatter, Report};

/// Formatter for YAML output
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format(&self, out: &mut dyn Write, report: &Report) -> io::Result<()> {
        let yaml = serde_yml::to_string(&keyed_rows(report)).map_err(io::Error::other)?;
        write!(out, "{}", yaml)
    }
}
