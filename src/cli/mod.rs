//! CLI argument parsing

mod common;
mod enums;

use clap::Parser;

pub use common::OutputFormat;
pub use enums::{Column, ReportVariant};

use crate::config::{cf_config, defaults};

/// List every app in a Cloud Foundry foundation
#[derive(Parser, Debug)]
#[command(name = "cfapps")]
#[command(version)]
#[command(
    about = "List all apps in the foundation, sorted by Org and Space",
    long_about = None
)]
pub struct Cli {
    /// API endpoint (falls back to the cf CLI config)
    #[arg(short = 'a', long, env = cf_config::API_ENV_VAR)]
    pub api: Option<String>,

    /// Access token (falls back to the cf CLI config)
    #[arg(short = 't', long, env = cf_config::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Report layout
    #[arg(long, value_enum, default_value_t = ReportVariant::Full)]
    pub variant: ReportVariant,

    /// Explicit column list, overrides --variant (e.g. org,space,application)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub columns: Option<Vec<Column>>,

    /// Only list apps running from a docker image
    #[arg(long, default_value_t = false)]
    pub docker_only: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit the header row
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Batch mode: no spinner
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Columns to render: the explicit list if given, else the variant's
    ///
    /// A column repeated in `--columns` is rendered once, at its first
    /// position.
    pub fn report_columns(&self) -> Vec<Column> {
        match &self.columns {
            Some(columns) if !columns.is_empty() => {
                let mut unique = Vec::with_capacity(columns.len());
                for column in columns {
                    if !unique.contains(column) {
                        unique.push(*column);
                    }
                }
                unique
            }
            _ => self.variant.columns(),
        }
    }
}
