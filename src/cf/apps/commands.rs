//! App listing command handler

use log::{debug, info};
use std::io::Write;

use super::aggregator::list_all_apps;
use super::report::{AppFilter, ReportConfig};
use crate::cf::traits::PlatformApi;
use crate::cli::{Cli, OutputFormat};
use crate::output::output_apps;
use crate::ui::{create_spinner, finish_spinner};

/// Settings for one run of the list command
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub config: ReportConfig,
    pub output: OutputFormat,
    pub no_header: bool,
    pub batch: bool,
}

impl From<&Cli> for ListOptions {
    fn from(cli: &Cli) -> Self {
        let filter = if cli.docker_only {
            AppFilter::DockerOnly
        } else {
            AppFilter::All
        };
        Self {
            config: ReportConfig::new(cli.report_columns(), filter),
            output: cli.output,
            no_header: cli.no_header,
            batch: cli.batch,
        }
    }
}

/// What a run printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// A report with this many apps
    Listed(usize),
    /// The foundation has no (matching) apps
    NoApps,
    /// The run failed; the error was printed
    Failed,
}

impl ListOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, ListOutcome::Failed)
    }
}

/// Run the list command, printing exactly one of: the report, the
/// no-results line, or the failure message
pub async fn run_list_command<A, W>(
    api: &A,
    options: &ListOptions,
    out: &mut W,
) -> std::io::Result<ListOutcome>
where
    A: PlatformApi + ?Sized,
    W: Write,
{
    let with_status = options.output == OutputFormat::Table;
    if with_status {
        writeln!(out, "Listing all apps in the foundation...")?;
        writeln!(out)?;
    }

    debug!("Report columns: {:?}, filter: {:?}", options.config.columns, options.config.filter);
    let spinner = create_spinner("Fetching apps...", options.batch);
    let result = list_all_apps(api, &options.config).await;
    finish_spinner(spinner);

    let records = match result {
        Ok(records) => records,
        Err(e) => {
            debug!("Listing failed: {:?}", e);
            writeln!(out, "FAILED")?;
            writeln!(out, "Error completing request: {}", e)?;
            return Ok(ListOutcome::Failed);
        }
    };

    if with_status {
        writeln!(out, "OK")?;
        writeln!(out)?;
    }

    if records.is_empty() {
        writeln!(out, "No apps found")?;
        info!("No apps found");
        return Ok(ListOutcome::NoApps);
    }

    output_apps(
        out,
        &records,
        &options.config.columns,
        options.output,
        options.no_header,
    )?;
    info!("Listed {} apps", records.len());
    Ok(ListOutcome::Listed(records.len()))
}
