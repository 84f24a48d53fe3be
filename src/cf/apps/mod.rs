//! App listing module

mod aggregator;
mod commands;
mod report;
mod sort;

pub use aggregator::{list_all_apps, AppAggregator, AppRecord};
pub use commands::{run_list_command, ListOptions, ListOutcome};
pub use report::{AppFilter, ReportConfig};
pub use sort::{compare_app_records, sort_app_records};
