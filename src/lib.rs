//! cfapps - List every app in a Cloud Foundry foundation
//!
//! Walks the paginated `/v2/apps` collection, resolves the organization and
//! space owning each app (one lookup per distinct space), and prints a
//! report sorted by org, space and app name.
//!
//! # Example
//!
//! ```bash
//! # Use the endpoint and token from `cf login`
//! cfapps
//!
//! # Only org/space/application columns
//! cfapps --variant locator
//!
//! # Docker apps, as JSON
//! cfapps --variant docker --docker-only -o json
//! ```

pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use cf::{
    list_all_apps, run_list_command, AppFilter, AppRecord, CfClient, ListOptions, ListOutcome,
    ParentInfo, PlatformApi, ReportConfig, TargetResolver,
};
pub use cli::{Cli, Column, OutputFormat, ReportVariant};
pub use error::{CfError, Result};
pub use output::output_apps;
