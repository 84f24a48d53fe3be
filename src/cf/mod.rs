//! Cloud Foundry API client module
//!
//! Talks to the v2 API of a foundation: walks paginated collections and
//! resolves the org and space owning each app.

pub mod apps;
mod client;
mod credentials;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parents;
pub mod traits;

pub use apps::{
    list_all_apps, run_list_command, AppAggregator, AppFilter, AppRecord, ListOptions,
    ListOutcome, ReportConfig,
};
pub use client::CfClient;
pub use credentials::{Target, TargetResolver};
pub use models::{AppEntity, OrganizationEntity, Page, Resource, SpaceEntity};
pub use pagination::Paginator;
pub use parents::{ParentInfo, ParentInfoCache};
pub use traits::PlatformApi;
