//! Collects every app in the foundation together with its org and space

use futures::TryStreamExt;
use log::{debug, info};
use std::pin::pin;

use super::report::ReportConfig;
use super::sort::sort_app_records;
use crate::cf::models::{format_number, AppEntity};
use crate::cf::pagination::Paginator;
use crate::cf::parents::{ParentInfo, ParentInfoCache};
use crate::cf::traits::PlatformApi;
use crate::cli::Column;
use crate::config::api;
use crate::error::{CfError, Result};

/// One app joined with the names of its org and space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRecord {
    pub name: String,
    pub parent: ParentInfo,
    pub instances: Option<String>,
    pub memory: Option<String>,
    pub disk: Option<String>,
    pub image: Option<String>,
    pub state: Option<String>,
}

impl AppRecord {
    fn new(app: AppEntity, parent: ParentInfo) -> Self {
        Self {
            name: app.name,
            parent,
            instances: app.instances.map(format_number),
            memory: app.memory.map(format_number),
            disk: app.disk_quota.map(format_number),
            image: app.docker_image,
            state: app.state,
        }
    }

    /// Display value for one report column
    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::Application => &self.name,
            Column::Org => &self.parent.org_name,
            Column::Space => &self.parent.space_name,
            Column::Instances => self.instances.as_deref().unwrap_or(""),
            Column::Memory => self.memory.as_deref().unwrap_or(""),
            Column::Disk => self.disk.as_deref().unwrap_or(""),
            Column::Image => self.image.as_deref().unwrap_or(""),
            Column::State => self.state.as_deref().unwrap_or(""),
        }
    }
}

/// Drives pagination over all apps and resolves their parents
pub struct AppAggregator<'a, A: ?Sized> {
    api: &'a A,
    config: &'a ReportConfig,
    parents: ParentInfoCache<'a, A>,
}

impl<'a, A: PlatformApi + ?Sized> AppAggregator<'a, A> {
    pub fn new(api: &'a A, config: &'a ReportConfig) -> Self {
        Self {
            api,
            config,
            parents: ParentInfoCache::new(api),
        }
    }

    /// Collect one record per reported app, in page order
    ///
    /// Any fetch failure or malformed app aborts the whole run; no partial
    /// result is returned.
    pub async fn collect(&mut self) -> Result<Vec<AppRecord>> {
        let api = self.api;
        let mut resources = pin!(Paginator::<A, AppEntity>::new(api, api::APPS_PATH).into_stream());
        let mut records = Vec::new();
        let mut skipped = 0usize;

        while let Some(resource) = resources.try_next().await? {
            let location = resource.url().unwrap_or(api::APPS_PATH).to_string();
            let app = resource.entity;

            if !self.config.filter.accepts(&app) {
                skipped += 1;
                continue;
            }
            self.check_required_fields(&app, &location)?;

            let parent = self.parents.resolve(&app.space_url).await?;
            records.push(AppRecord::new(app, parent));
        }

        info!(
            "Collected {} apps across {} spaces ({} filtered out)",
            records.len(),
            self.parents.len(),
            skipped
        );
        Ok(records)
    }

    fn check_required_fields(&self, app: &AppEntity, location: &str) -> Result<()> {
        for column in self.config.required_fields() {
            let present = match column {
                Column::Instances => app.instances.is_some(),
                Column::Memory => app.memory.is_some(),
                Column::Disk => app.disk_quota.is_some(),
                _ => true,
            };
            if !present {
                return Err(CfError::data_contract(
                    location,
                    format!("app '{}' has no `{}` field", app.name, column.field_name()),
                ));
            }
        }
        Ok(())
    }
}

/// Collect every app and sort by (org, space, app)
pub async fn list_all_apps<A>(api: &A, config: &ReportConfig) -> Result<Vec<AppRecord>>
where
    A: PlatformApi + ?Sized,
{
    let mut records = AppAggregator::new(api, config).collect().await?;
    sort_app_records(&mut records);
    debug!("Sorted {} app records", records.len());
    Ok(records)
}
