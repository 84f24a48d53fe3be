//! Report configuration: which columns are extracted and which apps kept

use crate::cf::models::AppEntity;
use crate::cli::{Column, ReportVariant};

/// Which apps make it into the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppFilter {
    #[default]
    All,
    /// Apps with a docker image only
    DockerOnly,
}

impl AppFilter {
    pub fn accepts(&self, app: &AppEntity) -> bool {
        match self {
            AppFilter::All => true,
            AppFilter::DockerOnly => app.is_docker(),
        }
    }
}

/// Columns and filter for one aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub columns: Vec<Column>,
    pub filter: AppFilter,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::from_variant(ReportVariant::default())
    }
}

impl ReportConfig {
    pub fn new(columns: Vec<Column>, filter: AppFilter) -> Self {
        Self { columns, filter }
    }

    /// Config rendering a preset variant, keeping every app
    pub fn from_variant(variant: ReportVariant) -> Self {
        Self::new(variant.columns(), AppFilter::All)
    }

    /// Header row
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::header).collect()
    }

    /// Numeric app fields that must be present for every reported app
    ///
    /// `image` and `state` are nullable in the v2 API (buildpack apps send
    /// `"docker_image": null`) and render as empty cells instead.
    pub fn required_fields(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns
            .iter()
            .copied()
            .filter(|column| matches!(column, Column::Instances | Column::Memory | Column::Disk))
    }
}
