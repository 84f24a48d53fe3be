//! Report column and variant enums

use clap::ValueEnum;

/// Columns that can appear in the app report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Column {
    /// Application name
    Application,
    /// Owning organization
    Org,
    /// Owning space
    Space,
    /// Desired instance count
    Instances,
    /// Memory limit (MB)
    Memory,
    /// Disk quota (MB)
    Disk,
    /// Docker image
    Image,
    /// Desired state (STARTED, STOPPED)
    State,
}

impl Column {
    /// Header text for this column
    pub fn header(&self) -> &'static str {
        match self {
            Column::Application => "application",
            Column::Org => "org",
            Column::Space => "space",
            Column::Instances => "instances",
            Column::Memory => "memory",
            Column::Disk => "disk",
            Column::Image => "image",
            Column::State => "state",
        }
    }

    /// App entity field this column is rendered from
    pub fn field_name(&self) -> &'static str {
        match self {
            Column::Application => "name",
            Column::Org | Column::Space => "space_url",
            Column::Instances => "instances",
            Column::Memory => "memory",
            Column::Disk => "disk_quota",
            Column::Image => "docker_image",
            Column::State => "state",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// Preset column layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportVariant {
    /// application, org, space, instances, memory, disk (default)
    #[default]
    Full,
    /// org, space, application
    Locator,
    /// image, org, space, application
    Docker,
}

impl ReportVariant {
    /// Columns rendered by this variant, in order
    pub fn columns(&self) -> Vec<Column> {
        match self {
            ReportVariant::Full => vec![
                Column::Application,
                Column::Org,
                Column::Space,
                Column::Instances,
                Column::Memory,
                Column::Disk,
            ],
            ReportVariant::Locator => vec![Column::Org, Column::Space, Column::Application],
            ReportVariant::Docker => {
                vec![Column::Image, Column::Org, Column::Space, Column::Application]
            }
        }
    }
}

impl std::fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportVariant::Full => write!(f, "full"),
            ReportVariant::Locator => write!(f, "locator"),
            ReportVariant::Docker => write!(f, "docker"),
        }
    }
}
