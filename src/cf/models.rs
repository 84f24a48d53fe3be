//! Cloud Foundry v2 API data models

use serde::Deserialize;

/// One page of a v2 collection
#[derive(Deserialize, Debug, Clone)]
pub struct Page<T> {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    /// Location of the next page; `None` on the last page
    #[serde(default)]
    pub next_url: Option<String>,
    pub resources: Vec<Resource<T>>,
}

impl<T> Page<T> {
    /// Next page reference, treating an empty string like null
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// A v2 resource: metadata plus a typed entity
#[derive(Deserialize, Debug, Clone)]
pub struct Resource<T> {
    #[serde(default)]
    pub metadata: Option<Metadata>,
    pub entity: T,
}

impl<T> Resource<T> {
    /// Self link of the resource, if the API sent one
    pub fn url(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.url.as_deref())
    }
}

/// Resource metadata
#[derive(Deserialize, Debug, Clone)]
pub struct Metadata {
    pub guid: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Application entity
#[derive(Deserialize, Debug, Clone)]
pub struct AppEntity {
    pub name: String,
    /// Link to the owning space
    pub space_url: String,
    #[serde(default)]
    pub memory: Option<f64>,
    #[serde(default)]
    pub disk_quota: Option<f64>,
    #[serde(default)]
    pub instances: Option<f64>,
    #[serde(default)]
    pub docker_image: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl AppEntity {
    /// Check if the app runs from a docker image
    pub fn is_docker(&self) -> bool {
        self.docker_image
            .as_deref()
            .is_some_and(|image| !image.is_empty())
    }
}

/// Space entity
#[derive(Deserialize, Debug, Clone)]
pub struct SpaceEntity {
    pub name: String,
    /// Link to the owning organization
    pub organization_url: String,
}

/// Organization entity
#[derive(Deserialize, Debug, Clone)]
pub struct OrganizationEntity {
    pub name: String,
}

/// Format an API number the shortest way that round-trips (1024, 0.5)
pub fn format_number(value: f64) -> String {
    value.to_string()
}
