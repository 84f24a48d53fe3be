//! Memoized resolution of an app's space and organization names

use log::debug;
use std::collections::HashMap;

use super::models::{OrganizationEntity, Resource, SpaceEntity};
use super::traits::{fetch_typed, PlatformApi};
use crate::error::Result;

/// Names of the organization and space owning an app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentInfo {
    pub org_name: String,
    pub space_name: String,
}

/// Cache of [`ParentInfo`] keyed by space URL for one aggregation run
///
/// Each distinct space URL costs two API calls (space, then organization)
/// the first time it is resolved and none afterwards. Failed resolutions
/// are not stored.
pub struct ParentInfoCache<'a, A: ?Sized> {
    api: &'a A,
    entries: HashMap<String, ParentInfo>,
}

impl<'a, A: PlatformApi + ?Sized> ParentInfoCache<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            entries: HashMap::new(),
        }
    }

    /// Resolve the organization and space names for `space_url`
    pub async fn resolve(&mut self, space_url: &str) -> Result<ParentInfo> {
        if let Some(info) = self.entries.get(space_url) {
            return Ok(info.clone());
        }

        let space: Resource<SpaceEntity> = fetch_typed(self.api, space_url).await?;
        let org: Resource<OrganizationEntity> =
            fetch_typed(self.api, &space.entity.organization_url).await?;

        let info = ParentInfo {
            org_name: org.entity.name,
            space_name: space.entity.name,
        };
        debug!(
            "Resolved {} to org '{}' / space '{}'",
            space_url, info.org_name, info.space_name
        );

        self.entries.insert(space_url.to_string(), info.clone());
        Ok(info)
    }

    /// Number of resolved spaces
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
