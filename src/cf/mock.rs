//! Fixture platform API for testing
//!
//! Serves canned documents by path and records every call so tests can
//! assert how often the aggregation core hits the API.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::PlatformApi;
use crate::error::{CfError, Result};

/// Call-counting fixture API.
///
/// # Example
/// ```ignore
/// let api = FixtureApi::new()
///     .with_document("/v2/spaces/s1", json!({"entity": {"name": "dev", "organization_url": "/v2/organizations/o1"}}));
/// ```
#[derive(Default)]
pub struct FixtureApi {
    documents: HashMap<String, serde_json::Value>,
    failures: HashMap<String, u16>,
    calls: Mutex<Vec<String>>,
}

impl FixtureApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` for `path`
    pub fn with_document(mut self, path: &str, document: serde_json::Value) -> Self {
        self.documents.insert(path.to_string(), document);
        self
    }

    /// Fail calls to `path` with the given HTTP status
    pub fn with_failure(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    /// Paths fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made to `path`
    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }

    /// Total number of calls
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PlatformApi for FixtureApi {
    async fn fetch(&self, path: &str) -> Result<serde_json::Value> {
        self.calls.lock().unwrap().push(path.to_string());

        if let Some(status) = self.failures.get(path) {
            return Err(CfError::Api {
                status: *status,
                message: format!("Failed to fetch {}", path),
            });
        }

        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| CfError::Api {
                status: 404,
                message: format!("No fixture for {}", path),
            })
    }
}

/// Build an app page document
pub fn apps_page(apps: &[(&str, &str)], next_url: Option<&str>) -> serde_json::Value {
    let resources: Vec<serde_json::Value> = apps
        .iter()
        .map(|(name, space_url)| {
            serde_json::json!({
                "metadata": {"guid": format!("guid-{}", name), "url": format!("/v2/apps/guid-{}", name)},
                "entity": {
                    "name": name,
                    "space_url": space_url,
                    "memory": 1024,
                    "disk_quota": 2048,
                    "instances": 2,
                    "docker_image": null,
                    "state": "STARTED"
                }
            })
        })
        .collect();

    serde_json::json!({
        "total_results": resources.len(),
        "next_url": next_url,
        "resources": resources
    })
}

/// Build a space document
pub fn space_doc(name: &str, organization_url: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": {"guid": format!("guid-{}", name)},
        "entity": {"name": name, "organization_url": organization_url}
    })
}

/// Build an organization document
pub fn org_doc(name: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": {"guid": format!("guid-{}", name)},
        "entity": {"name": name}
    })
}
