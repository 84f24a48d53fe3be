//! Seams between the aggregation core and the platform API

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{CfError, Result};

/// The platform API collaborator
///
/// Accepts a resource path (relative to the API endpoint, or an absolute
/// URL) and returns the decoded JSON document. Implementations own
/// transport concerns such as authentication and timeouts.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Fetch the document at `path`
    async fn fetch(&self, path: &str) -> Result<serde_json::Value>;
}

/// Fetch a document and decode it into a typed model
///
/// Collaborator failures are wrapped in [`CfError::Fetch`] with the failing
/// path; documents that do not match `T` become [`CfError::DataContract`].
pub async fn fetch_typed<A, T>(api: &A, path: &str) -> Result<T>
where
    A: PlatformApi + ?Sized,
    T: DeserializeOwned,
{
    debug!("Fetching {}", path);
    let raw = api
        .fetch(path)
        .await
        .map_err(|e| CfError::fetch(path, e))?;
    decode(path, raw)
}

/// Decode an untyped document, reporting shape mismatches against `path`
pub fn decode<T: DeserializeOwned>(path: &str, raw: serde_json::Value) -> Result<T> {
    serde_json::from_value(raw).map_err(|e| CfError::data_contract(path, e.to_string()))
}
