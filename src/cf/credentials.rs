//! API endpoint and token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::cf_config;
use crate::error::{CfError, Result};

/// Subset of the cf CLI config file we read
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct CfConfigFile {
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}

/// Resolved API endpoint and access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub endpoint: String,
    pub token: String,
}

/// Target resolution with fallback logic
pub struct TargetResolver {
    config_path: Option<PathBuf>,
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetResolver {
    /// Create a resolver reading the cf CLI config from its default location
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a resolver reading the given config file
    pub fn with_config_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Resolve endpoint and token with fallback:
    /// 1. CLI arguments or their environment variables (CF_API, CF_TOKEN)
    /// 2. cf CLI config file (Target, AccessToken)
    pub fn resolve(&self, cli_api: Option<&str>, cli_token: Option<&str>) -> Result<Target> {
        self.resolve_from(cli_api.map(str::to_string), cli_token.map(str::to_string))
    }

    /// Fill in whatever is missing from the config file
    fn resolve_from(&self, api: Option<String>, token: Option<String>) -> Result<Target> {
        let file = if api.is_none() || token.is_none() {
            self.read_config_file()?
        } else {
            CfConfigFile::default()
        };

        let endpoint = api
            .or(file.target)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CfError::TargetNotFound(self.not_found_message("API endpoint")))?;
        let token = token
            .or(file.access_token)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CfError::TokenNotFound(self.not_found_message("access token")))?;

        debug!("Using API endpoint {}", endpoint);
        Ok(Target {
            endpoint: normalize_endpoint(&endpoint),
            token,
        })
    }

    /// Read the cf CLI config file; a missing file is treated as empty
    fn read_config_file(&self) -> Result<CfConfigFile> {
        let Some(path) = &self.config_path else {
            return Ok(CfConfigFile::default());
        };

        debug!("Looking for cf config at: {}", path.display());
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CfConfigFile::default())
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|e| {
            CfError::Config(format!(
                "Could not parse cf config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Generate helpful error message when a setting is not found
    fn not_found_message(&self, what: &str) -> String {
        let file_info = self
            .config_path
            .as_deref()
            .map(|p| format!(", {}", p.display()))
            .unwrap_or_default();

        format!(
            "No {} found. Please provide one using one of:\n\
             \n\
             1. CLI arguments:     cfapps --api <URL> --token <TOKEN>\n\
             2. Environment vars:  export {}=<URL> {}=<TOKEN>\n\
             3. cf CLI login:      cf login\n\
             \n\
             Checked: args, env vars [{}, {}]{}",
            what,
            cf_config::API_ENV_VAR,
            cf_config::TOKEN_ENV_VAR,
            cf_config::API_ENV_VAR,
            cf_config::TOKEN_ENV_VAR,
            file_info
        )
    }

    /// Path of the cf CLI config: $CF_HOME/.cf/config.json or ~/.cf/config.json
    fn default_config_path() -> Option<PathBuf> {
        let home = std::env::var(cf_config::HOME_ENV_VAR)
            .ok()
            .map(PathBuf::from)
            .or_else(dirs::home_dir)?;
        Some(config_path_in(&home))
    }
}

fn config_path_in(home: &Path) -> PathBuf {
    home.join(cf_config::DIR_NAME).join(cf_config::FILE_NAME)
}

/// Add a scheme when missing and drop trailing slashes
fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    }
}
