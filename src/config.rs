/// Configuration constants for the Cloud Foundry v2 API
pub mod api {
    /// Root collection listing every application in the foundation
    pub const APPS_PATH: &str = "/v2/apps";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for the cf CLI config file
pub mod cf_config {
    /// Directory holding the cf CLI state (relative to CF_HOME or HOME)
    pub const DIR_NAME: &str = ".cf";

    /// Config file name inside the cf directory
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable overriding the home directory used by the cf CLI
    pub const HOME_ENV_VAR: &str = "CF_HOME";

    /// Environment variable holding the API endpoint
    pub const API_ENV_VAR: &str = "CF_API";

    /// Environment variable holding the access token
    pub const TOKEN_ENV_VAR: &str = "CF_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
