use std::fmt;

/// Custom error type for Cloud Foundry operations
#[derive(Debug)]
pub enum CfError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// A call to the platform API failed for the given path
    Fetch { path: String, source: Box<CfError> },
    /// A fetched document does not have the expected shape
    DataContract { path: String, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// API endpoint not found in any source
    TargetNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl CfError {
    /// Wrap a collaborator failure with the reference that was being fetched
    pub fn fetch(path: &str, source: CfError) -> Self {
        CfError::Fetch {
            path: path.to_string(),
            source: Box::new(source),
        }
    }

    /// Build a data contract violation for the document at `path`
    pub fn data_contract(path: &str, message: impl Into<String>) -> Self {
        CfError::DataContract {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CfError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CfError::Fetch { path, source } => write!(f, "Failed to fetch {}: {}", path, source),
            CfError::DataContract { path, message } => {
                write!(f, "Unexpected document at {}: {}", path, message)
            }
            CfError::TokenNotFound(msg) => write!(f, "{}", msg),
            CfError::TargetNotFound(msg) => write!(f, "{}", msg),
            CfError::Json(msg) => write!(f, "JSON error: {}", msg),
            CfError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CfError::Http(e) => Some(e),
            CfError::Fetch { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CfError {
    fn from(err: reqwest::Error) -> Self {
        CfError::Http(err)
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CfError {
    fn from(err: std::io::Error) -> Self {
        CfError::Config(err.to_string())
    }
}

/// Result type alias for Cloud Foundry operations
pub type Result<T> = std::result::Result<T, CfError>;
