//! Cloud Foundry HTTP client for API interactions

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::traits::PlatformApi;
use crate::config::api;
use crate::error::{CfError, Result};

/// Cloud Foundry v2 API client
pub struct CfClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl CfClient {
    /// Create a new client with pooled connections and request timeouts
    pub fn new(endpoint: String, token: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// API endpoint the client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request URL for a path or absolute link
    pub(crate) fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.endpoint, path)
        } else {
            format!("{}/{}", self.endpoint, path)
        }
    }

    /// Authorization header value; the cf CLI stores tokens with the scheme
    fn authorization(&self) -> String {
        if self.token.to_ascii_lowercase().starts_with("bearer ") {
            self.token.clone()
        } else {
            format!("bearer {}", self.token)
        }
    }
}

#[async_trait]
impl PlatformApi for CfClient {
    async fn fetch(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.authorization())
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CfError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", path),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let client = CfClient::new("https://api.example.com/".to_string(), "t".to_string());
        assert_eq!(client.endpoint(), "https://api.example.com");
    }

    #[test]
    fn test_url_for_relative_path() {
        let client = CfClient::new("https://api.example.com".to_string(), "t".to_string());
        assert_eq!(
            client.url_for("/v2/apps?page=2"),
            "https://api.example.com/v2/apps?page=2"
        );
        assert_eq!(client.url_for("v2/apps"), "https://api.example.com/v2/apps");
    }

    #[test]
    fn test_url_for_absolute_url() {
        let client = CfClient::new("https://api.example.com".to_string(), "t".to_string());
        assert_eq!(
            client.url_for("https://other.example.com/v2/spaces/s1"),
            "https://other.example.com/v2/spaces/s1"
        );
    }

    #[test]
    fn test_authorization_adds_scheme() {
        let client = CfClient::new("https://api.example.com".to_string(), "abc".to_string());
        assert_eq!(client.authorization(), "bearer abc");
    }

    #[test]
    fn test_authorization_keeps_existing_scheme() {
        let client = CfClient::new(
            "https://api.example.com".to_string(),
            "bearer eyJhbGci".to_string(),
        );
        assert_eq!(client.authorization(), "bearer eyJhbGci");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        let client = CfClient::new(mock_server.uri(), "test-token".to_string());

        Mock::given(method("GET"))
            .and(path("/v2/apps"))
            .and(query_param("page", "2"))
            .and(header("Authorization", "bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"next_url": null, "resources": []})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let doc = client.fetch("/v2/apps?page=2").await.unwrap();
        assert!(doc["resources"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_api_error() {
        let mock_server = MockServer::start().await;
        let client = CfClient::new(mock_server.uri(), "test-token".to_string());

        Mock::given(method("GET"))
            .and(path("/v2/apps"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        match client.fetch("/v2/apps").await.unwrap_err() {
            CfError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("/v2/apps"));
            }
            other => panic!("Expected CfError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_body() {
        let mock_server = MockServer::start().await;
        let client = CfClient::new(mock_server.uri(), "test-token".to_string());

        Mock::given(method("GET"))
            .and(path("/v2/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        match client.fetch("/v2/apps").await.unwrap_err() {
            CfError::Json(message) => assert!(message.contains("expected value")),
            other => panic!("Expected CfError::Json, got {:?}", other),
        }
    }
}
