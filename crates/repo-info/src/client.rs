// crates/repo-info/src/client.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
    transport::{HttpRequest, Transport},
};

pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// One row of a repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub private: bool,
}

/// Read-only client for the repository endpoints of the GitHub REST API.
///
/// Every call issues exactly one GET; there is no retry and no pagination.
pub struct RepoInfoClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> RepoInfoClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches `/repos/{owner}/{repo}` and returns its top-level fields in response order.
    pub fn repo_info(&self, owner: &str, repo: &str) -> Result<Map<String, Value>> {
        let url = self.config.endpoint(&format!("repos/{owner}/{repo}"));
        match self.fetch(&url)? {
            Value::Object(fields) => Ok(fields),
            _ => Err(ClientError::UnexpectedShape { url, expected: "a JSON object" }),
        }
    }

    /// Fetches `/users/{owner}/repos` (first page only).
    pub fn list_repositories(&self, owner: &str) -> Result<Vec<RepoSummary>> {
        let url = self.config.endpoint(&format!("users/{owner}/repos"));
        let value = self.fetch(&url)?;
        if !value.is_array() {
            return Err(ClientError::UnexpectedShape { url, expected: "a JSON array" });
        }
        serde_json::from_value(value).map_err(|e| ClientError::Decode { url, details: e.to_string() })
    }

    fn request(&self, url: &str) -> HttpRequest {
        let mut headers = vec![
            ("Accept".to_string(), ACCEPT.to_string()),
            ("User-Agent".to_string(), self.config.user_agent.clone()),
        ];
        if let Some(token) = &self.config.token {
            headers.push(("Authorization".to_string(), format!("token {token}")));
        }
        HttpRequest { url: url.to_string(), headers }
    }

    fn fetch(&self, url: &str) -> Result<Value> {
        debug!(url, authenticated = self.config.token.is_some(), "GET");
        let response = self.transport.get(&self.request(url))?;

        if !response.is_success() {
            let message = error_message(&response.body);
            warn!(url, status = response.status, "request rejected");
            return Err(ClientError::Status { url: url.to_string(), status: response.status, message });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::Decode { url: url.to_string(), details: e.to_string() })
    }
}

/// GitHub error bodies carry a `message` field; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
