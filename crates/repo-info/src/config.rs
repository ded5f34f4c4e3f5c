// crates/repo-info/src/config.rs
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const BASE_URL_VAR: &str = "GITHUB_API_URL";

/// Connection settings handed to [`crate::RepoInfoClient`].
///
/// The client never consults the process environment; only the binary builds
/// this from it via [`ClientConfig::from_env`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: format!("repo_info/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `GITHUB_TOKEN` and `GITHUB_API_URL` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();
        if let Some(base_url) = read(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        config.token = read(TOKEN_VAR);
        config
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_public_api_without_token() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, None);
        assert!(config.user_agent.starts_with("repo_info/"));
    }

    #[test]
    fn environment_supplies_token_and_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[
            (TOKEN_VAR, "ghp_example"),
            (BASE_URL_VAR, "https://ghe.example.com/api/v3"),
        ]));
        assert_eq!(config.token.as_deref(), Some("ghp_example"));
        assert_eq!(config.base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn blank_token_is_unset() {
        let config = ClientConfig::from_lookup(lookup(&[(TOKEN_VAR, "  ")]));
        assert_eq!(config.token, None);
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.endpoint("/users/octocat/repos"), "http://localhost:8080/users/octocat/repos");
    }

    #[test]
    fn debug_output_hides_token() {
        let config = ClientConfig::default().with_token("secret-value");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-value"));
        assert!(debug.contains("<redacted>"));
    }
}
