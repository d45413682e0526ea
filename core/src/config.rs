//! Immutable connection settings shared by every request.
//!
//! # Design
//! `ApiConfig` is built once and handed to `ExercisesClient` and the
//! transport explicitly. Nothing reads the environment after construction, so
//! two configurations can coexist in the same process (one per test, say).

use std::time::Duration;

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Base URL used when no override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Request timeout applied uniformly by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Base URL and timeout for the exercises API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Build a configuration with an explicit base URL. The URL is not
    /// validated; a malformed value surfaces later as a transport error.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through `lookup`. An absent or empty
    /// override falls back to [`DEFAULT_BASE_URL`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn timeout_ms(&self) -> u128 {
        self.timeout.as_millis()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_local_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(config.timeout_ms(), 10_000);
    }

    #[test]
    fn override_replaces_base_url() {
        let config = ApiConfig::from_lookup(|key| {
            assert_eq!(key, BASE_URL_ENV);
            Some("https://api.example.com/v2".to_string())
        });
        assert_eq!(config.base_url(), "https://api.example.com/v2");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let config = ApiConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_override_falls_back_to_default() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn malformed_override_is_kept_verbatim() {
        let config = ApiConfig::from_lookup(|_| Some("not a url".to_string()));
        assert_eq!(config.base_url(), "not a url");
    }
}
