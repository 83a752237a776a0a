//! Client configuration with environment fallback.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jason.jakiverse.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "BLOG_API_URL";
pub const ENV_API_KEY: &str = "BLOG_API_KEY";

/// Where the client talks to and how it identifies itself.
///
/// Immutable once built. `api_key` is `None` rather than `Some("")` when no
/// key is configured, so "attach the header" is simply `api_key.is_some()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientConfig {
    /// Explicit values win when non-empty, then `BLOG_API_URL` /
    /// `BLOG_API_KEY`, then the built-in defaults.
    pub fn new(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        Self::from_lookup(base_url, api_key, |name| std::env::var(name).ok())
    }

    /// Like `new`, but reads fallbacks through `lookup` instead of the
    /// process environment.
    pub fn from_lookup<F>(base_url: Option<&str>, api_key: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_empty(base_url)
            .or_else(|| lookup(ENV_BASE_URL).filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = non_empty(api_key).or_else(|| lookup(ENV_API_KEY).filter(|v| !v.is_empty()));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
