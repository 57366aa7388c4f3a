//! Client and pager configuration with sensible defaults.
//!
//! [`ClientConfig`] controls how the search endpoint is reached;
//! [`PagerConfig`] controls the page URL that mirrors the active search and
//! how many page-number controls are shown at once.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;

/// Default search endpoint of the reference server.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/search";

/// Default page URL whose `q`/`page` parameters mirror the search.
pub const DEFAULT_PAGE_URL: &str = "http://localhost:3000/";

/// Default number of visible page-number controls.
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// Configuration for reaching the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute `http`/`https` URL of the search endpoint.
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, `searchit/<version>` is sent.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Validates this configuration and returns the parsed endpoint.
    ///
    /// Checks:
    /// - `endpoint` must parse as an absolute `http` or `https` URL
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<Url, SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        parse_http_url("endpoint", &self.endpoint)
    }
}

/// Configuration for the results pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// URL of the results page itself; its `q` and `page` parameters are
    /// kept in sync with the active search.
    pub page_url: String,
    /// Number of page-number controls shown at once.
    pub window_size: u32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_owned(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl PagerConfig {
    /// Validates this configuration and returns the parsed page URL.
    ///
    /// Checks:
    /// - `window_size` must be greater than 0
    /// - `page_url` must parse as an absolute `http` or `https` URL
    pub fn validate(&self) -> Result<Url, SearchError> {
        if self.window_size == 0 {
            return Err(SearchError::Config(
                "window_size must be greater than 0".into(),
            ));
        }
        parse_http_url("page_url", &self.page_url)
    }
}

fn parse_http_url(field: &str, raw: &str) -> Result<Url, SearchError> {
    if raw.trim().is_empty() {
        return Err(SearchError::Config(format!("{field} must not be empty")));
    }
    let url = Url::parse(raw)
        .map_err(|e| SearchError::Config(format!("{field} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SearchError::Config(format!(
            "{field} must use http or https, got {other}"
        ))),
    }
}
