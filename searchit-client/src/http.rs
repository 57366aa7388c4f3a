//! Shared HTTP client for search endpoint requests.
//!
//! Provides a configured [`reqwest::Client`] with the request timeout and
//! User-Agent taken from [`ClientConfig`].

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::SearchError;

/// User-Agent sent when the configuration does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("searchit/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for the search endpoint.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
