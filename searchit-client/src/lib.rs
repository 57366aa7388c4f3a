//! # searchit-client
//!
//! Paginated client for a remote search endpoint.
//!
//! The endpoint answers `GET ?query=..&page=..` with one page of results and
//! the total page count. This crate fetches those pages, keeps the state a
//! results page renders from, computes the sliding window of page-number
//! controls, and mirrors the active query and page into a page URL so that
//! back/forward navigation and reloads reproduce the same results.
//!
//! ## Design
//!
//! - [`ResultsPager`] is the controller; every operation awaits one request
//! - [`SearchBackend`] is the seam to the network; [`HttpBackend`] uses `reqwest`
//! - [`History`] models the browser session history of page URLs
//! - Failures are logged, raised once through a [`Notifier`], and clear the results
//! - No retries, caching, or request de-duplication

pub mod backend;
pub mod config;
pub mod error;
pub mod history;
pub mod http;
pub mod pager;
pub mod state;
pub mod types;
pub mod url_state;
pub mod window;

pub use backend::{HttpBackend, SearchBackend};
pub use config::{ClientConfig, PagerConfig};
pub use error::{Result, SearchError};
pub use history::History;
pub use pager::{Notifier, ResultsPager, FETCH_FAILED_ALERT};
pub use state::SearchState;
pub use types::{SearchResponse, SearchResult};
pub use url_state::UrlParams;
pub use window::{compute_window, PageWindow};

/// Fetch one page of results from the configured endpoint.
///
/// Convenience wrapper that builds an [`HttpBackend`] for a single request.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration or a blank
/// query, and any [`SearchError`] the request produces.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> searchit_client::Result<()> {
/// let config = searchit_client::ClientConfig::default();
/// let page = searchit_client::search("rust programming", 1, &config).await?;
/// for result in &page.results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, page: u32, config: &ClientConfig) -> Result<SearchResponse> {
    if query.trim().is_empty() {
        return Err(SearchError::Config("query must not be empty".into()));
    }
    let backend = HttpBackend::new(config)?;
    backend.fetch_page(query, page.max(1)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_rejects_blank_query() {
        let result = search("  ", 1, &ClientConfig::default()).await;
        assert!(result.unwrap_err().to_string().contains("query"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = ClientConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("test", 1, &config).await;
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn search_validates_config_bad_endpoint() {
        let config = ClientConfig {
            endpoint: "nope".into(),
            ..Default::default()
        };
        let result = search("test", 1, &config).await;
        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }
}
