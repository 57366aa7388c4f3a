//! The seam between the pager and whatever answers search requests.
//!
//! [`HttpBackend`] talks to the remote endpoint; tests substitute their own
//! [`SearchBackend`] implementations.

use url::Url;

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::SearchResponse;

/// Something that can serve one page of results for a query.
///
/// All implementations must be `Send + Sync` so a pager can be moved
/// across tasks.
pub trait SearchBackend: Send + Sync {
    /// Fetch page `page` (one-based) of results for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the server answers with
    /// a non-success status, or the body is not a valid [`SearchResponse`].
    fn fetch_page(
        &self,
        query: &str,
        page: u32,
    ) -> impl std::future::Future<Output = Result<SearchResponse, SearchError>> + Send;
}

/// Search backend that issues `GET <endpoint>?query=..&page=..`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Create a backend from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let endpoint = config.validate()?;
        let client = http::build_client(config)?;
        Ok(Self { client, endpoint })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchBackend for HttpBackend {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError> {
        tracing::trace!(query, page, "search request");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query.to_owned()), ("page", page.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "search endpoint rejected request");
            return Err(SearchError::Status(status.as_u16()));
        }

        // Undecodable bodies surface as `SearchError::Parse` via `From<reqwest::Error>`.
        let body: SearchResponse = response.json().await?;
        tracing::trace!(count = body.results.len(), "search response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpBackend>();
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = ClientConfig {
            endpoint: "not a url".into(),
            ..Default::default()
        };
        let err = HttpBackend::new(&config).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn new_keeps_parsed_endpoint() {
        let backend = HttpBackend::new(&ClientConfig::default()).expect("backend");
        assert_eq!(backend.endpoint().path(), "/search");
        assert_eq!(backend.endpoint().port(), Some(5000));
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_http_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:9/search".into(),
            timeout_seconds: 2,
            ..Default::default()
        };
        let backend = HttpBackend::new(&config).expect("backend");
        let err = backend.fetch_page("rust", 1).await.unwrap_err();
        assert!(matches!(err, SearchError::Http(_) | SearchError::Timeout(_)));
    }
}
