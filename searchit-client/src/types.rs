//! Wire types exchanged with the search endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// A single search result as returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The URL of the result page.
    pub url: String,
    /// A text snippet summarising the page. Empty when the server omits it.
    #[serde(default)]
    pub snippet: String,
    /// One-based rank assigned by the server, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
    /// Server-side document identifier, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<u64>,
}

impl SearchResult {
    /// Build a result with only the three displayed fields.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            rank: None,
            doc_id: None,
        }
    }
}

/// One page of results plus the paging counters the server computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Results for the requested page, in server order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SearchResult>,
    /// The page the server actually served.
    pub page: u32,
    /// Total number of pages available for the query.
    pub total_pages: u32,
    /// Total number of matching results across all pages, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

// `results: null` is treated the same as a missing list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SearchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SearchResult>>::deserialize(deserializer)?.unwrap_or_default())
}
