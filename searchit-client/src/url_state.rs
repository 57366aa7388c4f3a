//! Keeps the page URL's `q` and `page` parameters in step with the search.
//!
//! The page URL is the address of the results page itself (not the API
//! endpoint). Reading it back yields [`UrlParams`], which is enough to
//! re-issue the same search after a reload or history navigation.

use url::Url;

use crate::window::parse_one_based_page;

/// Name of the page-URL parameter carrying the query text.
pub const QUERY_PARAM: &str = "q";

/// Name of the page-URL parameter carrying the one-based page number.
pub const PAGE_PARAM: &str = "page";

/// Search parameters carried by a page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParams {
    /// The active query, or `None` when `q` is absent or blank.
    pub query: Option<String>,
    /// The requested page; 1 when `page` is absent or not a valid page.
    pub page: u32,
}

/// Read `q` and `page` from a page URL.
///
/// The first occurrence of each parameter wins.
///
/// # Examples
///
/// ```
/// use searchit_client::url_state::read_params;
/// use url::Url;
///
/// let url = Url::parse("http://localhost:3000/?q=rust+book&page=3").unwrap();
/// let params = read_params(&url);
/// assert_eq!(params.query.as_deref(), Some("rust book"));
/// assert_eq!(params.page, 3);
/// ```
pub fn read_params(url: &Url) -> UrlParams {
    let mut query = None;
    let mut page = None;

    for (key, value) in url.query_pairs() {
        match &*key {
            QUERY_PARAM if query.is_none() => query = Some(value.into_owned()),
            PAGE_PARAM if page.is_none() => page = Some(value.into_owned()),
            _ => {}
        }
    }

    UrlParams {
        query: query.filter(|q| !q.trim().is_empty()),
        page: page.as_deref().and_then(parse_one_based_page).unwrap_or(1),
    }
}

/// Return a copy of `url` with `q` and `page` set.
///
/// Other query parameters keep their relative order and come first; the
/// fragment is preserved.
pub fn with_params(url: &Url, query: &str, page: u32) -> Url {
    let mut updated = url.clone();
    let others = other_pairs(url);
    updated
        .query_pairs_mut()
        .clear()
        .extend_pairs(others)
        .append_pair(QUERY_PARAM, query)
        .append_pair(PAGE_PARAM, &page.to_string());
    updated
}

/// Return a copy of `url` with `q` and `page` removed.
pub fn without_params(url: &Url) -> Url {
    let mut updated = url.clone();
    let others = other_pairs(url);
    if others.is_empty() {
        updated.set_query(None);
    } else {
        updated.query_pairs_mut().clear().extend_pairs(others);
    }
    updated
}

fn other_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .filter(|(key, _)| key != QUERY_PARAM && key != PAGE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
