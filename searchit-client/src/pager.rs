//! The results-page controller.
//!
//! [`ResultsPager`] owns the [`SearchState`], the navigation [`History`] and
//! a [`SearchBackend`]. Every operation takes `&mut self` and awaits its one
//! request, so operations on a pager never overlap.
//!
//! Fetch failures never escape as errors: they are logged, raised once
//! through the [`Notifier`], and the result list is cleared.

use url::Url;

use crate::backend::SearchBackend;
use crate::config::PagerConfig;
use crate::error::SearchError;
use crate::history::History;
use crate::state::SearchState;
use crate::url_state::{read_params, with_params, without_params};
use crate::window::{compute_window, PageWindow};

/// Message raised through the [`Notifier`] when a fetch fails.
pub const FETCH_FAILED_ALERT: &str = "Failed to fetch search results. Please try again.";

/// Surface for blocking user alerts.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn alert(&self, message: &str);
}

/// Search controller tying state, URL sync and the backend together.
pub struct ResultsPager<B, N> {
    backend: B,
    notifier: N,
    state: SearchState,
    history: History,
    window_size: u32,
}

impl<B: SearchBackend, N: Notifier> ResultsPager<B, N> {
    /// Create a pager on the configured page URL with empty state.
    ///
    /// The page URL is not read; call [`ResultsPager::sync_from_url`] to
    /// restore a search it carries.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn new(backend: B, notifier: N, config: &PagerConfig) -> Result<Self, SearchError> {
        let page_url = config.validate()?;
        Ok(Self {
            backend,
            notifier,
            state: SearchState::default(),
            history: History::new(page_url),
            window_size: config.window_size,
        })
    }

    /// Current search state, for rendering.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The page URL currently shown in the address bar.
    pub fn current_url(&self) -> &Url {
        self.history.current()
    }

    /// Navigation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The backend requests go to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The configured number of page-number controls.
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Page-number controls to render for the current state.
    pub fn window(&self) -> Vec<u32> {
        compute_window(
            self.state.current_page,
            self.state.total_pages,
            self.window_size,
        )
    }

    /// The window as a range type.
    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(
            self.state.current_page,
            self.state.total_pages,
            self.window_size,
        )
    }

    /// Whether a Previous control is shown.
    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    /// Whether a Next control is shown.
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Update the text input. Does not search.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Run the search typed into the input, starting at page 1.
    ///
    /// A blank query does nothing. Otherwise a page URL for page 1 is
    /// pushed onto the history before the request goes out.
    pub async fn submit(&mut self) {
        if self.state.query.trim().is_empty() {
            tracing::trace!("ignoring blank query");
            return;
        }

        self.state.searched = true;
        let url = with_params(self.history.current(), &self.state.query, 1);
        self.history.push(url);
        self.load_page(1).await;
    }

    /// Show page `page` of the active search.
    ///
    /// Pages outside `1..=total_pages` are ignored.
    pub async fn select_page(&mut self, page: u32) {
        if !self.state.is_selectable(page) {
            tracing::debug!(page, total = self.state.total_pages, "ignoring out-of-range page");
            return;
        }

        let url = with_params(self.history.current(), &self.state.query, page);
        self.history.push(url);
        self.load_page(page).await;
    }

    /// Select the page after the current one, if any.
    pub async fn next_page(&mut self) {
        self.select_page(self.state.current_page.saturating_add(1))
            .await;
    }

    /// Select the page before the current one, if any.
    pub async fn previous_page(&mut self) {
        self.select_page(self.state.current_page.saturating_sub(1))
            .await;
    }

    /// Re-derive state from the current page URL.
    ///
    /// Without a `q` parameter all state is reset; otherwise the search is
    /// re-issued for the URL's page and the counters are restored from the
    /// response. The history is left as is.
    pub async fn sync_from_url(&mut self) {
        let params = read_params(self.history.current());
        match params.query {
            None => {
                tracing::debug!("page URL carries no query, resetting");
                self.state.reset();
            }
            Some(query) => {
                self.state.query = query;
                self.state.searched = true;
                self.load_page(params.page).await;
            }
        }
    }

    /// Navigate to `url` as a new history entry and sync from it.
    pub async fn open(&mut self, url: Url) {
        self.history.push(url);
        self.sync_from_url().await;
    }

    /// Navigate straight to page `page` of `query` as one new history entry.
    ///
    /// Issues a single request; an out-of-range page is clamped from the
    /// response like any page URL.
    pub async fn open_search(&mut self, query: &str, page: u32) {
        let url = with_params(self.history.current(), query, page.max(1));
        self.open(url).await;
    }

    /// Go back one history entry and sync. Returns whether navigation
    /// happened.
    pub async fn back(&mut self) -> bool {
        if self.history.back().is_none() {
            return false;
        }
        self.sync_from_url().await;
        true
    }

    /// Go forward one history entry and sync. Returns whether navigation
    /// happened.
    pub async fn forward(&mut self) -> bool {
        if self.history.forward().is_none() {
            return false;
        }
        self.sync_from_url().await;
        true
    }

    /// Reset to the empty state and drop `q`/`page` from the page URL.
    pub fn clear(&mut self) {
        self.state.reset();
        let url = without_params(self.history.current());
        self.history.push(url);
    }

    async fn load_page(&mut self, page: u32) {
        self.state.loading = true;

        let outcome = self.backend.fetch_page(&self.state.query, page).await;
        match outcome {
            Ok(response) => {
                tracing::debug!(
                    page = response.page,
                    total_pages = response.total_pages,
                    count = response.results.len(),
                    "search results received"
                );
                self.state.apply_response(response);
                if self.state.current_page != page {
                    // Page was clamped; the URL names the page shown.
                    let url = with_params(
                        self.history.current(),
                        &self.state.query,
                        self.state.current_page,
                    );
                    self.history.replace(url);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, page, "error fetching search results");
                self.notifier.alert(FETCH_FAILED_ALERT);
                self.state.clear_results();
            }
        }

        self.state.loading = false;
    }
}
