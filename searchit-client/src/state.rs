//! In-memory state of the results page.

use serde::{Deserialize, Serialize};

use crate::types::{SearchResponse, SearchResult};
use crate::window::clamp_page;

/// Everything the results page renders from.
///
/// `current_page <= total_pages` whenever `total_pages > 0`. The result
/// list is replaced wholesale by each fetch, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Text currently in the search input.
    pub query: String,
    /// One-based page being shown.
    pub current_page: u32,
    /// Total number of pages for the active query.
    pub total_pages: u32,
    /// Results for the current page.
    pub results: Vec<SearchResult>,
    /// Whether a search has been issued since the last reset.
    pub searched: bool,
    /// Whether a request is in flight.
    pub loading: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_pages: 0,
            results: Vec::new(),
            searched: false,
            loading: false,
        }
    }
}

impl SearchState {
    /// Replace results and page counters from a server response.
    pub fn apply_response(&mut self, response: SearchResponse) {
        self.total_pages = response.total_pages;
        self.current_page = if response.total_pages > 0 {
            clamp_page(response.page, response.total_pages)
        } else {
            response.page.max(1)
        };
        self.results = response.results;
    }

    /// Drop the current results after a failed fetch. Page counters stay.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Reset to the empty, never-searched state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true` when a search ran, finished, and found nothing.
    pub fn shows_no_results(&self) -> bool {
        self.searched && !self.loading && self.results.is_empty()
    }

    /// Whether `page` can be selected.
    pub fn is_selectable(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// Whether a Previous control is shown.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a Next control is shown.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
