//! Plain-text rendering of the results page.

use searchit_client::{SearchResult, SearchState};

/// Shown while a request is in flight.
pub const LOADING: &str = "Loading...";

/// Shown after a search that found nothing.
pub const NO_RESULTS: &str = "No results found. Try another query.";

/// Render the results area: loading line, empty-result notice, or result
/// cards followed by the pagination bar.
pub fn render_page(state: &SearchState, window: &[u32]) -> String {
    let mut out = String::new();

    if state.loading {
        out.push_str(LOADING);
        out.push('\n');
    }
    if state.shows_no_results() {
        out.push_str(NO_RESULTS);
        out.push('\n');
    }
    if state.results.is_empty() {
        return out;
    }

    for result in &state.results {
        render_card(&mut out, result);
    }

    let bar = render_pagination(state, window);
    if !bar.is_empty() {
        out.push_str(&bar);
        out.push('\n');
    }
    out
}

/// Render the Previous / page numbers / Next controls on one line.
///
/// The current page is shown in parentheses. Returns an empty string when
/// there are no controls to show.
pub fn render_pagination(state: &SearchState, window: &[u32]) -> String {
    let mut controls: Vec<String> = Vec::with_capacity(window.len() + 2);

    if state.has_previous() {
        controls.push("[Previous]".to_owned());
    }
    for &page in window {
        if page == state.current_page {
            controls.push(format!("({page})"));
        } else {
            controls.push(page.to_string());
        }
    }
    if state.has_next() {
        controls.push("[Next]".to_owned());
    }

    controls.join("  ")
}

fn render_card(out: &mut String, result: &SearchResult) {
    out.push_str(&format!("{}\n", result.title));
    if !result.snippet.is_empty() {
        out.push_str(&format!("    {}\n", result.snippet));
    }
    out.push_str(&format!("    {}\n\n", result.url));
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchit_client::compute_window;

    fn state_with(current: u32, total: u32, titles: &[&str]) -> SearchState {
        SearchState {
            query: "rust".into(),
            current_page: current,
            total_pages: total,
            results: titles
                .iter()
                .map(|t| SearchResult::new(*t, format!("https://{t}.example"), format!("About {t}")))
                .collect(),
            searched: true,
            loading: false,
        }
    }

    #[test]
    fn empty_state_renders_nothing() {
        assert_eq!(render_page(&SearchState::default(), &[]), "");
    }

    #[test]
    fn loading_line_while_in_flight() {
        let state = SearchState {
            searched: true,
            loading: true,
            ..Default::default()
        };
        assert_eq!(render_page(&state, &[]), "Loading...\n");
    }

    #[test]
    fn no_results_after_search() {
        let state = SearchState {
            searched: true,
            ..Default::default()
        };
        assert_eq!(render_page(&state, &[]), format!("{NO_RESULTS}\n"));
    }

    #[test]
    fn cards_show_title_snippet_and_url() {
        let state = state_with(1, 1, &["alpha"]);
        let out = render_page(&state, &compute_window(1, 1, 5));
        assert!(out.starts_with("alpha\n    About alpha\n    https://alpha.example\n"));
        assert!(out.ends_with("(1)\n"));
    }

    #[test]
    fn cards_are_separated_by_blank_line() {
        let state = state_with(1, 1, &["alpha", "beta"]);
        let out = render_page(&state, &[1]);
        assert!(out.contains("https://alpha.example\n\nbeta\n"));
    }

    #[test]
    fn card_without_snippet_skips_line() {
        let mut state = state_with(1, 1, &["alpha"]);
        state.results[0].snippet.clear();
        let out = render_page(&state, &[1]);
        assert!(out.starts_with("alpha\n    https://alpha.example\n"));
    }

    #[test]
    fn pagination_first_page() {
        let state = state_with(1, 10, &["a"]);
        let bar = render_pagination(&state, &compute_window(1, 10, 5));
        assert_eq!(bar, "(1)  2  3  4  5  [Next]");
    }

    #[test]
    fn pagination_middle_page() {
        let state = state_with(5, 10, &["a"]);
        let bar = render_pagination(&state, &compute_window(5, 10, 5));
        assert_eq!(bar, "[Previous]  3  4  (5)  6  7  [Next]");
    }

    #[test]
    fn pagination_last_page() {
        let state = state_with(10, 10, &["a"]);
        let bar = render_pagination(&state, &compute_window(10, 10, 5));
        assert_eq!(bar, "[Previous]  6  7  8  9  (10)");
    }
}
