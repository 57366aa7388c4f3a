//! In-memory navigation history of page URLs.
//!
//! Mirrors a browser session history: pushing truncates forward entries,
//! and moving back or forward only shifts a cursor.

use url::Url;

/// Ordered page URLs with a cursor on the current entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Url>,
    cursor: usize,
}

impl History {
    /// Start a history with a single entry.
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// The entry the cursor is on.
    pub fn current(&self) -> &Url {
        // The cursor always indexes a live entry.
        &self.entries[self.cursor]
    }

    /// Append `url` after the current entry, dropping any forward entries.
    ///
    /// Pushing a URL equal to the current entry does nothing.
    pub fn push(&mut self, url: Url) {
        if *self.current() == url {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
        tracing::trace!(len = self.entries.len(), "history push");
    }

    /// Replace the current entry without adding a new one.
    pub fn replace(&mut self, url: Url) {
        self.entries[self.cursor] = url;
    }

    /// Step back one entry, returning the new current URL.
    pub fn back(&mut self) -> Option<&Url> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one entry, returning the new current URL.
    pub fn forward(&mut self) -> Option<&Url> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Whether there is an entry behind the cursor.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is an entry ahead of the cursor.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("test URL")
    }

    #[test]
    fn starts_with_one_entry() {
        let history = History::new(url("http://localhost:3000/"));
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_moves_cursor_to_new_entry() {
        let mut history = History::new(url("http://localhost:3000/"));
        history.push(url("http://localhost:3000/?q=a&page=1"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().as_str(), "http://localhost:3000/?q=a&page=1");
    }

    #[test]
    fn push_same_url_is_noop() {
        let mut history = History::new(url("http://localhost:3000/?q=a&page=1"));
        history.push(url("http://localhost:3000/?q=a&page=1"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn back_and_forward() {
        let mut history = History::new(url("http://localhost:3000/"));
        history.push(url("http://localhost:3000/?q=a&page=1"));
        history.push(url("http://localhost:3000/?q=a&page=2"));

        assert_eq!(
            history.back().map(Url::as_str),
            Some("http://localhost:3000/?q=a&page=1")
        );
        assert_eq!(history.back().map(Url::as_str), Some("http://localhost:3000/"));
        assert!(history.back().is_none());

        assert_eq!(
            history.forward().map(Url::as_str),
            Some("http://localhost:3000/?q=a&page=1")
        );
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = History::new(url("http://localhost:3000/"));
        history.push(url("http://localhost:3000/?q=a&page=1"));
        history.push(url("http://localhost:3000/?q=a&page=2"));
        history.back();
        history.push(url("http://localhost:3000/?q=b&page=1"));

        assert_eq!(history.len(), 3);
        assert!(!history.can_go_forward());
        assert_eq!(history.current().as_str(), "http://localhost:3000/?q=b&page=1");
    }

    #[test]
    fn replace_keeps_length() {
        let mut history = History::new(url("http://localhost:3000/?q=a&page=1"));
        history.replace(url("http://localhost:3000/"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().as_str(), "http://localhost:3000/");
    }
}
