//! Pure pagination math: which page-number controls to show.

use std::ops::RangeInclusive;

/// Visible run of page numbers, derived from the current page, the total
/// page count and the configured window size. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: u32,
    end: u32,
}

impl PageWindow {
    /// Compute the window for `current` out of `total` pages, showing at
    /// most `size` controls.
    ///
    /// The window starts `size / 2` pages before `current`, is pulled back
    /// when it would run past `total`, and never starts below 1; it ends at
    /// `min(total, start + size - 1)`. A `size` of 0 is treated as 1. When
    /// `total` is 0 the window is empty.
    pub fn new(current: u32, total: u32, size: u32) -> Self {
        let size = size.max(1);
        let start = current
            .saturating_sub(size / 2)
            .min(total.saturating_add(1).saturating_sub(size))
            .max(1);
        let end = total.min(start.saturating_add(size - 1));
        Self { start, end }
    }

    /// First page in the window.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last page in the window.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// `true` when no page-number controls should be shown.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of page-number controls in the window.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    /// Whether `page` is one of the visible controls.
    pub fn contains(&self, page: u32) -> bool {
        self.pages().contains(&page)
    }

    /// The visible pages as an inclusive range.
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl IntoIterator for PageWindow {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

/// Ordered page numbers to render for `current` out of `total` pages.
///
/// Returns an empty vector when `total` is 0.
pub fn compute_window(current: u32, total: u32, size: u32) -> Vec<u32> {
    PageWindow::new(current, total, size).into_iter().collect()
}

/// Clamp a page into `[1, total]`, or to 1 when there are no pages.
pub fn clamp_page(page: u32, total: u32) -> u32 {
    page.clamp(1, total.max(1))
}

/// Parse a one-based page number.
///
/// Returns `None` for anything that is not an integer `>= 1`.
pub fn parse_one_based_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}
