//! Incremental reveal of long listings.

use serde::Serialize;

/// Rows shown before the first "reveal more".
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Number of listing rows currently shown.
///
/// The window grows by one page each time the end-of-list sentinel becomes
/// visible and shrinks back to one page when the listing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealWindow {
    page_size: usize,
    visible: usize,
}

impl RevealWindow {
    /// Window showing one page of `page_size` rows. A zero page size is
    /// treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The visible prefix of `items`.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(..self.visible).unwrap_or(items)
    }

    /// Whether rows are still hidden in a listing of `total`.
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Show one more page of a listing of `total` rows.
    ///
    /// Returns whether anything new became visible; once the whole listing
    /// is shown this is a no-op.
    pub fn reveal_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.visible = self.visible.saturating_add(self.page_size).min(total);
        true
    }

    /// Back to a single page.
    pub const fn reset(&mut self) {
        self.visible = self.page_size;
    }
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
