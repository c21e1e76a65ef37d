//! # Pagination
//!
//! Results are shown as a growing prefix: "show more" appends another page instead of
//! replacing the current one. [`PageCursor`] tracks how many pages are visible.
//!
//! - The window only grows within a session; it shrinks back to one page only through
//!   [`PageCursor::reset`], which the state calls on every filter, search or sort change.
//! - [`PageCursor::advance`] refuses to grow past the end of the result, so calling it
//!   when nothing is left is a no-op.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    page_size: usize,
    page_count: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageCursor {
    /// A cursor showing the first page. A zero page size is raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_count: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of entries the window may show.
    pub fn limit(&self) -> usize {
        self.page_size.saturating_mul(self.page_count)
    }

    /// The visible prefix of `result`.
    pub fn window<'a, T>(&self, result: &'a [T]) -> &'a [T] {
        &result[..self.limit().min(result.len())]
    }

    /// Whether entries remain beyond the window for a result of `total` entries.
    pub fn has_more(&self, total: usize) -> bool {
        self.limit() < total
    }

    /// Show one more page. Returns `false` (and changes nothing) if the window already
    /// covers all `total` entries.
    pub fn advance(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.page_count += 1;
        true
    }

    pub fn reset(&mut self) {
        self.page_count = 1;
    }
}
