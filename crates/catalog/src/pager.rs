//! Pagination over the current match set
//!
//! The pager owns the `page`/`matches` pair. The visible slice is
//! always `matches[0 .. min(page * page_size, matches.len())]`.

use bookdeck_core::BookId;

/// Pagination cursor over an ordered match set
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    page: usize,
    matches: Vec<BookId>,
}

impl Pager {
    /// Creates a pager with the given page size
    ///
    /// A zero page size is clamped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
            matches: Vec::new(),
        }
    }

    /// Replaces the match set and resets the cursor to the first page
    pub fn set_matches(&mut self, matches: Vec<BookId>) {
        self.matches = matches;
        self.page = 1;
    }

    /// Returns the full match set in order
    pub fn matches(&self) -> &[BookId] {
        &self.matches
    }

    /// Returns the current page number (1-based)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the configured page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of books currently displayed
    pub fn visible_len(&self) -> usize {
        (self.page * self.page_size).min(self.matches.len())
    }

    /// Returns the currently displayed slice of the match set
    pub fn visible(&self) -> &[BookId] {
        &self.matches[..self.visible_len()]
    }

    /// Returns how many matches are not yet displayed
    pub fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.page * self.page_size)
    }

    /// Returns true if another page can be shown
    pub fn can_show_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Advances to the next page
    ///
    /// Refuses past the end; returns whether the cursor advanced.
    pub fn show_more(&mut self) -> bool {
        if !self.can_show_more() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Returns true if the match set is empty
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
