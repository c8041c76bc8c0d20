//! Highlighted row of the product table.

use super::constants::PAGE_SIZE;

/// Cursor over the visible rows.
///
/// The row count is refreshed after every session action; the cursor is
/// clamped then so it never points past the filtered result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSelection {
    index: usize,
    len: usize,
}

impl RowSelection {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// New row count; pulls the cursor back onto the last row if needed.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(self.last());
    }

    /// Highlight a row by position. Out-of-range positions are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.index = (self.index + 1).min(self.last());
    }

    pub fn page_up(&mut self) {
        self.index = self.index.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.index = (self.index + PAGE_SIZE).min(self.last());
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last_row(&mut self) {
        self.index = self.last();
    }

    const fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }
}
