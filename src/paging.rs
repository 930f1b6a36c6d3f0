//! Offset pagination for list views such as payment history.

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Offset/limit window over a server-side list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Index of the first row
    pub offset: u64,

    /// Rows per page
    pub limit: u64,

    /// Total rows, once the server has reported it
    pub total: Option<u64>,
}

impl Pagination {
    /// First page with `limit` rows (at least one).
    pub fn new(limit: u64) -> Self {
        Self {
            offset: 0,
            limit: limit.max(1),
            total: None,
        }
    }

    /// Record the total reported by the server.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Check if rows exist past this page. Unknown totals assume more.
    pub fn has_more(&self) -> bool {
        match self.total {
            Some(total) => self.offset.saturating_add(self.page_size()) < total,
            None => true,
        }
    }

    /// Check if this is not the first page.
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Window for the next page. Stays put on the last page.
    pub fn next(&self) -> Self {
        if !self.has_more() {
            return *self;
        }
        Self {
            offset: self.offset.saturating_add(self.page_size()),
            ..*self
        }
    }

    /// Window for the previous page, stopping at the first.
    pub fn previous(&self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.page_size()),
            ..*self
        }
    }

    /// 1-indexed page number.
    pub fn page_number(&self) -> u64 {
        self.offset / self.page_size() + 1
    }

    /// Rows per page, treating a zero limit as one.
    pub fn page_size(&self) -> u64 {
        self.limit.max(1)
    }

    /// Number of pages, when the total is known.
    pub fn page_count(&self) -> Option<u64> {
        self.total.map(|total| total.div_ceil(self.page_size()).max(1))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
