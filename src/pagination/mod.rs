//! Offset pagination arithmetic
//!
//! Tracks the window the driver is currently fetching: offset, 0-based
//! page index, and the authoritative total result count once the first
//! successful response has reported it. The total starts unknown
//! (`None`) so the loop body always runs at least once to discover it.

/// Tracks pagination state during one run
#[derive(Debug, Clone)]
pub struct PageWindow {
    /// Zero-based index of the first result in the next page to fetch
    pub offset: u64,
    /// Zero-based index of the next page to fetch
    pub page_index: u64,
    /// Results per page
    pub page_size: u64,
    total: Option<u64>,
}

impl PageWindow {
    /// Create a window at offset 0 with the given page size
    pub fn new(page_size: u64) -> Self {
        Self {
            offset: 0,
            page_index: 0,
            page_size,
            total: None,
        }
    }

    /// The server-reported total, if the first page has arrived
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Record the authoritative total from a page response
    pub fn record_total(&mut self, total: u64) {
        self.total = Some(total);
    }

    /// Whether another page must be fetched
    ///
    /// True until the discovered total is covered; always true before the
    /// first page has reported a total.
    pub fn has_more(&self) -> bool {
        self.total.is_none_or(|total| self.offset < total)
    }

    /// Advance to the next page after a successful persist
    pub fn advance(&mut self) {
        self.offset += self.page_size;
        self.page_index += 1;
    }
}

/// Cumulative results persisted once `page_index` has been written
///
/// The last page is typically partial, so the raw arithmetic is clamped
/// to the true total.
pub fn records_persisted(page_index: u64, page_size: u64, total: u64) -> u64 {
    total.min((page_index + 1) * page_size)
}
