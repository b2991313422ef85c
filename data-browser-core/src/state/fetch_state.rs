//! Fetch state machine
//!
//! ```text
//! idle ──begin──▶ loading ──resolve(latest, Ok)──▶ fulfilled
//!                    │
//!                    └──resolve(latest, Err)──▶ rejected (last good page kept)
//!
//! resolve(older seq, _) ──▶ discarded, nothing changes
//! ```
//!
//! Every request gets a sequence number when it is issued. Only the latest issued sequence may
//! commit, regardless of the order in which responses arrive.

use data_browser_source::{PageRequest, PageResponse, Record};

/// A request that has been issued and is awaiting its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: PageRequest,
}

/// What happened to a resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Items and total were replaced.
    Committed,
    /// Error recorded; items and total kept.
    Failed,
    /// A newer request was issued since; result dropped.
    Discarded,
}

#[derive(Debug, Clone, Default)]
pub struct FetchState {
    loading: bool,
    error: Option<String>,
    items: Vec<Record>,
    total: u32,
    latest_seq: u64,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a request: sets `loading`, clears the error and supersedes any in-flight request.
    pub fn begin(&mut self, request: PageRequest) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            seq: self.latest_seq,
            request,
        }
    }

    /// Apply the result of request `seq`.
    pub fn resolve(&mut self, seq: u64, result: Result<PageResponse, String>) -> Resolution {
        if seq != self.latest_seq {
            return Resolution::Discarded;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.error = None;
                Resolution::Committed
            }
            Err(message) => {
                self.error = Some(message);
                Resolution::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Sequence number of the most recently issued request (0 before the first).
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }
}
