//! Data Browser Core Library
//!
//! The view-state reconciliation, filtering and pagination engine behind the data browser:
//!
//! - [`pager`]: which page numbers and ellipses a numbered pager shows
//! - [`filter`]: client-side per-column substring filters over the loaded page
//! - [`state`]: view state (page size, page, tab, filters), fetch lifecycle with
//!   last-request-wins sequencing, and the per-dataset [`BrowserSession`]
//! - [`services`]: the async [`FetchCoordinator`] that runs issued requests against a
//!   [`RecordSource`](data_browser_source::RecordSource)
//!
//! Nothing here touches a terminal or a runtime; front ends drive sessions and decide where
//! fetches run.

pub mod error;
pub mod filter;
pub mod pager;
pub mod services;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use filter::{apply_filters, FilterMap};
pub use pager::{compute_page_window, total_pages, PageSlot};
pub use services::{FetchCoordinator, FetchOutcome, ServiceContext};
pub use state::{Applied, BrowserSession, FetchIntent, FetchState, FetchTicket, Resolution, ViewState};
pub use types::{ColumnSpec, DatasetConfig, MatchRule, Matcher, TabSpec};
