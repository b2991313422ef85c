//! Browser session
//!
//! Single owner of one dataset's view state and fetch state. Every mutation goes through here,
//! so sequence numbering and page resets can't drift apart.

use std::sync::Arc;

use data_browser_source::{PageResponse, Record};

use crate::error::CoreResult;
use crate::filter;
use crate::pager::{self, PageSlot};
use crate::types::DatasetConfig;

use super::fetch_state::{FetchState, FetchTicket, Resolution};
use super::view_state::{FetchIntent, Transition, ViewState};

/// Result of feeding a response back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub resolution: Resolution,
    /// Follow-up request issued when the committed total no longer covers the current page.
    pub follow_up: Option<FetchTicket>,
}

#[derive(Debug, Clone)]
pub struct BrowserSession {
    view: ViewState,
    fetch: FetchState,
}

impl BrowserSession {
    pub fn new(dataset: Arc<DatasetConfig>) -> CoreResult<Self> {
        dataset.validate()?;
        Ok(Self {
            view: ViewState::new(dataset),
            fetch: FetchState::new(),
        })
    }

    pub fn dataset(&self) -> &DatasetConfig {
        self.view.dataset()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    fn issue(&mut self, transition: Transition) -> Option<FetchTicket> {
        transition.map(|intent| self.begin(&intent))
    }

    fn begin(&mut self, intent: &FetchIntent) -> FetchTicket {
        let request = intent.to_request(&self.view.dataset().collection);
        self.fetch.begin(request)
    }

    /// Initial load of the default page.
    pub fn start(&mut self) -> FetchTicket {
        let intent = self.view.intent();
        self.begin(&intent)
    }

    pub fn set_page_size(&mut self, size: u32) -> CoreResult<Option<FetchTicket>> {
        let transition = self.view.set_page_size(size)?;
        Ok(self.issue(transition))
    }

    pub fn set_current_page(&mut self, page: u32) -> Option<FetchTicket> {
        let transition = self.view.set_current_page(page);
        self.issue(transition)
    }

    pub fn set_active_tab(&mut self, tab_id: &str) -> CoreResult<Option<FetchTicket>> {
        let transition = self.view.set_active_tab(tab_id)?;
        Ok(self.issue(transition))
    }

    pub fn set_filter(&mut self, key: &str, value: &str) -> CoreResult<Option<FetchTicket>> {
        let transition = self.view.set_filter(key, value)?;
        Ok(self.issue(transition))
    }

    pub fn clear_filters(&mut self) {
        let _ = self.view.clear_filters();
    }

    /// Previous page; no-op on the first page.
    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        let target = pager::prev_page(self.view.current_page(), self.view.total_pages())?;
        self.set_current_page(target)
    }

    /// Next page; no-op on the last page.
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        let target = pager::next_page(self.view.current_page(), self.view.total_pages())?;
        self.set_current_page(target)
    }

    pub fn first_page(&mut self) -> Option<FetchTicket> {
        self.set_current_page(1)
    }

    pub fn last_page(&mut self) -> Option<FetchTicket> {
        let last = self.view.total_pages();
        self.set_current_page(last)
    }

    /// Next page size in the configured set.
    pub fn cycle_page_size(&mut self, forward: bool) -> CoreResult<Option<FetchTicket>> {
        let size = if forward {
            self.view.next_page_size()
        } else {
            self.view.prev_page_size()
        };
        self.set_page_size(size)
    }

    /// Next tab, wrapping around. `Ok(None)` when the dataset has no tabs.
    pub fn cycle_tab(&mut self) -> CoreResult<Option<FetchTicket>> {
        let Some(next) = self.view.next_tab_id().map(str::to_string) else {
            return Ok(None);
        };
        self.set_active_tab(&next)
    }

    /// Re-issue the current request.
    pub fn refresh(&mut self) -> FetchTicket {
        let intent = self.view.refresh();
        self.begin(&intent)
    }

    /// Feed the result of request `seq` back in.
    pub fn apply(&mut self, seq: u64, result: CoreResult<PageResponse>) -> Applied {
        let result = result.map_err(|e| format!("Failed to fetch {}: {e}", self.dataset().id));
        let resolution = self.fetch.resolve(seq, result);
        let follow_up = match resolution {
            Resolution::Committed => {
                let transition = self.view.sync_total(self.fetch.total());
                self.issue(transition)
            }
            Resolution::Failed | Resolution::Discarded => None,
        };
        Applied {
            resolution,
            follow_up,
        }
    }

    pub fn dismiss_error(&mut self) {
        self.fetch.clear_error();
    }

    /// Loaded records that pass the active filters.
    pub fn visible_records(&self) -> Vec<&Record> {
        filter::filter_records(
            self.fetch.items(),
            self.view.filters(),
            &self.view.dataset().columns,
        )
    }

    pub fn total_pages(&self) -> u32 {
        self.view.total_pages()
    }

    pub fn page_window(&self) -> Vec<PageSlot> {
        pager::compute_page_window(self.view.current_page(), self.view.total_pages())
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetch.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{page_of, person};
    use crate::types;
    use data_browser_source::SourceError;

    fn session(dataset: DatasetConfig) -> BrowserSession {
        BrowserSession::new(Arc::new(dataset)).unwrap_or_else(|e| panic!("{e}"))
    }

    fn loaded_users(total: u32) -> BrowserSession {
        let mut s = session(types::users());
        let t = s.start();
        s.apply(t.seq, Ok(page_of(1..=5, total)));
        s
    }

    #[test]
    fn start_requests_first_page_with_default_size() {
        let mut s = session(types::users());
        let t = s.start();
        assert_eq!(t.request.limit, 5);
        assert_eq!(t.request.skip, 0);
        assert_eq!(t.request.category, None);
        assert!(s.is_loading());
    }

    #[test]
    fn forty_seven_records_make_ten_pages() {
        let s = loaded_users(47);
        assert_eq!(s.total_pages(), 10);
        assert_eq!(
            s.page_window(),
            vec![
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Page(3),
                PageSlot::Ellipsis,
                PageSlot::Page(10)
            ]
        );
    }

    #[test]
    fn page_size_change_on_page_three_refetches_from_zero() {
        let mut s = loaded_users(47);
        let t = s.set_current_page(3);
        assert_eq!(t.as_ref().map(|t| t.request.skip), Some(10));

        let t = s.set_page_size(10);
        let Ok(Some(ticket)) = t else {
            panic!("page size change must fetch");
        };
        assert_eq!(ticket.request.skip, 0);
        assert_eq!(ticket.request.limit, 10);
        assert_eq!(s.view().current_page(), 1);
    }

    #[test]
    fn tab_change_targets_category_endpoint() {
        let mut s = session(types::products());
        let _ = s.start();
        let Ok(Some(ticket)) = s.set_active_tab("laptops") else {
            panic!("tab change must fetch");
        };
        assert_eq!(ticket.request.endpoint_path(), "products/category/laptops");
        assert_eq!(s.view().current_page(), 1);

        let Ok(Some(back)) = s.cycle_tab() else {
            panic!("cycling tabs must fetch");
        };
        assert_eq!(back.request.endpoint_path(), "products");
    }

    #[test]
    fn filter_changes_issue_no_fetch() {
        let mut s = loaded_users(47);
        let seq = s.fetch_state().latest_seq();
        assert!(matches!(s.set_filter("firstName", "ann"), Ok(None)));
        assert_eq!(s.fetch_state().latest_seq(), seq);
    }

    #[test]
    fn visible_records_apply_name_synonyms() {
        let mut s = session(types::users());
        let t = s.start();
        let page = PageResponse::new(
            vec![
                person(1, "Ann", "Lee", "a@x.com"),
                person(2, "Bo", "Ann", "b@x.com"),
                person(3, "Cy", "Dunn", "c@x.com"),
            ],
            3,
            0,
            5,
        );
        s.apply(t.seq, Ok(page));
        let _ = s.set_filter("firstName", "ann");
        let ids: Vec<String> = s.visible_records().iter().filter_map(|r| r.text("id")).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn prev_and_next_are_noops_at_bounds() {
        let mut s = loaded_users(10);
        assert!(s.prev_page().is_none());
        assert!(s.next_page().is_some());
        assert!(s.next_page().is_none());
        assert_eq!(s.view().current_page(), 2);
    }

    #[test]
    fn reselecting_same_page_refetches() {
        let mut s = loaded_users(47);
        let before = s.fetch_state().latest_seq();
        assert!(s.set_current_page(1).is_some());
        assert!(s.fetch_state().latest_seq() > before);
    }

    #[test]
    fn failure_keeps_page_and_formats_message() {
        let mut s = loaded_users(47);
        let t = s.refresh();
        let err = CoreError::Source(SourceError::NetworkError {
            source_id: "rest".into(),
            detail: "connection refused".into(),
        });
        let applied = s.apply(t.seq, Err(err));
        assert_eq!(applied.resolution, Resolution::Failed);
        assert_eq!(
            s.error(),
            Some("Failed to fetch users: [rest] Network error: connection refused")
        );
        assert_eq!(s.visible_records().len(), 5);
        assert_eq!(s.total_pages(), 10);

        s.dismiss_error();
        assert_eq!(s.error(), None);
    }

    #[test]
    fn later_request_wins() {
        let mut s = loaded_users(47);
        let slow = s.set_current_page(2).map(|t| t.seq);
        let fast = s.set_current_page(3).map(|t| t.seq);
        let (Some(slow), Some(fast)) = (slow, fast) else {
            panic!("page changes must fetch");
        };
        assert_eq!(s.apply(fast, Ok(page_of(11..=15, 47))).resolution, Resolution::Committed);
        assert_eq!(s.apply(slow, Ok(page_of(6..=10, 47))).resolution, Resolution::Discarded);
        assert_eq!(s.visible_records()[0].text("id").as_deref(), Some("11"));
    }

    #[test]
    fn shrunken_total_triggers_follow_up() {
        let mut s = loaded_users(47);
        let t = s.last_page();
        let Some(t) = t else {
            panic!("last page must fetch");
        };
        let applied = s.apply(t.seq, Ok(page_of(1..=0, 12)));
        assert_eq!(s.view().current_page(), 3);
        assert_eq!(applied.follow_up.map(|f| f.request.skip), Some(10));
    }

    #[test]
    fn invalid_dataset_is_rejected() {
        let bad = types::users().with_page_sizes(vec![], 5);
        assert!(BrowserSession::new(Arc::new(bad)).is_err());
    }
}
