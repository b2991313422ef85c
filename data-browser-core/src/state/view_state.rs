//! View-state store
//!
//! Canonical page size, page index, active tab and filters for one dataset, plus the rules for
//! how changing one field resets or preserves the others. Setters return the fetch they require;
//! filter changes never require one.

use std::sync::Arc;

use data_browser_source::{Collection, PageRequest};

use crate::error::{CoreError, CoreResult};
use crate::filter::FilterMap;
use crate::pager;
use crate::types::{DatasetConfig, TabSpec};

/// Remote parameters a transition wants loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchIntent {
    pub page: u32,
    pub page_size: u32,
    pub category: Option<String>,
}

impl FetchIntent {
    /// Item offset of the page.
    pub fn skip(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    pub fn to_request(&self, collection: &Collection) -> PageRequest {
        PageRequest {
            collection: collection.clone(),
            limit: self.page_size,
            skip: self.skip(),
            category: self.category.clone(),
        }
    }
}

/// Outcome of a view-state transition: the fetch it requires, if any.
pub type Transition = Option<FetchIntent>;

#[derive(Debug, Clone)]
pub struct ViewState {
    dataset: Arc<DatasetConfig>,
    page_size: u32,
    current_page: u32,
    active_tab: usize,
    total: u32,
    filters: FilterMap,
}

impl ViewState {
    /// Fresh state: default page size, page 1, first tab, no filters.
    pub fn new(dataset: Arc<DatasetConfig>) -> Self {
        Self {
            page_size: dataset.default_page_size,
            dataset,
            current_page: 1,
            active_tab: 0,
            total: 0,
            filters: FilterMap::new(),
        }
    }

    pub fn dataset(&self) -> &DatasetConfig {
        &self.dataset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Last committed total.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn filters(&self) -> &FilterMap {
        &self.filters
    }

    pub fn active_tab(&self) -> Option<&TabSpec> {
        self.dataset.tabs.get(self.active_tab)
    }

    /// Category of the active tab; `None` when the dataset has no tabs or the tab is "all".
    pub fn category(&self) -> Option<&str> {
        self.active_tab().and_then(|t| t.category.as_deref())
    }

    /// `max(1, ceil(total / page_size))`, recomputed on every call.
    pub fn total_pages(&self) -> u32 {
        pager::total_pages(self.total, self.page_size)
    }

    /// Parameters of the page currently selected.
    pub fn intent(&self) -> FetchIntent {
        FetchIntent {
            page: self.current_page,
            page_size: self.page_size,
            category: self.category().map(str::to_string),
        }
    }

    /// Change page size and go back to page 1.
    pub fn set_page_size(&mut self, size: u32) -> CoreResult<Transition> {
        if !self.dataset.page_sizes.contains(&size) {
            return Err(CoreError::InvalidPageSize {
                size,
                allowed: self.dataset.page_sizes.clone(),
            });
        }
        self.page_size = size;
        self.current_page = 1;
        Ok(Some(self.intent()))
    }

    /// Select a page, clamped to `1..=total_pages`. Re-selecting the current page reloads it.
    pub fn set_current_page(&mut self, page: u32) -> Transition {
        self.current_page = page.clamp(1, self.total_pages());
        Some(self.intent())
    }

    /// Select a tab by id and go back to page 1.
    pub fn set_active_tab(&mut self, tab_id: &str) -> CoreResult<Transition> {
        let index = self
            .dataset
            .tab_index(tab_id)
            .ok_or_else(|| CoreError::UnknownTab(tab_id.to_string()))?;
        self.active_tab = index;
        self.current_page = 1;
        Ok(Some(self.intent()))
    }

    /// Set or clear a column filter. Never requires a fetch.
    pub fn set_filter(&mut self, key: &str, value: &str) -> CoreResult<Transition> {
        self.filters.set(&self.dataset.columns, key, value)?;
        Ok(None)
    }

    pub fn clear_filters(&mut self) -> Transition {
        self.filters.clear();
        None
    }

    /// Reload the current page unchanged.
    pub fn refresh(&self) -> FetchIntent {
        self.intent()
    }

    /// Adopt the total from a committed page.
    ///
    /// If the collection shrank below the current page, the page is clamped and the clamped
    /// page must be loaded.
    pub fn sync_total(&mut self, total: u32) -> Transition {
        self.total = total;
        let last = self.total_pages();
        if self.current_page > last {
            self.current_page = last;
            return Some(self.intent());
        }
        None
    }

    /// Page size following the current one in the configured set, wrapping around.
    pub fn next_page_size(&self) -> u32 {
        cycle(&self.dataset.page_sizes, self.page_size, true)
    }

    /// Page size preceding the current one in the configured set, wrapping around.
    pub fn prev_page_size(&self) -> u32 {
        cycle(&self.dataset.page_sizes, self.page_size, false)
    }

    /// Id of the tab after the active one, wrapping around.
    pub fn next_tab_id(&self) -> Option<&str> {
        let tabs = &self.dataset.tabs;
        if tabs.is_empty() {
            return None;
        }
        tabs.get((self.active_tab + 1) % tabs.len())
            .map(|t| t.id.as_str())
    }
}

fn cycle(options: &[u32], current: u32, forward: bool) -> u32 {
    let Some(pos) = options.iter().position(|&s| s == current) else {
        return options.first().copied().unwrap_or(current);
    };
    let len = options.len();
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    fn products_view() -> ViewState {
        ViewState::new(Arc::new(types::products()))
    }

    fn loaded(mut view: ViewState, total: u32) -> ViewState {
        let _ = view.sync_total(total);
        view
    }

    #[test]
    fn defaults() {
        let view = products_view();
        assert_eq!(view.page_size(), 5);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.active_tab().map(|t| t.id.as_str()), Some("all"));
        assert_eq!(view.category(), None);
        assert_eq!(view.total_pages(), 1);
    }

    #[test]
    fn page_size_change_resets_page_and_fetches_from_start() {
        let mut view = loaded(products_view(), 47);
        let _ = view.set_current_page(3);
        assert_eq!(view.current_page(), 3);

        let intent = view.set_page_size(10);
        assert!(matches!(&intent, Ok(Some(i)) if i.page == 1 && i.page_size == 10 && i.skip() == 0));
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn page_size_outside_set_is_rejected() {
        let mut view = products_view();
        assert!(matches!(
            view.set_page_size(7),
            Err(CoreError::InvalidPageSize { size: 7, .. })
        ));
        assert_eq!(view.page_size(), 5);
    }

    #[test]
    fn request_carries_item_offset_of_intent() {
        let mut view = loaded(products_view(), 47);
        let intent = view.set_current_page(3).unwrap();
        let request = intent.to_request(&view.dataset().collection);
        assert_eq!(request.skip, intent.skip());
        assert_eq!(request.skip, 10);
        assert_eq!(request.limit, 5);
        assert_eq!(request.category, None);
    }

    #[test]
    fn tab_change_resets_page_and_sets_category() {
        let mut view = loaded(products_view(), 100);
        let _ = view.set_current_page(4);
        let intent = view.set_active_tab("laptops");
        assert!(matches!(
            &intent,
            Ok(Some(i)) if i.page == 1 && i.category.as_deref() == Some("laptops")
        ));
        assert_eq!(view.current_page(), 1);
        assert!(matches!(view.set_active_tab("boats"), Err(CoreError::UnknownTab(_))));
    }

    #[test]
    fn current_page_is_clamped_and_always_fetches() {
        let mut view = loaded(products_view(), 47);
        assert_eq!(view.set_current_page(99).map(|i| i.page), Some(10));
        assert_eq!(view.set_current_page(0).map(|i| i.page), Some(1));
        assert!(view.set_current_page(1).is_some());
    }

    #[test]
    fn filters_never_fetch_or_touch_paging() {
        let mut view = loaded(products_view(), 47);
        let _ = view.set_current_page(2);
        assert!(matches!(view.set_filter("title", "phone"), Ok(None)));
        assert_eq!(view.current_page(), 2);
        assert_eq!(view.page_size(), 5);
        assert_eq!(view.filters().get("title"), Some("phone"));
    }

    #[test]
    fn shrinking_total_clamps_current_page() {
        let mut view = loaded(products_view(), 47);
        let _ = view.set_current_page(10);
        let follow_up = view.sync_total(12);
        assert_eq!(view.current_page(), 3);
        assert_eq!(follow_up.map(|i| i.page), Some(3));
        assert!(view.sync_total(12).is_none());
    }

    #[test]
    fn page_size_and_tab_cycle() {
        let view = products_view();
        assert_eq!(view.next_page_size(), 10);
        assert_eq!(view.prev_page_size(), 50);
        assert_eq!(view.next_tab_id(), Some("laptops"));

        let users = ViewState::new(Arc::new(types::users()));
        assert_eq!(users.next_tab_id(), None);
        assert_eq!(users.category(), None);
    }
}
