//! Pager windowing
//!
//! Decides which page numbers a numbered pager shows. Short ranges are listed in full; longer
//! ranges always show the first and last page, a block of up to five pages around the current
//! one, and ellipses where pages are hidden.
//!
//! ```text
//! total = 10
//! current = 1   →  1 2 3 … 10
//! current = 5   →  1 … 3 4 5 6 7 … 10
//! current = 10  →  1 … 8 9 10
//! ```

use serde::Serialize;

/// Pages at or below this count are listed without ellipses.
const FULL_LIST_MAX: u32 = 7;
/// Pages shown on each side of the current page.
const SIBLINGS: u32 = 2;

/// One entry of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

/// Number of pages for `total` records at `page_size` per page, never less than 1.
pub fn total_pages(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Pager entries for `current_page` of `total_pages`.
///
/// `total_pages == 0` is treated as 1 and `current_page` is clamped into range first.
pub fn compute_page_window(current_page: u32, total_pages: u32) -> Vec<PageSlot> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    if total <= FULL_LIST_MAX {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::with_capacity(FULL_LIST_MAX as usize + 2);
    slots.push(PageSlot::Page(1));

    if current > SIBLINGS + 2 {
        slots.push(PageSlot::Ellipsis);
    }

    let start = current.saturating_sub(SIBLINGS).max(2);
    let end = (current + SIBLINGS).min(total - 1);
    slots.extend((start..=end).map(PageSlot::Page));

    if current < total - (SIBLINGS + 1) {
        slots.push(PageSlot::Ellipsis);
    }

    slots.push(PageSlot::Page(total));
    slots
}

/// Previous page, or `None` on the first page.
pub fn prev_page(current_page: u32, total_pages: u32) -> Option<u32> {
    let current = current_page.clamp(1, total_pages.max(1));
    (current > 1).then(|| current - 1)
}

/// Next page, or `None` on the last page.
pub fn next_page(current_page: u32, total_pages: u32) -> Option<u32> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    (current < total).then(|| current + 1)
}
