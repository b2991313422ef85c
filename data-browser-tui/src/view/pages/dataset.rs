//! 数据集页面
//!
//! 自上而下：标签栏（有标签时）、过滤栏（显示时）、表格、分页栏。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::model::BrowserState;
use crate::view::components::{filter_bar, pager, table, tabs};

const TABS_HEIGHT: u16 = 1;
const FILTER_BAR_HEIGHT: u16 = 3;
const PAGER_HEIGHT: u16 = 2;

/// 渲染数据集页面
pub fn render(browser: &BrowserState, frame: &mut Frame, area: Rect) {
    let has_tabs = !browser.session.dataset().tabs.is_empty();
    let show_filters = browser.filter_bar.visible;

    let mut constraints = Vec::with_capacity(4);
    if has_tabs {
        constraints.push(Constraint::Length(TABS_HEIGHT));
    }
    if show_filters {
        constraints.push(Constraint::Length(FILTER_BAR_HEIGHT));
    }
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(PAGER_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = chunks.iter().copied();
    if has_tabs {
        if let Some(slot) = next.next() {
            tabs::render(browser, frame, slot);
        }
    }
    if show_filters {
        if let Some(slot) = next.next() {
            filter_bar::render(browser, frame, slot);
        }
    }
    if let Some(slot) = next.next() {
        table::render(browser, frame, slot);
    }
    if let Some(slot) = next.next() {
        pager::render(browser, frame, slot);
    }
}
