//! 数据集页面状态
//!
//! 每个数据集一份，切换页面后保留（页大小、页码、标签、过滤条件、已加载记录）。
//! 过滤输入框的文本直接取自会话中的过滤条件，不另存一份。

use data_browser_core::{BrowserSession, ColumnSpec, FetchTicket};

/// 过滤栏状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterBarState {
    /// 是否显示过滤栏（隐藏时过滤条件仍然生效）
    pub visible: bool,
    /// 是否处于编辑模式
    pub editing: bool,
    /// 当前聚焦的输入框（可过滤列中的下标）
    pub focused: usize,
}

/// 单个数据集的页面状态
#[derive(Debug, Clone)]
pub struct BrowserState {
    /// 视图状态 + 拉取状态
    pub session: BrowserSession,
    /// 表格中选中的行（过滤后的下标）
    pub selected: usize,
    /// 过滤栏
    pub filter_bar: FilterBarState,
    /// 是否已发起过首次加载
    started: bool,
}

impl BrowserState {
    pub fn new(session: BrowserSession) -> Self {
        Self {
            session,
            selected: 0,
            filter_bar: FilterBarState::default(),
            started: false,
        }
    }

    pub fn dataset_id(&self) -> &str {
        &self.session.dataset().id
    }

    /// 首次进入页面时加载默认页
    pub fn ensure_started(&mut self) -> Option<FetchTicket> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(self.session.start())
    }

    /// 可过滤的列（过滤栏输入框顺序）
    pub fn filter_columns(&self) -> Vec<&ColumnSpec> {
        self.session.dataset().filterable_columns().collect()
    }

    /// 当前聚焦输入框对应的列 key
    pub fn focused_filter_key(&self) -> Option<String> {
        self.filter_columns()
            .get(self.filter_bar.focused)
            .map(|c| c.key.clone())
    }

    /// 输入框当前文本
    pub fn filter_value(&self, key: &str) -> &str {
        self.session.view().filters().get(key).unwrap_or("")
    }

    /// 聚焦下一个输入框（循环）
    pub fn focus_next_filter(&mut self) {
        let count = self.filter_columns().len();
        if count > 0 {
            self.filter_bar.focused = (self.filter_bar.focused + 1) % count;
        }
    }

    /// 聚焦上一个输入框（循环）
    pub fn focus_prev_filter(&mut self) {
        let count = self.filter_columns().len();
        if count > 0 {
            self.filter_bar.focused = (self.filter_bar.focused + count - 1) % count;
        }
    }

    /// 当前可见行数
    pub fn visible_len(&self) -> usize {
        self.session.visible_records().len()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible_len() {
            self.selected += 1;
        }
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_len().saturating_sub(1);
    }

    /// 过滤结果变化后把选中行限制在范围内
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use data_browser_core::types::users;

    use super::*;

    fn browser() -> BrowserState {
        let session = BrowserSession::new(Arc::new(users())).unwrap();
        BrowserState::new(session)
    }

    #[test]
    fn starts_only_once() {
        let mut state = browser();
        let first = state.ensure_started();
        assert!(first.is_some());
        assert!(state.ensure_started().is_none());
    }

    #[test]
    fn filter_focus_wraps_both_ways() {
        let mut state = browser();
        let count = state.filter_columns().len();
        assert_eq!(count, 6);

        state.focus_prev_filter();
        assert_eq!(state.filter_bar.focused, count - 1);
        state.focus_next_filter();
        assert_eq!(state.filter_bar.focused, 0);
        assert_eq!(state.focused_filter_key().as_deref(), Some("id"));
    }

    #[test]
    fn filter_value_reads_from_session() {
        let mut state = browser();
        assert_eq!(state.filter_value("email"), "");
        state.session.set_filter("email", "x.com").unwrap();
        assert_eq!(state.filter_value("email"), "x.com");
    }

    #[test]
    fn selection_is_clamped_to_visible_rows() {
        let mut state = browser();
        state.selected = 3;
        state.clamp_selection();
        assert_eq!(state.selected, 0);
        state.select_next();
        assert_eq!(state.selected, 0);
    }
}
