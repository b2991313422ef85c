//! 应用主状态结构

use std::sync::Arc;

use data_browser_core::BrowserSession;

use super::{BrowserState, FocusPanel, ModalState, NavigationState, Page};
use crate::backend::FetchDispatcher;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 各数据集页面状态（导航顺序）
    pub browsers: Vec<BrowserState>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 拉取请求分发
    pub backend: Arc<dyn FetchDispatcher>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(sessions: Vec<BrowserSession>, backend: Arc<dyn FetchDispatcher>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Content,
            navigation: NavigationState::new(),
            current_page: Page::default(),
            status_message: None,
            browsers: sessions.into_iter().map(BrowserState::new).collect(),
            modal: ModalState::new(),
            backend,
        }
    }

    /// 当前页面的数据集状态
    pub fn current_browser(&self) -> Option<&BrowserState> {
        self.browser(self.current_page.dataset_id())
    }

    pub fn current_browser_mut(&mut self) -> Option<&mut BrowserState> {
        let id = self.current_page.dataset_id();
        self.browser_mut(id)
    }

    pub fn browser(&self, dataset: &str) -> Option<&BrowserState> {
        self.browsers.iter().find(|b| b.dataset_id() == dataset)
    }

    pub fn browser_mut(&mut self, dataset: &str) -> Option<&mut BrowserState> {
        self.browsers.iter_mut().find(|b| b.dataset_id() == dataset)
    }

    /// 当前页面是否在编辑过滤条件
    pub fn is_editing_filters(&self) -> bool {
        self.focus.is_content()
            && self
                .current_browser()
                .is_some_and(|b| b.filter_bar.editing)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
