//! 应用主消息枚举

use data_browser_core::FetchOutcome;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回（关闭弹窗 / 退出过滤编辑）
    GoBack,

    /// 重新请求当前页
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 后台拉取完成
    FetchCompleted(FetchOutcome),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
