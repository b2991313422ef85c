//! 内容面板消息
//!
//! 处理数据集页面中的操作：行选择、翻页、页大小、标签、过滤

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 行选择 ==========
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 跳转到第一行
    SelectFirst,
    /// 跳转到最后一行
    SelectLast,

    // ========== 翻页 ==========
    /// 上一页（首页时无操作）
    PrevPage,
    /// 下一页（末页时无操作）
    NextPage,
    /// 第一页
    FirstPage,
    /// 最后一页
    LastPage,
    /// 打开跳页弹窗
    GoToPage,

    // ========== 页大小 / 标签 ==========
    /// 下一个页大小
    PageSizeUp,
    /// 上一个页大小
    PageSizeDown,
    /// 下一个标签
    NextTab,

    // ========== 过滤 ==========
    /// 显示/隐藏过滤栏（显示时进入编辑模式）
    ToggleFilterBar,
    /// 下一个输入框
    NextFilter,
    /// 上一个输入框
    PrevFilter,
    /// 输入字符
    FilterInput(char),
    /// 删除字符
    FilterBackspace,
    /// 退出编辑模式
    ExitFilterEdit,
    /// 清空所有过滤条件
    ClearFilters,
}
