//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：状态栏上的动作词

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 表格文本
    pub table: TableTexts,
    /// 分页栏文本
    pub pager: PagerTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub switch_panel: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub page: &'static str,
    pub first_last: &'static str,
    pub go_to: &'static str,
    pub page_size: &'static str,
    pub tab: &'static str,
    pub filter: &'static str,
    pub next_filter: &'static str,
    pub done: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
}

// ============================================================================
// 表格 / 过滤栏
// ============================================================================

pub struct TableTexts {
    /// 请求进行中时的占位行
    pub loading_row: &'static str,
    /// 过滤后为空时的占位行
    pub empty_row: &'static str,
}

// ============================================================================
// 分页栏
// ============================================================================

pub struct PagerTexts {
    /// 页大小选项后缀，如 "5 entries"
    pub entries: &'static str,
    /// 页码标签，后接 "3/10"
    pub page: &'static str,
    /// 记录总数后缀
    pub records: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub error_title: &'static str,
    pub press_to_close: &'static str,
    pub go_to_page_title: &'static str,
    pub go_to_page_prompt: &'static str,
    pub go_to_page_hint: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub refreshing: &'static str,
    pub fetch_failed: &'static str,
    pub invalid_page: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub browsing: &'static str,
    pub filtering: &'static str,
    pub switch_panel: &'static str,
    pub move_selection: &'static str,
    pub prev_next_page: &'static str,
    pub first_last_page: &'static str,
    pub go_to_page: &'static str,
    pub page_size: &'static str,
    pub next_tab: &'static str,
    pub toggle_filters: &'static str,
    pub next_filter: &'static str,
    pub leave_filter: &'static str,
    pub clear_filters: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
}
