//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, ModalTexts, NavTexts, PagerTexts, StatusBarTexts,
    TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "数据浏览器",
        loading: "加载中...",
    },

    hints: HintTexts {
        switch_panel: "切换面板",
        select: "选择",
        open: "打开",
        page: "翻页",
        first_last: "首页/末页",
        go_to: "跳转",
        page_size: "每页条数",
        tab: "标签",
        filter: "过滤",
        next_filter: "下一项",
        done: "完成",
        refresh: "刷新",
        help: "帮助",
        quit: "退出",
    },

    nav: NavTexts { title: "数据集" },

    table: TableTexts {
        loading_row: "加载中...",
        empty_row: "没有数据",
    },

    pager: PagerTexts {
        entries: "条/页",
        page: "页码",
        records: "条",
    },

    modal: ModalTexts {
        error_title: "错误",
        press_to_close: "按 Esc 或 Enter 关闭",
        go_to_page_title: "跳转到页",
        go_to_page_prompt: "页码",
        go_to_page_hint: "Enter 跳转，Esc 取消",
    },

    status_bar: StatusBarTexts {
        refreshing: "刷新中...",
        fetch_failed: "加载失败",
        invalid_page: "无效的页码",
    },

    help: HelpTexts {
        title: "帮助",
        global: "全局快捷键",
        browsing: "浏览",
        filtering: "过滤",
        switch_panel: "切换面板",
        move_selection: "上下移动",
        prev_next_page: "上一页/下一页",
        first_last_page: "首页/末页",
        go_to_page: "跳转到页",
        page_size: "切换每页条数",
        next_tab: "下一个标签",
        toggle_filters: "显示过滤栏并编辑",
        next_filter: "下一个过滤输入框",
        leave_filter: "结束编辑",
        clear_filters: "清空过滤条件",
        refresh: "刷新",
        help: "帮助",
        quit: "退出",
        close: "按 Esc 关闭帮助",
    },
};
