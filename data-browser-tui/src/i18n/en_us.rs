//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, ModalTexts, NavTexts, PagerTexts, StatusBarTexts,
    TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Data Browser",
        loading: "Loading...",
    },

    hints: HintTexts {
        switch_panel: "Switch Panels",
        select: "Select",
        open: "Open",
        page: "Page",
        first_last: "First/Last",
        go_to: "Go to",
        page_size: "Size",
        tab: "Tab",
        filter: "Filter",
        next_filter: "Next Filter",
        done: "Done",
        refresh: "Refresh",
        help: "Help",
        quit: "Quit",
    },

    nav: NavTexts { title: "Datasets" },

    table: TableTexts {
        loading_row: "Loading...",
        empty_row: "No data found",
    },

    pager: PagerTexts {
        entries: "entries",
        page: "Page",
        records: "records",
    },

    modal: ModalTexts {
        error_title: "Error",
        press_to_close: "Press Esc or Enter to close",
        go_to_page_title: "Go to page",
        go_to_page_prompt: "Page number",
        go_to_page_hint: "Enter to jump, Esc to cancel",
    },

    status_bar: StatusBarTexts {
        refreshing: "Refreshing...",
        fetch_failed: "Fetch failed",
        invalid_page: "Invalid page number",
    },

    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        browsing: "Browsing",
        filtering: "Filtering",
        switch_panel: "Switch panel",
        move_selection: "Move Up/Down",
        prev_next_page: "Previous/Next page",
        first_last_page: "First/Last page",
        go_to_page: "Go to page",
        page_size: "Change page size",
        next_tab: "Next tab",
        toggle_filters: "Show filters and edit",
        next_filter: "Next filter input",
        leave_filter: "Stop editing filters",
        clear_filters: "Clear all filters",
        refresh: "Refresh",
        help: "Help",
        quit: "Quit",
        close: "Press Esc to close the help",
    },
};
