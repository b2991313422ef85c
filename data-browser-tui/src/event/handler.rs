//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端上会重复触发）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 编辑过滤条件时，可打印字符都是输入
    if app.is_editing_filters() {
        return handle_filter_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        _ if DefaultKeymap::NAV_UP.matches(&key) => NavigationMessage::SelectPrevious,
        _ if DefaultKeymap::NAV_DOWN.matches(&key) => NavigationMessage::SelectNext,
        _ if DefaultKeymap::NAV_CONFIRM.matches(&key) => NavigationMessage::Confirm,
        KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

/// 处理数据集页面的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    let bindings = [
        (DefaultKeymap::PREV_PAGE, ContentMessage::PrevPage),
        (DefaultKeymap::NEXT_PAGE, ContentMessage::NextPage),
        (DefaultKeymap::FIRST_PAGE, ContentMessage::FirstPage),
        (DefaultKeymap::LAST_PAGE, ContentMessage::LastPage),
        (DefaultKeymap::GO_TO_PAGE, ContentMessage::GoToPage),
        (DefaultKeymap::PAGE_SIZE_UP, ContentMessage::PageSizeUp),
        (DefaultKeymap::PAGE_SIZE_UP_ALT, ContentMessage::PageSizeUp),
        (DefaultKeymap::PAGE_SIZE_DOWN, ContentMessage::PageSizeDown),
        (DefaultKeymap::NEXT_TAB, ContentMessage::NextTab),
        (DefaultKeymap::TOGGLE_FILTERS, ContentMessage::ToggleFilterBar),
        (DefaultKeymap::CLEAR_FILTERS, ContentMessage::ClearFilters),
    ];
    if let Some((_, msg)) = bindings.into_iter().find(|(b, _)| b.matches(&key)) {
        return AppMessage::Content(msg);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Char('h') => ContentMessage::PrevPage,
        KeyCode::Char('l') => ContentMessage::NextPage,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理过滤栏编辑模式的按键
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::CLEAR_FILTERS.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearFilters);
    }

    let msg = match key.code {
        KeyCode::Esc | KeyCode::Enter => ContentMessage::ExitFilterEdit,
        KeyCode::BackTab => ContentMessage::PrevFilter,
        _ if DefaultKeymap::NEXT_FILTER.matches(&key) => ContentMessage::NextFilter,
        KeyCode::Backspace => ContentMessage::FilterBackspace,
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            ContentMessage::FilterInput(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match modal {
        Modal::Help => {
            if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
                AppMessage::Modal(ModalMessage::Close)
            } else {
                AppMessage::Noop
            }
        }
        Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Modal::GoToPage { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(c) if c.is_ascii_digit() => AppMessage::Modal(ModalMessage::Input(c)),
            _ => AppMessage::Noop,
        },
    }
}
