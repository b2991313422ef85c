//! 内容面板更新逻辑

use crate::message::ContentMessage;
use crate::model::{App, BrowserState};

use super::transition;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 行选择 ==========
        ContentMessage::SelectPrevious => with_browser(app, BrowserState::select_previous),
        ContentMessage::SelectNext => with_browser(app, BrowserState::select_next),
        ContentMessage::SelectFirst => with_browser(app, |b| b.selected = 0),
        ContentMessage::SelectLast => with_browser(app, BrowserState::select_last),

        // ========== 翻页 ==========
        ContentMessage::PrevPage => transition(app, |b| Ok(b.session.prev_page())),
        ContentMessage::NextPage => transition(app, |b| Ok(b.session.next_page())),
        ContentMessage::FirstPage => transition(app, |b| Ok(b.session.first_page())),
        ContentMessage::LastPage => transition(app, |b| Ok(b.session.last_page())),
        ContentMessage::GoToPage => {
            if app.current_browser().is_some() {
                app.modal.show_go_to_page();
            }
        }

        // ========== 页大小 / 标签 ==========
        ContentMessage::PageSizeUp => transition(app, |b| b.session.cycle_page_size(true)),
        ContentMessage::PageSizeDown => transition(app, |b| b.session.cycle_page_size(false)),
        ContentMessage::NextTab => transition(app, |b| b.session.cycle_tab()),

        // ========== 过滤 ==========
        ContentMessage::ToggleFilterBar => with_browser(app, |b| {
            if b.filter_bar.visible {
                b.filter_bar.visible = false;
                b.filter_bar.editing = false;
            } else {
                b.filter_bar.visible = true;
                b.filter_bar.editing = true;
            }
        }),
        ContentMessage::NextFilter => with_browser(app, BrowserState::focus_next_filter),
        ContentMessage::PrevFilter => with_browser(app, BrowserState::focus_prev_filter),
        ContentMessage::ExitFilterEdit => with_browser(app, |b| b.filter_bar.editing = false),
        ContentMessage::FilterInput(c) => edit_filter(app, |value| value.push(c)),
        ContentMessage::FilterBackspace => edit_filter(app, |value| {
            value.pop();
        }),
        ContentMessage::ClearFilters => with_browser(app, |b| {
            b.session.clear_filters();
            b.clamp_selection();
        }),
    }
}

/// 对当前数据集执行不发请求的修改
fn with_browser<F>(app: &mut App, f: F)
where
    F: FnOnce(&mut BrowserState),
{
    if let Some(browser) = app.current_browser_mut() {
        f(browser);
    }
}

/// 修改聚焦输入框的文本（过滤只作用于已加载的数据，不发请求）
fn edit_filter<F>(app: &mut App, edit: F)
where
    F: FnOnce(&mut String),
{
    transition(app, |b| {
        let Some(key) = b.focused_filter_key() else {
            return Ok(None);
        };
        let mut value = b.filter_value(&key).to_string();
        edit(&mut value);
        let ticket = b.session.set_filter(&key, &value)?;
        b.clamp_selection();
        Ok(ticket)
    });
}
