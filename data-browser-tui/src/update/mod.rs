//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 数据集页面子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod fetch;              // 后台拉取结果处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、状态迁移与请求
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     数据集页面的操作都经过 transition()：
//!
//!         transition(app, |browser| browser.session.next_page());
//!
//!     闭包返回 CoreResult<Option<FetchTicket>>：
//!         - Ok(Some(ticket))  交给 app.backend.dispatch() 在后台执行
//!         - Ok(None)          没有需要请求的数据（例如已在末页、只改了过滤条件）
//!         - Err(e)            写入状态栏
//!
//!     update 本身从不等待网络，主循环始终保持响应。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、拉取结果
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppMessage::FetchCompleted(outcome) 由 fetch::apply() 处理：
//!         - Committed   替换当前页数据，选中行回到第一行
//!         - Failed      保留上一页数据，弹出错误弹窗（仅当前页面）
//!         - Discarded   已被更新的请求取代，忽略
//!
//!     如果新的总数使当前页越界，会话会自动发出一个修正后的请求。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod fetch;
mod modal;
mod navigation;

use data_browser_core::{CoreResult, FetchTicket};

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, BrowserState};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                modal::update(app, crate::message::ModalMessage::Close);
            } else if let Some(browser) = app.current_browser_mut() {
                browser.filter_bar.editing = false;
            }
        }

        AppMessage::Refresh => {
            app.set_status(t().status_bar.refreshing);
            transition(app, |b| Ok(Some(b.session.refresh())));
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::FetchCompleted(outcome) => {
            fetch::apply(app, outcome);
        }

        AppMessage::Noop => {}
    }
}

/// 首次进入当前页面时加载数据
///
/// 页面在后台时失败的请求，切回来时补弹错误。
pub fn load_current(app: &mut App) {
    transition(app, |b| Ok(b.ensure_started()));

    let pending = app
        .current_browser()
        .filter(|b| !b.session.is_loading())
        .and_then(|b| b.session.error())
        .map(str::to_string);
    if let Some(message) = pending {
        fetch::show_failure(app, &message);
    }
}

/// 对当前数据集执行一次状态迁移，并分发产生的请求
fn transition<F>(app: &mut App, f: F)
where
    F: FnOnce(&mut BrowserState) -> CoreResult<Option<FetchTicket>>,
{
    let Some(browser) = app.current_browser_mut() else {
        return;
    };
    let dataset = browser.dataset_id().to_string();

    match f(browser) {
        Ok(Some(ticket)) => app.backend.dispatch(&dataset, ticket),
        Ok(None) => {}
        Err(e) => {
            if e.is_expected() {
                log::warn!("[{dataset}] {e}");
            } else {
                log::error!("[{dataset}] {e}");
            }
            app.set_status(e.to_string());
        }
    }
}
