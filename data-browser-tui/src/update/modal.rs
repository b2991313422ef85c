//! 弹窗更新逻辑

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

use super::transition;

/// 页码输入的最大位数
const MAX_PAGE_DIGITS: usize = 9;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => close(app),
        ModalMessage::Input(c) => {
            if let Some(Modal::GoToPage { input, error }) = &mut app.modal.active {
                if c.is_ascii_digit() && input.len() < MAX_PAGE_DIGITS {
                    input.push(c);
                    *error = None;
                }
            }
        }
        ModalMessage::Backspace => {
            if let Some(Modal::GoToPage { input, error }) = &mut app.modal.active {
                input.pop();
                *error = None;
            }
        }
        ModalMessage::Confirm => match &app.modal.active {
            Some(Modal::GoToPage { input, .. }) => {
                let input = input.clone();
                confirm_go_to_page(app, &input);
            }
            Some(_) => close(app),
            None => {}
        },
    }
}

/// 关闭弹窗；关闭错误弹窗时同时清除会话中的错误
fn close(app: &mut App) {
    if matches!(app.modal.active, Some(Modal::Error { .. })) {
        if let Some(browser) = app.current_browser_mut() {
            browser.session.dismiss_error();
        }
        app.clear_status();
    }
    app.modal.close();
}

fn confirm_go_to_page(app: &mut App, input: &str) {
    let total_pages = app
        .current_browser()
        .map_or(1, |b| b.session.total_pages());

    match input.parse::<u32>() {
        Ok(page) if (1..=total_pages).contains(&page) => {
            app.modal.close();
            transition(app, |b| Ok(b.session.set_current_page(page)));
        }
        _ => {
            if let Some(Modal::GoToPage { error, .. }) = &mut app.modal.active {
                *error = Some(format!(
                    "{} (1-{total_pages})",
                    t().status_bar.invalid_page
                ));
            }
        }
    }
}
