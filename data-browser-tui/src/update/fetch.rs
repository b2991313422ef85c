//! 拉取结果处理

use data_browser_core::{FetchOutcome, Resolution};

use crate::i18n::t;
use crate::model::App;

/// 把后台拉取结果交给对应数据集的会话
pub fn apply(app: &mut App, outcome: FetchOutcome) {
    let FetchOutcome {
        dataset,
        seq,
        result,
    } = outcome;
    let is_current = app.current_page.dataset_id() == dataset;

    let Some(browser) = app.browser_mut(&dataset) else {
        log::warn!("Outcome for unknown dataset '{dataset}' ignored");
        return;
    };

    let applied = browser.session.apply(seq, result);
    let error = browser.session.error().map(str::to_string);
    match applied.resolution {
        Resolution::Committed => {
            browser.selected = 0;
        }
        Resolution::Failed => {
            browser.clamp_selection();
        }
        Resolution::Discarded => {
            log::debug!("[{dataset}] #{seq} superseded, discarded");
        }
    }

    if let Some(ticket) = applied.follow_up {
        app.backend.dispatch(&dataset, ticket);
    }

    if !is_current {
        return;
    }
    match applied.resolution {
        Resolution::Committed => app.clear_status(),
        Resolution::Failed => {
            let message = error.unwrap_or_else(|| t().status_bar.fetch_failed.to_string());
            show_failure(app, &message);
        }
        Resolution::Discarded => {}
    }
}

/// 在状态栏和错误弹窗中显示拉取失败
pub(super) fn show_failure(app: &mut App, message: &str) {
    let texts = t();
    app.set_status(texts.status_bar.fetch_failed);
    app.modal.show_error(texts.modal.error_title, message);
}
