//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Content,                     // 启动后直接浏览第一个数据集
//!     navigation: NavigationState{
//!         items: [Users , Products],
//!         selected = 0
//!     },
//!     current_page = Page::Users,
//!     status_message = None,
//!     browsers: [users 会话 , products 会话],          // 每个数据集一份，互不影响
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }
//!     while let Ok(outcome) = outcomes.try_recv() {   // 先收取后台完成的请求
//!         update::update(&mut app , FetchCompleted(outcome))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//! }
//!
//! 请求在 tokio 运行时中执行，主循环本身从不阻塞在网络上；
//! 最迟 100ms 后结果就会被收取并重绘。

use std::time::Duration;

use anyhow::Result;
use data_browser_core::FetchOutcome;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 输入轮询间隔
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    outcomes: &mut UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取已完成的请求
        drain_outcomes(app, outcomes);

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 把通道中已到达的结果全部交给 update
fn drain_outcomes(app: &mut App, outcomes: &mut UnboundedReceiver<FetchOutcome>) {
    while let Ok(outcome) = outcomes.try_recv() {
        update::update(app, AppMessage::FetchCompleted(outcome));
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::test_utils::{respond, test_app};

    #[test]
    fn drains_every_pending_outcome() {
        let (mut app, recorder) = test_app();
        update::load_current(&mut app);
        let (_, ticket) = recorder.take().remove(0);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let AppMessage::FetchCompleted(outcome) = respond("users", &ticket, 12) else {
            panic!("respond builds a FetchCompleted message");
        };
        tx.send(outcome).unwrap();

        drain_outcomes(&mut app, &mut rx);

        let browser = app.current_browser().unwrap();
        assert!(!browser.session.is_loading());
        assert_eq!(browser.session.view().total(), 12);
        assert!(rx.try_recv().is_err());
    }
}
