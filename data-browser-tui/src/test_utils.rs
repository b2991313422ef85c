//! 测试辅助

use std::sync::{Arc, Mutex};

use data_browser_core::types::presets;
use data_browser_core::{BrowserSession, FetchOutcome, FetchTicket};
use data_browser_source::{PageResponse, Record};
use serde_json::json;

use crate::backend::FetchDispatcher;
use crate::message::AppMessage;
use crate::model::App;

/// 记录分发的请求，不实际执行
#[derive(Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<(String, FetchTicket)>>,
}

impl RecordingDispatcher {
    /// 取出并清空已记录的请求
    pub fn take(&self) -> Vec<(String, FetchTicket)> {
        self.sent
            .lock()
            .map(|mut sent| std::mem::take(&mut *sent))
            .unwrap_or_default()
    }
}

impl FetchDispatcher for RecordingDispatcher {
    fn dispatch(&self, dataset: &str, ticket: FetchTicket) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((dataset.to_string(), ticket));
        }
    }
}

/// 使用预置数据集（默认页大小 5）的 App
pub fn test_app() -> (App, Arc<RecordingDispatcher>) {
    let recorder = Arc::new(RecordingDispatcher::default());
    let backend: Arc<dyn FetchDispatcher> = recorder.clone();
    let sessions = presets()
        .into_iter()
        .map(|d| BrowserSession::new(Arc::new(d)).unwrap())
        .collect();
    (App::new(sessions, backend), recorder)
}

/// 按请求的 skip/limit 生成一页用户记录，id 从 1 开始
pub fn respond(dataset: &str, ticket: &FetchTicket, total: u32) -> AppMessage {
    let request = &ticket.request;
    let end = (request.skip + request.limit).min(total);
    let items: Vec<Record> = (request.skip + 1..=end)
        .filter_map(|id| {
            Record::from_value(json!({
                "id": id,
                "firstName": format!("First{id}"),
                "lastName": format!("Last{id}"),
                "email": format!("user{id}@example.com"),
            }))
        })
        .collect();

    AppMessage::FetchCompleted(FetchOutcome {
        dataset: dataset.to_string(),
        seq: ticket.seq,
        result: Ok(PageResponse::new(items, total, request.skip, request.limit)),
    })
}
