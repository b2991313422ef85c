//! 测试辅助模块
//!
//! 提供 fixture 记录、可编排的 mock 数据源和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use data_browser_source::{
    Collection, MemorySource, PageRequest, PageResponse, Record, RecordSource, SourceError,
};
use serde_json::json;
use tokio::sync::RwLock;

use crate::services::ServiceContext;
use crate::types::{self, ColumnSpec};

// ===== Fixtures =====

pub fn person(id: u32, first: &str, last: &str, email: &str) -> Record {
    Record::from_value(json!({
        "id": id,
        "firstName": first,
        "lastName": last,
        "email": email,
        "gender": if id % 2 == 0 { "male" } else { "female" },
    }))
    .unwrap_or_else(|| panic!("fixture person {id} must have an id"))
}

pub fn users_columns() -> Vec<ColumnSpec> {
    types::users().columns
}

pub fn users_request(page: u32, size: u32) -> PageRequest {
    PageRequest::for_page(Collection::new("users", "users"), page, size, None)
}

/// Page containing people with the given ids.
pub fn page_of(ids: RangeInclusive<u32>, total: u32) -> PageResponse {
    let skip = ids.start().saturating_sub(1);
    let items: Vec<Record> = ids
        .map(|id| person(id, &format!("First{id}"), &format!("Last{id}"), "p@x.com"))
        .collect();
    let limit = u32::try_from(items.len()).unwrap_or(0);
    PageResponse::new(items, total, skip, limit)
}

// ===== ScriptedSource =====

/// Mock source over 47 people with per-page-size delays and injectable failures.
pub struct ScriptedSource {
    records: Vec<Record>,
    delays: RwLock<HashMap<u32, Duration>>,
    failures: RwLock<VecDeque<String>>,
    requests: RwLock<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            records: (1..=47)
                .map(|id| person(id, &format!("First{id}"), &format!("Last{id}"), "p@x.com"))
                .collect(),
            delays: RwLock::new(HashMap::new()),
            failures: RwLock::new(VecDeque::new()),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Delay every request with `limit` by `delay`.
    pub async fn delay_for_limit(&self, limit: u32, delay: Duration) {
        self.delays.write().await.insert(limit, delay);
    }

    /// Fail the next request with a network error.
    pub async fn fail_next(&self, detail: &str) {
        self.failures.write().await.push_back(detail.to_string());
    }

    pub async fn requests(&self) -> Vec<PageRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    fn id(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_page(&self, request: &PageRequest) -> data_browser_source::Result<PageResponse> {
        self.requests.write().await.push(request.clone());

        let delay = self.delays.read().await.get(&request.limit).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(detail) = self.failures.write().await.pop_front() {
            return Err(SourceError::NetworkError {
                source_id: "scripted".to_string(),
                detail,
            });
        }

        let items = self
            .records
            .iter()
            .skip(request.skip as usize)
            .take(request.limit as usize)
            .cloned()
            .collect();
        let total = u32::try_from(self.records.len()).unwrap_or(0);
        Ok(PageResponse::new(items, total, request.skip, request.limit))
    }
}

// ===== Factories =====

/// Context over the demo memory source and the built-in datasets.
pub fn create_test_context() -> ServiceContext {
    context_with(Arc::new(MemorySource::demo()))
}

pub fn context_with(source: Arc<dyn RecordSource>) -> ServiceContext {
    ServiceContext::new(source, types::presets()).unwrap_or_else(|e| panic!("{e}"))
}
