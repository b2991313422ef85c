//! In-memory collection source
//!
//! Serves fixture collections with the same paging and category semantics as the REST
//! endpoints. Used for demo mode and for tests that must not touch the network.

mod fixtures;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, SourceError};
use crate::traits::RecordSource;
use crate::types::{PageRequest, PageResponse, Record};

const SOURCE_ID: &str = "memory";

/// Field used for category-scoped requests.
const CATEGORY_FIELD: &str = "category";

/// Fixture-backed source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: HashMap<String, Vec<Record>>,
    latency: Option<Duration>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source preloaded with the `users` and `products` demo collections.
    pub fn demo() -> Self {
        Self::new()
            .with_collection("users", fixtures::users())
            .with_collection("products", fixtures::products())
    }

    /// Register (or replace) a collection.
    #[must_use]
    pub fn with_collection(mut self, path: impl Into<String>, records: Vec<Record>) -> Self {
        self.collections.insert(path.into(), records);
        self
    }

    /// Delay every response, to make loading states visible.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency).filter(|d| !d.is_zero());
        self
    }

    fn page(&self, request: &PageRequest) -> Result<PageResponse> {
        let path = request.collection.path.trim_matches('/');
        let records = self
            .collections
            .get(path)
            .ok_or_else(|| SourceError::NotFound {
                source_id: SOURCE_ID.to_string(),
                collection: request.endpoint_path(),
            })?;

        let scoped: Vec<&Record> = match request.category() {
            Some(category) => records
                .iter()
                .filter(|r| r.text(CATEGORY_FIELD).as_deref() == Some(category))
                .collect(),
            None => records.iter().collect(),
        };

        let total = u32::try_from(scoped.len()).unwrap_or(u32::MAX);
        let items = scoped
            .into_iter()
            .skip(request.skip as usize)
            .take(request.limit as usize)
            .cloned()
            .collect();

        Ok(PageResponse::new(items, total, request.skip, request.limit))
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse> {
        if request.limit == 0 {
            return Err(SourceError::InvalidParameter {
                source_id: SOURCE_ID.to_string(),
                param: "limit".to_string(),
                detail: "page size must be positive".to_string(),
            });
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        log::debug!(
            "[{SOURCE_ID}] GET {}?limit={}&skip={}",
            request.endpoint_path(),
            request.limit,
            request.skip
        );
        self.page(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Collection;

    fn request(path: &str, page: u32, size: u32, category: Option<&str>) -> PageRequest {
        PageRequest::for_page(
            Collection::new(path, path),
            page,
            size,
            category.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn pages_through_users() {
        let source = MemorySource::demo();
        let first = source.fetch_page(&request("users", 1, 5, None)).await;
        let last = source.fetch_page(&request("users", 10, 5, None)).await;
        assert!(matches!(&first, Ok(p) if p.items.len() == 5 && p.total == 47));
        assert!(matches!(&last, Ok(p) if p.items.len() == 2 && p.skip == 45));
    }

    #[tokio::test]
    async fn category_scopes_total() {
        let source = MemorySource::demo();
        let page = source
            .fetch_page(&request("products", 1, 50, Some("laptops")))
            .await;
        let Ok(page) = page else {
            panic!("laptops page should load");
        };
        assert!(page.total > 0);
        assert!(page
            .items
            .iter()
            .all(|r| r.text("category").as_deref() == Some("laptops")));
    }

    #[tokio::test]
    async fn unknown_category_is_empty_not_error() {
        let source = MemorySource::demo();
        let page = source
            .fetch_page(&request("products", 1, 5, Some("boats")))
            .await;
        assert!(matches!(&page, Ok(p) if p.total == 0 && p.items.is_empty()));
    }

    #[tokio::test]
    async fn unknown_collection_is_not_found() {
        let source = MemorySource::demo();
        let page = source.fetch_page(&request("carts", 1, 5, None)).await;
        assert!(matches!(page, Err(SourceError::NotFound { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn latency_delays_response() {
        let source = MemorySource::demo().with_latency(Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        let page = source.fetch_page(&request("users", 1, 5, None)).await;
        assert!(page.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
