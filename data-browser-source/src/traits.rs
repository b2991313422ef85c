use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PageRequest, PageResponse};

/// 分页数据源 Trait
///
/// Implementations fetch one page of a collection. They are stateless with respect to the
/// browser: no caching, no ordering guarantees between concurrent calls. Callers that need
/// last-request-wins semantics must sequence the results themselves.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// 数据源标识符
    fn id(&self) -> &'static str;

    /// Fetch the page described by `request`.
    ///
    /// An empty or absent category targets the whole collection; a non-empty one targets the
    /// category-scoped endpoint.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse>;
}
