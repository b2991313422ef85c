//! REST `RecordSource` trait 实现

use async_trait::async_trait;

use crate::error::{Result, SourceError};
use crate::traits::RecordSource;
use crate::types::{PageRequest, PageResponse};

use super::{RestSource, SOURCE_ID};

#[async_trait]
impl RecordSource for RestSource {
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
        self.get_page(request).await
    }
}
