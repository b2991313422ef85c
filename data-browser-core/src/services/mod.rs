//! 业务逻辑服务层

mod fetch_coordinator;

pub use fetch_coordinator::{FetchCoordinator, FetchOutcome};

use std::sync::Arc;

use data_browser_source::RecordSource;

use crate::error::{CoreError, CoreResult};
use crate::state::BrowserSession;
use crate::types::DatasetConfig;

/// 服务上下文 - 持有所有依赖
///
/// 前端创建此上下文，并注入数据源与数据集定义。
pub struct ServiceContext {
    /// 分页数据源
    pub source: Arc<dyn RecordSource>,
    /// 已注册的数据集（按导航顺序）
    pub datasets: Vec<Arc<DatasetConfig>>,
}

impl ServiceContext {
    /// 创建服务上下文，校验所有数据集定义
    pub fn new(source: Arc<dyn RecordSource>, datasets: Vec<DatasetConfig>) -> CoreResult<Self> {
        for dataset in &datasets {
            dataset.validate()?;
        }
        Ok(Self {
            source,
            datasets: datasets.into_iter().map(Arc::new).collect(),
        })
    }

    /// 按 id 获取数据集
    pub fn dataset(&self, id: &str) -> CoreResult<Arc<DatasetConfig>> {
        self.datasets
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| CoreError::DatasetNotFound(id.to_string()))
    }

    /// 为数据集创建新的浏览会话
    pub fn new_session(&self, id: &str) -> CoreResult<BrowserSession> {
        BrowserSession::new(self.dataset(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;
    use crate::types;

    #[test]
    fn resolves_registered_datasets() {
        let ctx = create_test_context();
        assert!(ctx.dataset("users").is_ok());
        assert!(ctx.new_session("products").is_ok());
        assert!(matches!(
            ctx.dataset("carts"),
            Err(CoreError::DatasetNotFound(_))
        ));
    }

    #[test]
    fn rejects_invalid_dataset() {
        let source = Arc::new(data_browser_source::MemorySource::demo());
        let bad = types::products().with_page_sizes(vec![10], 5);
        assert!(ServiceContext::new(source, vec![bad]).is_err());
    }
}
