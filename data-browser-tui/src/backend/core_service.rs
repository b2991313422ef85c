//! 核心服务
//!
//! 封装 data-browser-core 的服务，提供给 TUI 层使用的统一接口。
//! 拉取请求在 tokio 运行时上执行，结果通过通道送回主循环。

use std::sync::Arc;

use anyhow::Result;
use data_browser_core::types::presets;
use data_browser_core::{
    BrowserSession, CoreResult, FetchCoordinator, FetchOutcome, FetchTicket, ServiceContext,
};
use data_browser_source::create_source;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;

use super::config_service::AppConfig;

/// 拉取请求分发
///
/// Update 层只负责发出请求，结果以 [`FetchOutcome`] 的形式异步回到主循环。
pub trait FetchDispatcher: Send + Sync {
    fn dispatch(&self, dataset: &str, ticket: FetchTicket);
}

/// TUI 核心服务
pub struct CoreService {
    /// 服务上下文
    ctx: Arc<ServiceContext>,
    coordinator: Arc<FetchCoordinator>,
    runtime: Handle,
    outcomes: UnboundedSender<FetchOutcome>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(
        config: &AppConfig,
        runtime: Handle,
        outcomes: UnboundedSender<FetchOutcome>,
    ) -> Result<Self> {
        // 1. 数据源
        let source = create_source(config.source_config())?;
        log::info!("Using source '{}'", source.id());

        // 2. 数据集（页大小取自配置）
        let datasets = presets()
            .into_iter()
            .map(|d| d.with_page_sizes(config.page_sizes.clone(), config.default_page_size))
            .collect();

        // 3. 服务上下文
        let ctx = Arc::new(ServiceContext::new(source, datasets)?);
        let coordinator = Arc::new(FetchCoordinator::new(Arc::clone(&ctx)));

        Ok(Self {
            ctx,
            coordinator,
            runtime,
            outcomes,
        })
    }

    /// 为每个数据集创建会话（导航顺序）
    pub fn sessions(&self) -> CoreResult<Vec<BrowserSession>> {
        self.ctx
            .datasets
            .iter()
            .map(|d| self.ctx.new_session(&d.id))
            .collect()
    }
}

impl FetchDispatcher for CoreService {
    fn dispatch(&self, dataset: &str, ticket: FetchTicket) {
        let coordinator = Arc::clone(&self.coordinator);
        let outcomes = self.outcomes.clone();
        let span = tracing::debug_span!("fetch", dataset, seq = ticket.seq);
        let dataset = dataset.to_string();
        let task = async move {
            let outcome = coordinator.load(&dataset, ticket).await;
            // 主循环已退出时接收端关闭
            if outcomes.send(outcome).is_err() {
                log::debug!("[{dataset}] outcome dropped, UI closed");
            }
        };
        self.runtime.spawn(task.instrument(span));
    }
}

#[cfg(test)]
mod tests {
    use data_browser_core::Resolution;
    use tokio::sync::mpsc;

    use super::*;

    fn demo_config() -> AppConfig {
        AppConfig {
            demo: true,
            page_sizes: vec![10, 25],
            default_page_size: 10,
            ..AppConfig::default()
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatch_delivers_outcome() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = CoreService::new(&demo_config(), Handle::current(), tx).unwrap();
        let mut sessions = service.sessions().unwrap();
        assert_eq!(sessions.len(), 2);

        let users = &mut sessions[0];
        assert_eq!(users.view().page_size(), 10);
        let ticket = users.start();
        service.dispatch("users", ticket);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.dataset, "users");
        let applied = users.apply(outcome.seq, outcome.result);
        assert_eq!(applied.resolution, Resolution::Committed);
        assert_eq!(users.fetch_state().items().len(), 10);
    }

    #[test]
    fn rejects_invalid_page_sizes() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let config = AppConfig {
            page_sizes: vec![10],
            default_page_size: 5,
            ..demo_config()
        };
        assert!(CoreService::new(&config, runtime.handle().clone(), tx).is_err());
    }
}
