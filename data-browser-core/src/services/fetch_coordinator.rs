//! Remote fetch coordinator
//!
//! Runs issued [`FetchTicket`]s against the source. It holds no state of its own: ordering is
//! decided by the session when the outcome is applied, so outcomes may be delivered in any
//! order.

use std::sync::Arc;

use data_browser_source::PageResponse;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::state::FetchTicket;

/// Result of one ticket, tagged so it can be routed back to its session.
#[derive(Debug)]
pub struct FetchOutcome {
    pub dataset: String,
    pub seq: u64,
    pub result: CoreResult<PageResponse>,
}

/// Fetch coordinator
pub struct FetchCoordinator {
    ctx: Arc<ServiceContext>,
}

impl FetchCoordinator {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetch the page described by `ticket`.
    pub async fn load(&self, dataset: &str, ticket: FetchTicket) -> FetchOutcome {
        let FetchTicket { seq, request } = ticket;
        log::debug!(
            "[{dataset}] #{seq} fetching {} limit={} skip={}",
            request.endpoint_path(),
            request.limit,
            request.skip
        );

        let result = self
            .ctx
            .source
            .fetch_page(&request)
            .await
            .map_err(CoreError::from);

        match &result {
            Ok(page) => log::debug!(
                "[{dataset}] #{seq} received {} of {} records",
                page.items.len(),
                page.total
            ),
            Err(e) if e.is_expected() => log::warn!("[{dataset}] #{seq} fetch failed: {e}"),
            Err(e) => log::error!("[{dataset}] #{seq} fetch failed: {e}"),
        }

        FetchOutcome {
            dataset: dataset.to_string(),
            seq,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::Resolution;
    use crate::test_utils::{context_with, ScriptedSource};
    use data_browser_source::RecordSource;

    #[tokio::test]
    async fn loads_demo_page() {
        let ctx = Arc::new(crate::test_utils::create_test_context());
        let coordinator = FetchCoordinator::new(Arc::clone(&ctx));
        let mut session = ctx.new_session("users").unwrap_or_else(|e| panic!("{e}"));

        let outcome = coordinator.load("users", session.start()).await;
        assert_eq!(outcome.dataset, "users");
        let applied = session.apply(outcome.seq, outcome.result);

        assert_eq!(applied.resolution, Resolution::Committed);
        assert_eq!(session.visible_records().len(), 5);
        assert_eq!(session.total_pages(), 10);
    }

    #[tokio::test]
    async fn source_errors_are_wrapped() {
        let source = Arc::new(ScriptedSource::new());
        source.fail_next("connection reset").await;
        let ctx = Arc::new(context_with(source));
        let coordinator = FetchCoordinator::new(Arc::clone(&ctx));
        let mut session = ctx.new_session("users").unwrap_or_else(|e| panic!("{e}"));

        let outcome = coordinator.load("users", session.start()).await;
        assert!(matches!(outcome.result, Err(CoreError::Source(_))));
        let applied = session.apply(outcome.seq, outcome.result);
        assert_eq!(applied.resolution, Resolution::Failed);
        assert!(session.error().is_some_and(|e| e.contains("connection reset")));
    }

    /// Request 1 is slow, request 2 fast: 2 commits first and 1 is discarded on arrival.
    #[tokio::test(start_paused = true)]
    async fn slow_superseded_request_is_discarded() {
        let source = Arc::new(ScriptedSource::new());
        source.delay_for_limit(5, Duration::from_millis(500)).await;
        source.delay_for_limit(10, Duration::from_millis(50)).await;
        let ctx = Arc::new(context_with(Arc::clone(&source) as Arc<dyn RecordSource>));
        let coordinator = Arc::new(FetchCoordinator::new(Arc::clone(&ctx)));
        let mut session = ctx.new_session("users").unwrap_or_else(|e| panic!("{e}"));

        let slow = session.start();
        let fast = match session.set_page_size(10) {
            Ok(Some(ticket)) => ticket,
            other => panic!("page size change must fetch: {other:?}"),
        };
        let (slow_seq, fast_seq) = (slow.seq, fast.seq);

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        for ticket in [slow, fast] {
            let coordinator = Arc::clone(&coordinator);
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(coordinator.load("users", ticket).await);
            });
        }
        drop(tx);

        let mut arrivals = Vec::new();
        while let Some(outcome) = rx.recv().await {
            let seq = outcome.seq;
            let applied = session.apply(seq, outcome.result);
            arrivals.push((seq, applied.resolution));
        }

        assert_eq!(
            arrivals,
            vec![
                (fast_seq, Resolution::Committed),
                (slow_seq, Resolution::Discarded)
            ]
        );
        assert_eq!(session.visible_records().len(), 10);
        assert_eq!(session.view().page_size(), 10);
        assert!(!session.is_loading());
        assert_eq!(source.requests().await.len(), 2);
    }
}
