//! Source factory.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::providers::common::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::providers::{MemorySource, RestOptions, RestSource};
use crate::traits::RecordSource;

/// Describes which [`RecordSource`] to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SourceConfig {
    /// Remote REST endpoint.
    #[serde(rename_all = "camelCase")]
    Rest {
        base_url: String,
        #[serde(default = "default_connect_timeout")]
        connect_timeout_secs: u64,
        #[serde(default = "default_request_timeout")]
        request_timeout_secs: u64,
        #[serde(default)]
        max_retries: u32,
    },
    /// Built-in demo fixtures.
    #[serde(rename_all = "camelCase")]
    Memory {
        #[serde(default)]
        latency_ms: u64,
    },
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Creates a [`RecordSource`] from the given configuration.
///
/// The source is returned as `Arc<dyn RecordSource>` so it can be shared across fetch tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use data_browser_source::{create_source, SourceConfig};
///
/// let source = create_source(SourceConfig::Rest {
///     base_url: "https://dummyjson.com".to_string(),
///     connect_timeout_secs: 10,
///     request_timeout_secs: 15,
///     max_retries: 0,
/// }).unwrap();
/// assert_eq!(source.id(), "rest");
/// ```
pub fn create_source(config: SourceConfig) -> Result<Arc<dyn RecordSource>> {
    match config {
        SourceConfig::Rest {
            base_url,
            connect_timeout_secs,
            request_timeout_secs,
            max_retries,
        } => {
            let options = RestOptions {
                base_url,
                connect_timeout: Duration::from_secs(connect_timeout_secs),
                request_timeout: Duration::from_secs(request_timeout_secs),
                max_retries,
            };
            Ok(Arc::new(RestSource::new(options)?))
        }
        SourceConfig::Memory { latency_ms } => Ok(Arc::new(
            MemorySource::demo().with_latency(Duration::from_millis(latency_ms)),
        )),
    }
}
