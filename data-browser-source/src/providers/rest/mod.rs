//! REST collection source
//!
//! Talks to endpoints shaped like `GET <base>/<collection>?limit=&skip=` and
//! `GET <base>/<collection>/category/<name>?limit=&skip=`, answering
//! `{<itemsField>: [...], total, skip, limit}`.

mod http;
mod provider;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{
    create_http_client, parse_base_url, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub(crate) const SOURCE_ID: &str = "rest";

/// Connection settings for [`RestSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestOptions {
    /// Base URL, e.g. `https://dummyjson.com`.
    pub base_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Retries for transient failures. `0` disables retry.
    pub max_retries: u32,
}

impl RestOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: 0,
        }
    }
}

/// Paginated REST collection source
pub struct RestSource {
    pub(crate) client: Client,
    pub(crate) base_url: url::Url,
    pub(crate) max_retries: u32,
}

impl RestSource {
    /// Build a source, validating the base URL and constructing the HTTP client.
    pub fn new(options: RestOptions) -> Result<Self> {
        let base_url = parse_base_url(SOURCE_ID, &options.base_url)?;
        let client = create_http_client(
            SOURCE_ID,
            options.connect_timeout,
            options.request_timeout,
        )?;
        Ok(Self {
            client,
            base_url,
            max_retries: options.max_retries,
        })
    }
}
