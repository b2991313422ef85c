//! HTTP helpers shared by remote sources.
//!
//! Sources build their own `RequestBuilder` (URL, query, headers) and hand it to [`HttpUtils`]
//! for sending, status classification, logging and JSON decoding.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Result, SourceError};
use crate::utils::log_sanitizer::truncate_for_log;

/// Upper bound for a server-provided `Retry-After`.
const MAX_RETRY_AFTER_SECS: u64 = 30;
/// Upper bound for exponential backoff.
const MAX_BACKOFF_MS: u64 = 10_000;

/// HTTP helper functions.
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status, body)`.
    ///
    /// Transport failures become [`SourceError::Timeout`] or [`SourceError::NetworkError`],
    /// HTTP 429 becomes [`SourceError::RateLimited`] and 502/503/504 become
    /// [`SourceError::NetworkError`]. Every other status is returned to the caller, which
    /// decides what counts as success.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_id: &str,
        method: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{source_id}] {method} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout {
                    source_id: source_id.to_string(),
                    detail: e.to_string(),
                }
            } else {
                SourceError::NetworkError {
                    source_id: source_id.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[{source_id}] Response status: {status}");

        // header must be read before the body consumes the response
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        if status == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{source_id}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(SourceError::RateLimited {
                source_id: source_id.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{source_id}] Upstream unavailable (HTTP {status})");
            return Err(SourceError::NetworkError {
                source_id: source_id.to_string(),
                detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::NetworkError {
                source_id: source_id.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{source_id}] Response body: {}", truncate_for_log(&body));

        Ok((status, body))
    }

    /// Decode a JSON body, mapping failures to [`SourceError::ParseError`].
    pub fn parse_json<T>(body: &str, source_id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{source_id}] JSON parse failed: {e}");
            log::error!("[{source_id}] Raw response: {}", truncate_for_log(body));
            SourceError::ParseError {
                source_id: source_id.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// [`execute_request`](Self::execute_request) with bounded retries.
    ///
    /// Only errors for which [`SourceError::is_retryable`] holds are retried. The delay is the
    /// server's `Retry-After` when present (capped at 30s), otherwise exponential backoff
    /// starting at 100ms and capped at 10s. `max_retries == 0` sends exactly once.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        source_id: &str,
        method: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String)> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, source_id, method, url).await;
        }

        let mut attempt = 0;
        loop {
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{source_id}] Request body is not cloneable, sending without retry");
                return Self::execute_request(request_builder, source_id, method, url).await;
            };

            match Self::execute_request(req, source_id, method, url).await {
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    attempt += 1;
                    log::warn!(
                        "[{source_id}] Attempt {attempt}/{max_retries} failed, retrying in {:.1}s: {e}",
                        delay.as_secs_f32(),
                    );
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }
}

fn retry_delay(error: &SourceError, attempt: u32) -> Duration {
    match error {
        SourceError::RateLimited {
            retry_after: Some(secs),
            ..
        } => Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS)),
        _ => backoff_delay(attempt),
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let shift = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << shift).min(MAX_BACKOFF_MS);
    Duration::from_millis(delay_ms)
}
