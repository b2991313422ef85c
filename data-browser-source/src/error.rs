use serde::{Deserialize, Serialize};

/// Unified error type for all record source operations.
///
/// Each variant carries a `source_id` naming the source that produced it (`"rest"`,
/// `"memory"`, ...) plus variant-specific context. Variants are serializable so the
/// front end can render them as structured messages.
///
/// # Retryable Errors
///
/// The following variants are transient and may succeed when the same request is issued again:
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, broken body
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): HTTP 429
///
/// Retries only happen when the HTTP helper is configured with `max_retries > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum SourceError {
    /// A network-level error occurred.
    NetworkError {
        /// Source that produced the error.
        source_id: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Source that produced the error.
        source_id: String,
        /// Error details.
        detail: String,
    },

    /// The remote API rate limit has been exceeded.
    RateLimited {
        /// Source that produced the error.
        source_id: String,
        /// Suggested wait time in seconds, if the server sent `Retry-After`.
        retry_after: Option<u64>,
        /// Raw response body, if any.
        raw_message: Option<String>,
    },

    /// The server answered with a non-success status code.
    HttpStatus {
        /// Source that produced the error.
        source_id: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, if any.
        raw_message: Option<String>,
    },

    /// The requested collection or category does not exist.
    NotFound {
        /// Source that produced the error.
        source_id: String,
        /// Collection path that was requested.
        collection: String,
    },

    /// A request parameter is invalid (e.g. zero page size, malformed base URL).
    InvalidParameter {
        /// Source that produced the error.
        source_id: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The response body could not be decoded into a page.
    ParseError {
        /// Source that produced the error.
        source_id: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl SourceError {
    /// Whether this is expected behaviour (bad input, missing collection), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidParameter { .. } | Self::RateLimited { .. }
        )
    }

    /// Whether re-issuing the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// Identifier of the source that produced the error.
    pub fn source_id(&self) -> &str {
        match self {
            Self::NetworkError { source_id, .. }
            | Self::Timeout { source_id, .. }
            | Self::RateLimited { source_id, .. }
            | Self::HttpStatus { source_id, .. }
            | Self::NotFound { source_id, .. }
            | Self::InvalidParameter { source_id, .. }
            | Self::ParseError { source_id, .. } => source_id,
        }
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { source_id, detail } => {
                write!(f, "[{source_id}] Network error: {detail}")
            }
            Self::Timeout { source_id, detail } => {
                write!(f, "[{source_id}] Request timeout: {detail}")
            }
            Self::RateLimited {
                source_id,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{source_id}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{source_id}] Rate limited")
                }
            }
            Self::HttpStatus {
                source_id,
                status,
                raw_message,
            } => match raw_message.as_deref().filter(|m| !m.is_empty()) {
                Some(msg) => write!(f, "[{source_id}] HTTP {status}: {msg}"),
                None => write!(f, "[{source_id}] HTTP {status}"),
            },
            Self::NotFound {
                source_id,
                collection,
            } => {
                write!(f, "[{source_id}] Collection '{collection}' not found")
            }
            Self::InvalidParameter {
                source_id,
                param,
                detail,
            } => {
                write!(f, "[{source_id}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { source_id, detail } => {
                write!(f, "[{source_id}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Convenience type alias for `Result<T, SourceError>`.
pub type Result<T> = std::result::Result<T, SourceError>;
