//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use data_browser_source::SourceError;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Page size outside the configured set
    #[error("Invalid page size {size}, expected one of {allowed:?}")]
    InvalidPageSize { size: u32, allowed: Vec<u32> },

    /// Filter or lookup on a column the dataset does not define
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Filter on a column that is not filterable
    #[error("Column is not filterable: {0}")]
    ColumnNotFilterable(String),

    /// Tab id the dataset does not define
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Dataset id not registered
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Dataset definition rejected by validation
    #[error("Invalid dataset '{dataset}': {detail}")]
    InvalidDataset { dataset: String, detail: String },

    /// Source error (converting from library)
    #[error("{0}")]
    Source(#[from] SourceError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, unknown ids), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidPageSize { .. }
            | Self::UnknownColumn(_)
            | Self::ColumnNotFilterable(_)
            | Self::UnknownTab(_)
            | Self::DatasetNotFound(_) => true,
            Self::InvalidDataset { .. } => false,
            Self::Source(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
