//! # data-browser-source
//!
//! Paginated collection sources for the data browser.
//!
//! ## Sources
//!
//! | Source | Backing | Notes |
//! |--------|---------|-------|
//! | [`RestSource`] | HTTP (`reqwest`) | `GET <base>/<collection>?limit=&skip=` |
//! | [`MemorySource`] | in-process fixtures | demo mode, offline tests |
//!
//! Both answer the same question: given a collection, a page size, an offset and an optional
//! category, return `{items, total}`.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for HTTPS.
//! - **`native-tls`**: use the platform TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use data_browser_source::{create_source, Collection, PageRequest, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(SourceConfig::Rest {
//!         base_url: "https://dummyjson.com".to_string(),
//!         connect_timeout_secs: 10,
//!         request_timeout_secs: 15,
//!         max_retries: 0,
//!     })?;
//!
//!     let request = PageRequest::for_page(
//!         Collection::new("products", "products"),
//!         1,
//!         10,
//!         Some("laptops".to_string()),
//!     );
//!     let page = source.fetch_page(&request).await?;
//!     for record in &page.items {
//!         println!("{:?} {:?}", record.id(), record.text("title"));
//!     }
//!     println!("{} laptops in total", page.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, SourceError>`](SourceError). Transport failures
//! (`NetworkError`, `Timeout`, `RateLimited`) are retryable; retries are off unless
//! `max_retries > 0`.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{Result, SourceError};

pub use factory::{create_source, SourceConfig};

pub use traits::RecordSource;

pub use types::{Collection, PageRequest, PageResponse, Record};

pub use providers::common::{
    parse_base_url, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use providers::{MemorySource, RestOptions, RestSource};
