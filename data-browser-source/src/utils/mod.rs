//! Utility modules.

/// Log sanitization utilities to keep response bodies out of logs in full.
pub mod log_sanitizer;
