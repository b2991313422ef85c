//! Truncation helpers for logging response bodies.
//!
//! Collection pages can be large; debug logs only keep a prefix.

/// Maximum number of bytes of a body kept in a log line.
const LOG_BODY_LIMIT: usize = 512;

/// Largest char boundary `<= index` (`str::floor_char_boundary` is newer than our MSRV).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Shorten `s` for a log line, appending the full byte length when cut.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let end = floor_char_boundary(s, LOG_BODY_LIMIT);
    format!("{}... [{} bytes total]", &s[..end], s.len())
}
