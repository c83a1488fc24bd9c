//! Shared utility functions used across the codebase.

/// Treat a whitespace-only value the same as an unset one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Largest char boundary at or below `max_bytes`, so `&s[..idx]` never panics.
pub fn safe_truncate_index(s: &str, max_bytes: usize) -> usize {
    if s.len() <= max_bytes {
        return s.len();
    }
    let mut idx = max_bytes;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Short prefix of a response body for log lines.
pub fn preview(s: &str, max_bytes: usize) -> &str {
    &s[..safe_truncate_index(s, max_bytes)]
}
