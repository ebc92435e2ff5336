//! Untrusted text sanitization for QR content.
//!
//! Input is truncated to a bounded number of UTF-16 code units, the unit a
//! browser `maxlength` counts, then the five
//! markup-sensitive characters are replaced with named entities.

pub mod escape;

pub use escape::{ESCAPES, escape_markup};

/// Maximum number of UTF-16 code units kept from a request payload.
pub const MAX_DATA_LENGTH: usize = 1000;

/// Sanitize `raw` with the default length limit.
pub fn sanitize(raw: &str) -> String {
    sanitize_with_limit(raw, MAX_DATA_LENGTH)
}

/// Keep the first `max_units` UTF-16 code units of `raw`, then escape them.
///
/// Truncation happens before escaping, so the result may be longer than
/// `max_units`.
pub fn sanitize_with_limit(raw: &str, max_units: usize) -> String {
    let head = truncate_utf16(raw, max_units);
    if head.len() < raw.len() {
        tracing::debug!(
            limit = max_units,
            dropped_bytes = raw.len() - head.len(),
            "Input truncated"
        );
    }
    escape_markup(head)
}

/// Borrow the longest prefix of `raw` that fits in `max_units` UTF-16 code units.
///
/// A character whose surrogate pair would straddle the limit is dropped whole.
pub fn truncate_utf16(raw: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (idx, ch) in raw.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return &raw[..idx];
        }
    }
    raw
}

/// True when a sanitized value carries nothing worth encoding.
pub fn is_blank(sanitized: &str) -> bool {
    sanitized.trim().is_empty()
}
