//! Character-boundary helpers.
//!
//! Scanner payloads are mostly ASCII but QR content and unknown input may carry
//! arbitrary UTF-8, so every positional slice goes through char offsets.

/// Byte offset of the `n`th character, clamped to the end of `s`
pub fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Split off the first `n` characters (fewer if `s` is shorter)
pub fn split_chars(s: &str, n: usize) -> (&str, &str) {
    s.split_at(char_offset(s, n))
}

/// Remove a single trailing `sep`, if present
pub fn strip_trailing(s: &str, sep: char) -> &str {
    s.strip_suffix(sep).unwrap_or(s)
}
