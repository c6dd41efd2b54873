//! Text helpers for course labels.

/// Shorten `text` to at most `length` characters.
///
/// Counts `char`s rather than bytes so multi-byte titles are never split
/// inside a code point.
pub fn truncated(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
