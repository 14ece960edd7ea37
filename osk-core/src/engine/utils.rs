//! Character-offset text helpers
//!
//! Carets count characters, not bytes, so every edit goes through these.

/// Number of characters in `text`
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of character `index`, clamped to the end of `text`
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Replaces characters `[start, end)` with `replacement`
pub(crate) fn splice(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end).max(start_byte);

    let mut result = String::with_capacity(text.len() + replacement.len());
    result.push_str(&text[..start_byte]);
    result.push_str(replacement);
    result.push_str(&text[end_byte..]);
    result
}
