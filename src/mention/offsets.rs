// WHY: callers count offsets in chars while Rust slices by byte
// All helpers here clamp instead of panicking on out-of-range positions

/// Number of chars in the buffer, the upper bound for every offset
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Clamp a cursor offset into `0..=char_len(text)`
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    cursor.min(char_len(text))
}

/// Byte position of the char at `char_pos`, or `text.len()` past the end
pub fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Substring between two char offsets (end exclusive)
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    &text[start_byte..end_byte]
}

/// Replace the chars in `start..end` with `replacement`, returning a new string
pub fn splice(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    let mut result = String::with_capacity(text.len() - (end_byte - start_byte) + replacement.len());
    result.push_str(&text[..start_byte]);
    result.push_str(replacement);
    result.push_str(&text[end_byte..]);
    result
}
