//! UTF-16 <-> UTF-8 offset conversion
//!
//! Browser textareas report `selectionStart`/`selectionEnd` in UTF-16 code
//! units; the buffer works in UTF-8 byte offsets. Both conversions clamp to
//! the text, and an offset inside a surrogate pair snaps to the start of
//! that character.

/// Convert a UTF-16 code unit offset to a byte offset on a char boundary
pub fn utf16_to_byte(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > utf16 {
            return byte;
        }
        units = next;
    }
    text.len()
}

/// Convert a byte offset to a UTF-16 code unit offset
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    text.char_indices()
        .take_while(|&(index, _)| index < byte)
        .map(|(_, ch)| ch.len_utf16())
        .sum()
}
