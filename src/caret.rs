//! Caret offset conversion.
//!
//! Everything in this crate speaks byte offsets. Text inputs rarely do:
//!
//! ```text
//! char:     n   é   e   ␠   @   b   o   b
//! utf-16:   0   1   2   3   4   5   6   7     browsers (selectionStart)
//! byte:     0   1   3   4   5   6   7   8     é takes 2 bytes
//! ```
//!
//! A browser reports the caret before `@` as `4`; the byte offset is `5`.
//! Grapheme indices matter for terminal and native editors, where a caret
//! cannot sit inside a cluster such as `e\u{301}` or a flag emoji.
//!
//! All conversions clamp out-of-range input to the end of the text, so the
//! result is always a valid slicing position.

use unicode_segmentation::UnicodeSegmentation;

/// Clamp `offset` to the text length and floor it to a char boundary.
///
/// ```rust
/// use mosaic::caret::snap_to_char_boundary;
///
/// let text = "a日b";
/// assert_eq!(snap_to_char_boundary(text, 2), 1); // inside 日
/// assert_eq!(snap_to_char_boundary(text, 99), text.len());
/// ```
#[must_use]
pub fn snap_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    // Replaces text.floor_char_boundary(offset), which is not yet stable
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Convert a UTF-16 code unit offset into a byte offset.
///
/// An offset that falls between the two halves of a surrogate pair is
/// rounded down to the start of that character.
#[must_use]
pub fn byte_offset_from_utf16(text: &str, utf16: usize) -> usize {
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

/// Convert a byte offset into a UTF-16 code unit offset.
#[must_use]
pub fn utf16_offset_from_byte(text: &str, byte: usize) -> usize {
    let byte = snap_to_char_boundary(text, byte);
    text[..byte].encode_utf16().count()
}

/// Convert a grapheme cluster index into a byte offset.
///
/// ```rust
/// use mosaic::caret::byte_offset_from_grapheme;
///
/// let text = "e\u{301}@x"; // "é" written as e + combining accent
/// assert_eq!(byte_offset_from_grapheme(text, 1), 3);
/// ```
#[must_use]
pub fn byte_offset_from_grapheme(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Convert a byte offset into a grapheme cluster index.
///
/// An offset inside a cluster maps to that cluster.
#[must_use]
pub fn grapheme_index_from_byte(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .take_while(|&(start, g)| start + g.len() <= byte)
        .count()
}
