// std imports
use std::str;

/// Returns the encoded length of a UTF-8 sequence starting with the given byte,
/// or 0 if the byte cannot start a well-formed sequence.
#[inline]
pub const fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decodes the first code point of `bytes`.
///
/// Returns `None` only for empty input. A malformed, truncated, overlong or surrogate
/// sequence decodes to U+FFFD occupying exactly one byte, so callers always make progress.
#[inline]
pub fn decode(bytes: &[u8]) -> Option<(char, usize)> {
    let &first = bytes.first()?;
    if first.is_ascii() {
        return Some((first as char, 1));
    }

    let width = utf8_char_width(first);
    let decoded = match bytes.get(..width) {
        Some(head) if width != 0 => str::from_utf8(head).ok().and_then(|s| s.chars().next()),
        _ => None,
    };

    Some(decoded.map_or((char::REPLACEMENT_CHARACTER, 1), |ch| (ch, width)))
}

/// Returns the number of bytes the first code point of `bytes` occupies,
/// following the same rules as [`decode`]. Returns 0 for empty input.
#[inline]
pub fn char_len(bytes: &[u8]) -> usize {
    decode(bytes).map_or(0, |(_, len)| len)
}
