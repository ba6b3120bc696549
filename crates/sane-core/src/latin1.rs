//! Single byte per character text encoding.
//!
//! SANE strings are byte strings. Text handed to the encoder is mapped
//! one character to one byte using ISO-8859-1, so every character in
//! `U+0000..=U+00FF` is accepted and anything above is rejected; there
//! is no escape mechanism on the wire.

use crate::error::EncodingError;

/// Highest code point that fits in one byte.
pub const MAX_CHAR: char = '\u{ff}';

/// Encode a sequence of characters, failing on the first character
/// outside Latin-1.
///
/// No output is produced for a failed encode, so callers can validate
/// before committing anything to a stream.
pub fn encode<I>(chars: I) -> Result<Vec<u8>, EncodingError>
where
    I: IntoIterator<Item = char>,
{
    let iter = chars.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);

    for (index, character) in iter.enumerate() {
        out.push(encode_char(character).ok_or(EncodingError { character, index })?);
    }

    Ok(out)
}

/// Convenience wrapper around [`encode`] for string slices.
pub fn encode_str(s: &str) -> Result<Vec<u8>, EncodingError> {
    encode(s.chars())
}

/// Map one character to its Latin-1 byte, if it has one.
pub fn encode_char(c: char) -> Option<u8> {
    u8::try_from(u32::from(c)).ok()
}
