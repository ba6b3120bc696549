//! Low-level wire constants.
//!
//! This module defines:
//! - the text terminator and word size
//! - the protocol version code carried by the init RPC
//! - helpers for computing encoded sizes
//!
//! The actual write logic lives in `output_stream`.

use sane_core::SaneWord;

/// Byte that ends every text field, including empty ones.
pub const TERMINATOR: u8 = 0;

/// Size of a word on the wire.
pub const WORD_SIZE: usize = SaneWord::SIZE_IN_BYTES;

/// Default capacity of the encoder's write buffer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Protocol version this client announces: 1.0.3.
pub const CLIENT_VERSION: (u8, u8, u16) = (1, 0, 3);

/// Pack a version triple into the word sent by `SANE_NET_INIT`.
///
/// Layout: major in the top byte, minor in the next, build in the low
/// 16 bits.
pub const fn version_code(major: u8, minor: u8, build: u16) -> SaneWord {
    let code = ((major as u32) << 24) | ((minor as u32) << 16) | build as u32;
    SaneWord::for_int(code as i32)
}

/// Split a version word back into `(major, minor, build)`.
pub fn version_parts(word: SaneWord) -> (u8, u8, u16) {
    let [major, minor, hi, lo] = word.to_bytes();
    (major, minor, u16::from_be_bytes([hi, lo]))
}

/// Number of bytes a text value of `encoded_len` payload bytes occupies
/// on the wire.
///
/// - empty text: just the terminator
/// - otherwise: length word + payload + terminator
pub const fn text_wire_len(encoded_len: usize) -> usize {
    if encoded_len == 0 {
        1
    } else {
        WORD_SIZE + encoded_len + 1
    }
}
