//! The SANE word: a 4-byte, big-endian integer field.
//!
//! Every integer on the SANE wire (lengths, RPC codes, enum values,
//! booleans, fixed-point reals) is carried as one of these.

use std::fmt;

/// A 4-byte protocol word.
///
/// The bytes are stored in wire order, so [`SaneWord::to_bytes`] is
/// exactly what goes on the stream.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SaneWord([u8; 4]);

impl SaneWord {
    /// Number of bytes a word occupies on the wire.
    pub const SIZE_IN_BYTES: usize = 4;

    /// Scale of a `SANE_Fixed` value: 16 fractional bits.
    pub const PRECISION: i32 = 1 << 16;

    /// Word holding the integer `value`.
    pub const fn for_int(value: i32) -> Self {
        SaneWord(value.to_be_bytes())
    }

    /// Word holding `value` as a `SANE_Fixed` (16.16 fixed point).
    ///
    /// Values outside the representable range saturate.
    pub fn for_fixed_precision(value: f64) -> Self {
        let scaled = value * f64::from(Self::PRECISION);
        // `as` saturates on overflow and maps NaN to zero.
        SaneWord::for_int(scaled as i32)
    }

    /// Word built from 4 bytes in wire order.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        SaneWord(bytes)
    }

    /// The word's wire representation.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    /// The word interpreted as a signed integer.
    pub const fn integer_value(self) -> i32 {
        i32::from_be_bytes(self.0)
    }

    /// The word interpreted as a `SANE_Fixed` real.
    pub fn fixed_precision_value(self) -> f64 {
        f64::from(self.integer_value()) / f64::from(Self::PRECISION)
    }

    /// `SANE_Bool` encoding: 1 for true, 0 for false.
    pub const fn for_bool(value: bool) -> Self {
        SaneWord::for_int(value as i32)
    }
}

impl From<i32> for SaneWord {
    fn from(value: i32) -> Self {
        SaneWord::for_int(value)
    }
}

impl From<bool> for SaneWord {
    fn from(value: bool) -> Self {
        SaneWord::for_bool(value)
    }
}

impl fmt::Debug for SaneWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SaneWord({} = {:02x} {:02x} {:02x} {:02x})",
            self.integer_value(),
            self.0[0],
            self.0[1],
            self.0[2],
            self.0[3]
        )
    }
}
