//! Errors raised while putting values on the wire.

use sane_core::EncodingError;
use thiserror::Error;

/// Failure of a single write.
///
/// The variants separate "the value cannot be expressed on the wire"
/// (reject the input) from "the transport failed" (reconnect).
#[derive(Debug, Error)]
pub enum WireError {
    /// The sink rejected a write or flush, or the stream was already closed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text contained a character with no single-byte encoding.
    /// Nothing was written for the offending value.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Text whose length field would not fit in a word.
    /// Nothing was written for the offending value.
    #[error("text of {0} bytes does not fit in a length word")]
    TextTooLong(usize),
}

impl WireError {
    /// True when the failure came from the transport rather than the value.
    pub fn is_io(&self) -> bool {
        matches!(self, WireError::Io(_))
    }
}

/// Result type alias using WireError.
pub type Result<T> = std::result::Result<T, WireError>;
