//! Error types for the value layer.

use thiserror::Error;

/// A character could not be represented in the protocol's single
/// byte per character text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character {character:?} at index {index} is outside Latin-1")]
pub struct EncodingError {
    /// The offending character.
    pub character: char,

    /// Position of the character in the input, counted in characters.
    pub index: usize,
}
