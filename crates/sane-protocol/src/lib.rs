//! sane-protocol
//!
//! Wire-level encoding for the SANE scanner network protocol.
//!
//! This crate turns the value types from `sane-core` into the exact
//! byte stream a SANE daemon expects:
//!
//! - [`output_stream`] : buffered encoder over any `std::io::Write` sink
//! - [`wire_types`]    : layout constants and the version code
//! - [`script`]        : line-oriented text form of wire values (for tools / fixtures)
//!
//! Reading the daemon's replies is not handled here.

pub mod error;
pub mod output_stream;
pub mod script;
pub mod wire_types;

pub use error::WireError;
pub use output_stream::SaneOutputStream;

pub use sane_core::{EncodingError, SaneWord, WireEnum};
