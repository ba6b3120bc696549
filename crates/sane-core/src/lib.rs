//! sane-core
//!
//! Value types for the SANE scanner network protocol:
//! - [`SaneWord`]: the protocol's 4-byte big-endian word
//! - [`WireEnum`]: anything that travels as an integer wire code
//! - the standard protocol enumerations (RPC codes, status, units, ...)
//! - [`latin1`]: the single byte per character text mapping
//!
//! Encoders that turn these into a byte stream live in the
//! `sane-protocol` crate; this crate does no I/O.

pub mod error;
pub mod frame_type;
pub mod latin1;
pub mod option;
pub mod rpc_code;
pub mod status;
pub mod wire_enum;
pub mod word;

pub use error::EncodingError;
pub use frame_type::FrameType;
pub use option::{ConstraintType, ControlAction, Unit, ValueType};
pub use rpc_code::RpcCode;
pub use status::Status;
pub use wire_enum::WireEnum;
pub use word::SaneWord;
