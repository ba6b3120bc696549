//! Example: encode the opening requests of a SANE session.
//!
//! Usage:
//!
//! ```bash
//! cargo run -p sane-protocol --example init_request -- alice
//! ```
//!
//! It will:
//! - encode `SANE_NET_INIT` with the client version and the given user name
//! - encode `SANE_NET_GET_DEVICES`
//! - print the resulting bytes as hex.

use std::env;
use std::error::Error;

use sane_core::RpcCode;
use sane_protocol::script::format_hex;
use sane_protocol::wire_types::{version_code, CLIENT_VERSION};
use sane_protocol::SaneOutputStream;

fn main() -> Result<(), Box<dyn Error>> {
    let user = env::args().nth(1).unwrap_or_else(|| "anonymous".to_string());

    let (major, minor, build) = CLIENT_VERSION;
    let mut out = SaneOutputStream::new(Vec::with_capacity(64));

    out.write_enum(&RpcCode::Init)?;
    out.write_word(version_code(major, minor, build))?;
    out.write_text(&user)?;

    out.write_enum(&RpcCode::GetDevices)?;

    let bytes = out.into_inner()?;
    println!("{} bytes:", bytes.len());
    println!("{}", format_hex(&bytes));

    Ok(())
}
