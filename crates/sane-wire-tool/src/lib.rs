//! sane-wire-tool
//!
//! Compiles wire scripts (see `sane_protocol::script`) into the exact
//! bytes a SANE client would send, as a hex dump or raw stream.

pub mod config;

use std::io::Write;

use anyhow::{Context, Result};
use sane_protocol::script::{compile_into, format_hex};
use sane_protocol::SaneOutputStream;
use tracing::debug;

pub use config::{Config, OutputFormat};

/// Encode `script` and write the result to `out` in the configured format.
///
/// Returns the number of wire values encoded.
pub fn run<W: Write>(script: &str, config: &Config, mut out: W) -> Result<usize> {
    let count = match config.format {
        OutputFormat::Raw => {
            let mut stream = SaneOutputStream::with_capacity(config.buffer_size, out);
            let count = compile_into(script, &mut stream)?;
            stream.close().context("failed to flush output")?;
            count
        }
        OutputFormat::Hex => {
            let mut stream = SaneOutputStream::with_capacity(config.buffer_size, Vec::new());
            let count = compile_into(script, &mut stream)?;
            let bytes = stream.into_inner()?;
            debug!(bytes = bytes.len(), "rendering hex dump");

            if !bytes.is_empty() {
                writeln!(out, "{}", format_hex(&bytes)).context("failed to write output")?;
            }
            out.flush().context("failed to flush output")?;
            count
        }
    };

    Ok(count)
}
