//! Buffered encoder for SANE wire values.
//!
//! Wire layout of each write (all words 4 bytes, big-endian):
//!
//! ```text
//! word           : [b0 b1 b2 b3]
//! enum (code C)  : word(C)
//! empty text     : [00]
//! text (L bytes) : word(L + 1) | L Latin-1 bytes | [00]
//! raw            : bytes as given
//! ```
//!
//! The `+ 1` in the text length counts the terminator, which is still
//! written as its own byte. Peers parse the length word and then expect
//! exactly that many bytes, terminator included.
//!
//! Writes land in an internal buffer and reach the sink in the order
//! they were issued. The buffer is drained when it would overflow, on
//! [`SaneOutputStream::flush`], [`SaneOutputStream::close`] and
//! [`SaneOutputStream::into_inner`].

use std::io::{self, Write};

use bytes::{Buf, BufMut, BytesMut};
use sane_core::{latin1, SaneWord, WireEnum};
use tracing::{debug, trace};

use crate::error::{Result, WireError};
use crate::wire_types::{DEFAULT_BUFFER_CAPACITY, TERMINATOR};

/// Encoder that owns a byte sink and writes SANE values to it.
///
/// The stream is either open (holds its sink) or closed (sink dropped).
/// Every operation on a closed stream fails with
/// [`io::ErrorKind::BrokenPipe`]. A sink failure in the middle of an
/// unbuffered write also closes the stream, since the peer may already
/// hold part of a field.
pub struct SaneOutputStream<W: Write> {
    /// `None` once closed or unwrapped.
    sink: Option<W>,
    buf: BytesMut,
    capacity: usize,
}

impl<W: Write> SaneOutputStream<W> {
    /// Wrap `sink` with the default buffer capacity.
    pub fn new(sink: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, sink)
    }

    /// Wrap `sink` with a buffer of `capacity` bytes.
    ///
    /// A capacity of zero sends every write straight to the sink.
    pub fn with_capacity(capacity: usize, sink: W) -> Self {
        Self {
            sink: Some(sink),
            buf: BytesMut::with_capacity(capacity),
            capacity,
        }
    }

    /// Write `text` in SANE string format.
    ///
    /// Fails with [`WireError::Encoding`] if a character is outside
    /// Latin-1; in that case nothing is written for this call.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.write_latin1(text.chars())
    }

    /// Same as [`Self::write_text`] for a character buffer.
    pub fn write_chars(&mut self, chars: &[char]) -> Result<()> {
        self.write_latin1(chars.iter().copied())
    }

    fn write_latin1<I>(&mut self, chars: I) -> Result<()>
    where
        I: IntoIterator<Item = char>,
    {
        // Encode before touching the stream so a bad character can
        // never leave a dangling length word behind.
        let encoded = latin1::encode(chars)?;

        if !encoded.is_empty() {
            let len = encoded
                .len()
                .checked_add(1)
                .and_then(|n| i32::try_from(n).ok())
                .ok_or(WireError::TextTooLong(encoded.len()))?;

            // One write_raw per field: it lands in the buffer whole or
            // not at all.
            let mut field = BytesMut::with_capacity(encoded.len() + 5);
            field.put_slice(&SaneWord::for_int(len).to_bytes());
            field.put_slice(&encoded);
            field.put_u8(TERMINATOR);
            return self.write_raw(&field);
        }

        self.write_raw(&[TERMINATOR])
    }

    /// Write the word's 4 bytes.
    pub fn write_word(&mut self, word: SaneWord) -> Result<()> {
        self.write_raw(&word.to_bytes())
    }

    /// Write the wire code of `value` as a word.
    pub fn write_enum<E: WireEnum + ?Sized>(&mut self, value: &E) -> Result<()> {
        self.write_word(SaneWord::for_int(value.wire_code()))
    }

    /// Append `bytes` unmodified.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_open()?;

        if self.buf.len() + bytes.len() > self.capacity {
            self.flush_buf()?;
        }

        if bytes.len() >= self.capacity {
            trace!(len = bytes.len(), "write bypasses buffer");
            if let Err(e) = self.sink_mut()?.write_all(bytes) {
                // An unknown prefix of `bytes` reached the sink.
                self.sink = None;
                debug!(error = %e, "unbuffered write failed, stream closed");
                return Err(e.into());
            }
        } else {
            self.buf.extend_from_slice(bytes);
        }

        Ok(())
    }

    /// Push buffered bytes to the sink and flush the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.flush_buf()?;
        self.sink_mut()?.flush()?;
        Ok(())
    }

    /// Flush and drop the sink. The stream cannot be used afterwards.
    pub fn close(&mut self) -> Result<()> {
        self.flush()?;
        self.sink = None;
        debug!("output stream closed");
        Ok(())
    }

    /// Flush and hand back the sink.
    ///
    /// On failure the sink and any unsent bytes are dropped.
    pub fn into_inner(mut self) -> Result<W> {
        if let Err(e) = self.flush() {
            self.buf.clear();
            self.sink = None;
            return Err(e);
        }
        self.sink.take().ok_or_else(|| closed_error().into())
    }

    /// Number of bytes waiting in the buffer.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Buffer capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True after `close`, or after an unbuffered write failed.
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.sink.is_some() {
            Ok(())
        } else {
            Err(closed_error())
        }
    }

    fn sink_mut(&mut self) -> io::Result<&mut W> {
        self.sink.as_mut().ok_or_else(closed_error)
    }

    /// Drain the buffer into the sink. Bytes the sink did not accept
    /// stay buffered.
    fn flush_buf(&mut self) -> io::Result<()> {
        let sink = self.sink.as_mut().ok_or_else(closed_error)?;

        if !self.buf.is_empty() {
            trace!(len = self.buf.len(), "draining write buffer");
        }

        while !self.buf.is_empty() {
            match sink.write(&self.buf) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "sink accepted no buffered bytes",
                    ));
                }
                Ok(n) => self.buf.advance(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

impl<W: Write> Drop for SaneOutputStream<W> {
    fn drop(&mut self) {
        // Best effort, like std::io::BufWriter: errors cannot surface here.
        if self.sink.is_some() && !std::thread::panicking() {
            let _ = self.flush_buf();
        }
    }
}

impl<W: Write> std::fmt::Debug for SaneOutputStream<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaneOutputStream")
            .field("buffered", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "output stream is closed")
}
