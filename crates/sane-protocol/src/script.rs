//! Line-oriented text form of SANE wire values.
//!
//! Used by the command-line tool and by the regression fixtures to
//! describe a byte stream without writing it out by hand.
//!
//! Format (one value per line):
//!
//! - Word:      `word <int>` (decimal, may be negative, or `0x` hex)
//! - Fixed:     `fixed <real>` (16.16 fixed point word)
//! - Text:      `text <rest of line>`, `text "<quoted>"`, or bare `text` for empty
//! - Enum:      `enum <kind>:<name>`, e.g. `enum rpc:open`
//! - Raw:       `raw <hex>`, whitespace between bytes allowed
//! - Version:   `version <major>.<minor>.<build>`
//!
//! Lines are trimmed; blank lines and lines starting with `#` are skipped.
//! Enum kinds: `rpc`, `status`, `type`, `unit`, `constraint`, `action`, `frame`.

use std::fmt::{self, Write as _};
use std::io::Write;

use sane_core::{
    ConstraintType, ControlAction, FrameType, RpcCode, SaneWord, Status, Unit, ValueType, WireEnum,
};
use thiserror::Error;

use crate::error::WireError;
use crate::output_stream::SaneOutputStream;
use crate::wire_types::version_code;

/// Errors raised while parsing or encoding a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown directive `{directive}`")]
    UnknownDirective { line: usize, directive: String },

    #[error("line {line}: `{directive}` needs an argument")]
    MissingArgument { line: usize, directive: &'static str },

    #[error("line {line}: invalid integer `{value}`")]
    InvalidInteger { line: usize, value: String },

    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown enum value `{value}`")]
    UnknownEnum { line: usize, value: String },

    #[error("line {line}: invalid hex `{value}`")]
    InvalidHex { line: usize, value: String },

    #[error("line {line}: invalid version `{value}` (expected major.minor.build)")]
    InvalidVersion { line: usize, value: String },

    /// The value parsed but could not be written.
    #[error("line {line}: {source}")]
    Wire {
        line: usize,
        #[source]
        source: WireError,
    },
}

/// Any of the protocol's standard enumerations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NamedEnum {
    Rpc(RpcCode),
    Status(Status),
    ValueType(ValueType),
    Unit(Unit),
    Constraint(ConstraintType),
    Action(ControlAction),
    Frame(FrameType),
}

impl NamedEnum {
    /// Parse `kind:name`, e.g. `rpc:open`.
    pub fn parse(s: &str) -> Option<Self> {
        let (kind, name) = s.split_once(':')?;
        let name = name.trim();

        match kind.trim() {
            "rpc" => RpcCode::from_name(name).map(NamedEnum::Rpc),
            "status" => Status::from_name(name).map(NamedEnum::Status),
            "type" => ValueType::from_name(name).map(NamedEnum::ValueType),
            "unit" => Unit::from_name(name).map(NamedEnum::Unit),
            "constraint" => ConstraintType::from_name(name).map(NamedEnum::Constraint),
            "action" => ControlAction::from_name(name).map(NamedEnum::Action),
            "frame" => FrameType::from_name(name).map(NamedEnum::Frame),
            _ => None,
        }
    }
}

impl WireEnum for NamedEnum {
    fn wire_code(&self) -> i32 {
        match self {
            NamedEnum::Rpc(v) => v.wire_code(),
            NamedEnum::Status(v) => v.wire_code(),
            NamedEnum::ValueType(v) => v.wire_code(),
            NamedEnum::Unit(v) => v.wire_code(),
            NamedEnum::Constraint(v) => v.wire_code(),
            NamedEnum::Action(v) => v.wire_code(),
            NamedEnum::Frame(v) => v.wire_code(),
        }
    }
}

impl fmt::Display for NamedEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedEnum::Rpc(v) => write!(f, "rpc:{v}"),
            NamedEnum::Status(v) => write!(f, "status:{v}"),
            NamedEnum::ValueType(v) => write!(f, "type:{v}"),
            NamedEnum::Unit(v) => write!(f, "unit:{v}"),
            NamedEnum::Constraint(v) => write!(f, "constraint:{v}"),
            NamedEnum::Action(v) => write!(f, "action:{v}"),
            NamedEnum::Frame(v) => write!(f, "frame:{v}"),
        }
    }
}

/// One wire value described by a script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Word(SaneWord),
    Text(String),
    Enum(NamedEnum),
    Raw(Vec<u8>),
}

impl ScriptValue {
    /// Write this value to `out`.
    pub fn encode_into<W: Write>(&self, out: &mut SaneOutputStream<W>) -> Result<(), WireError> {
        match self {
            ScriptValue::Word(w) => out.write_word(*w),
            ScriptValue::Text(t) => out.write_text(t),
            ScriptValue::Enum(e) => out.write_enum(e),
            ScriptValue::Raw(bytes) => out.write_raw(bytes),
        }
    }
}

/// A parsed value together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub value: ScriptValue,
}

/// Parse a whole script.
pub fn parse_script(src: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut out = Vec::new();

    for (i, raw_line) in src.lines().enumerate() {
        let line = i + 1;
        if let Some(value) = parse_line(raw_line, line)? {
            out.push(ScriptLine { line, value });
        }
    }

    Ok(out)
}

/// Parse a single line.
///
/// Returns `Ok(None)` for blank lines or comments.
pub fn parse_line(raw_line: &str, line: usize) -> Result<Option<ScriptValue>, ScriptError> {
    let trimmed = raw_line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (directive, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((d, a)) => (d, a.trim()),
        None => (trimmed, ""),
    };

    let value = match directive {
        "word" => ScriptValue::Word(SaneWord::for_int(parse_int(require(arg, "word", line)?, line)?)),
        "fixed" => {
            let arg = require(arg, "fixed", line)?;
            let v: f64 = arg.parse().map_err(|_| ScriptError::InvalidNumber {
                line,
                value: arg.to_string(),
            })?;
            ScriptValue::Word(SaneWord::for_fixed_precision(v))
        }
        "text" => ScriptValue::Text(unquote(arg).to_string()),
        "enum" => {
            let arg = require(arg, "enum", line)?;
            let e = NamedEnum::parse(arg).ok_or_else(|| ScriptError::UnknownEnum {
                line,
                value: arg.to_string(),
            })?;
            ScriptValue::Enum(e)
        }
        "raw" => ScriptValue::Raw(parse_hex(require(arg, "raw", line)?, line)?),
        "version" => ScriptValue::Word(parse_version(require(arg, "version", line)?, line)?),
        other => {
            return Err(ScriptError::UnknownDirective {
                line,
                directive: other.to_string(),
            })
        }
    };

    Ok(Some(value))
}

/// Parse `src` and write every value to `out`, returning how many
/// values were written. The stream is not flushed.
pub fn compile_into<W: Write>(
    src: &str,
    out: &mut SaneOutputStream<W>,
) -> Result<usize, ScriptError> {
    let lines = parse_script(src)?;

    for l in &lines {
        l.value
            .encode_into(out)
            .map_err(|source| ScriptError::Wire { line: l.line, source })?;
    }

    Ok(lines.len())
}

/// Parse and encode `src` into a fresh byte vector.
pub fn compile(src: &str) -> Result<Vec<u8>, ScriptError> {
    let mut out = SaneOutputStream::new(Vec::new());
    compile_into(src, &mut out)?;
    out.into_inner()
        .map_err(|source| ScriptError::Wire { line: 0, source })
}

/// Render bytes as lowercase hex, 16 per line, space separated.
pub fn format_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);

    for (i, chunk) in bytes.chunks(16).enumerate() {
        if i > 0 {
            s.push('\n');
        }
        for (j, b) in chunk.iter().enumerate() {
            if j > 0 {
                s.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = write!(s, "{b:02x}");
        }
    }

    s
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn require<'a>(arg: &'a str, directive: &'static str, line: usize) -> Result<&'a str, ScriptError> {
    if arg.is_empty() {
        Err(ScriptError::MissingArgument { line, directive })
    } else {
        Ok(arg)
    }
}

fn parse_int(s: &str, line: usize) -> Result<i32, ScriptError> {
    let invalid = || ScriptError::InvalidInteger {
        line,
        value: s.to_string(),
    };

    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        // from_str_radix would take a sign here.
        Some(hex) if hex.starts_with(['+', '-']) => Err(invalid()),
        // Hex words are bit patterns: 0xffffffff is -1.
        Some(hex) => u32::from_str_radix(hex, 16)
            .map(|v| v as i32)
            .map_err(|_| invalid()),
        None => s.parse::<i32>().map_err(|_| invalid()),
    }
}

fn parse_hex(s: &str, line: usize) -> Result<Vec<u8>, ScriptError> {
    let invalid = || ScriptError::InvalidHex {
        line,
        value: s.to_string(),
    };

    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(invalid());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
            u8::from_str_radix(pair, 16).map_err(|_| invalid())
        })
        .collect()
}

fn parse_version(s: &str, line: usize) -> Result<SaneWord, ScriptError> {
    let invalid = || ScriptError::InvalidVersion {
        line,
        value: s.to_string(),
    };

    let mut parts = s.split('.');
    let major = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(invalid)?;
    let minor = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(invalid)?;
    let build = parts.next().and_then(|p| p.parse::<u16>().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(version_code(major, minor, build))
}

fn unquote(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
