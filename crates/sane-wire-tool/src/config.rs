//! Configuration for the wire tool.
//!
//! Values are resolved in this order, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`--config`)
//! 3. environment variables:
//!    - `SANE_WIRE_FORMAT`      (`hex` or `raw`, default: `hex`)
//!    - `SANE_WIRE_BUFFER_SIZE` (bytes, default: 8192)
//! 4. command-line flags (applied by `main`)

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sane_protocol::wire_types::DEFAULT_BUFFER_CAPACITY;

/// How encoded bytes are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space separated hex, 16 bytes per line.
    Hex,
    /// The bytes exactly as they would go on the wire.
    Raw,
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "raw" => Ok(OutputFormat::Raw),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Unrecognised output format name.
#[derive(Debug)]
pub struct UnknownFormat(String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format `{}` (expected hex or raw)", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output rendering.
    pub format: OutputFormat,

    /// Capacity of the encoder's write buffer.
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Hex,
            buffer_size: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl Config {
    /// Defaults, overlaid with `path` if given, then with the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_env()
    }

    /// Parse a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply `SANE_WIRE_*` environment overrides.
    pub fn with_env(self) -> Result<Self> {
        Ok(Config {
            format: read_env_or("SANE_WIRE_FORMAT", self.format)?,
            buffer_size: read_env_or("SANE_WIRE_BUFFER_SIZE", self.buffer_size)?,
        })
    }
}

fn read_env_or<T>(key: &str, current: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: `{val}`")),
        Err(_) => Ok(current),
    }
}
