//! Compile a SANE wire script into bytes.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sane_wire_tool::{run, Config, OutputFormat};

#[derive(Parser)]
#[clap(name = "sane-wire-tool")]
#[clap(about = "Encode a script of SANE wire values into the bytes a client would send")]
struct Cli {
    /// Script file, one wire value per line
    script: PathBuf,

    /// Write to this file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Encoder buffer size in bytes
    #[clap(short, long)]
    buffer_size: Option<usize>,

    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug || std::env::var_os("RUST_LOG").is_some() {
        let filter = if cli.debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::from_default_env()
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(size) = cli.buffer_size {
        config.buffer_size = size;
    }
    info!(?config, "configuration resolved");

    let script = fs::read_to_string(&cli.script)
        .with_context(|| format!("failed to read script {}", cli.script.display()))?;

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let count = run(&script, &config, out)?;
    info!(values = count, script = %cli.script.display(), "script encoded");

    Ok(())
}
