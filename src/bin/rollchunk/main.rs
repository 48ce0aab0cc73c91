//! rollchunk - print content-defined chunk descriptors for a file.
//!
//! ```text
//! rollchunk <FILE> [HASH] [METHOD]
//! ```
//!
//! METHOD selects a preset: `1` rsyncable sum, `2` bounded sum, `3` Adler-64.
//! Individual flags override the preset. Descriptors go to stdout, logs and
//! `--stats` go to stderr.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use rollchunk::{ChunkConfig, Chunker, DEFAULT_HASH_ALGORITHM, RollingStrategy};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod format;

use format::{OutputFormat, write_descriptor};

#[derive(Parser, Debug)]
#[command(name = "rollchunk", version, about = "Content-defined chunking with rolling checksums")]
struct Cli {
    /// File to chunk
    file: PathBuf,

    /// Digest algorithm (md5, sha224, sha256, sha384, sha512, sha512-256, blake3, ...)
    #[arg(default_value = DEFAULT_HASH_ALGORITHM, env = "ROLLCHUNK_HASH")]
    hash: String,

    /// Chunking preset: 1 = rsyncable sum, 2 = bounded sum, 3 = Adler-64
    #[arg(default_value = "1", value_parser = ["1", "2", "3"])]
    method: String,

    /// Rolling checksum (additive or adler), overrides the preset
    #[arg(long)]
    strategy: Option<RollingStrategy>,

    /// Rolling window width in bytes
    #[arg(long)]
    window: Option<usize>,

    /// Boundary divisor (target chunk size)
    #[arg(long)]
    target: Option<usize>,

    /// Minimum chunk size in bytes
    #[arg(long)]
    min: Option<usize>,

    /// Maximum chunk size in bytes
    #[arg(long)]
    max: Option<usize>,

    /// Output record format
    #[arg(long, value_enum, default_value_t = OutputFormat::Python)]
    format: OutputFormat,

    /// Print a size summary to stderr when done
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ChunkConfig {
        let mut config = match self.method.as_str() {
            "2" => ChunkConfig::bounded(),
            "3" => ChunkConfig::adler(),
            _ => ChunkConfig::rsyncable(),
        };
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if let Some(window) = self.window {
            config = config.with_window_size(window);
        }
        if let Some(target) = self.target {
            config = config.with_target_size(target);
        }
        if let Some(min) = self.min {
            config = config.with_min_size(min);
        }
        if let Some(max) = self.max {
            config = config.with_max_size(max);
        }
        config.with_hash_algorithm(self.hash.clone())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the whole file into memory.
fn load(path: &Path) -> Result<Bytes> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Bytes::from(data))
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let chunker = Chunker::new(config).context("invalid chunking configuration")?;
    let data = load(&cli.file)?;
    info!(path = %cli.file.display(), len = data.len(), "chunking file");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut iter = chunker.chunk(data);
    let mut failure = None;
    for chunk in iter.by_ref() {
        match chunk {
            Ok(chunk) => write_descriptor(&mut out, cli.format, &chunk.descriptor)?,
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    // Records written before a failure stay written.
    out.flush().context("flushing output")?;

    if cli.stats {
        eprintln!("{}", iter.stats());
    }
    debug!(stats = %iter.stats(), "done");

    match failure {
        Some(e) => Err(e).context("chunking aborted"),
        None => Ok(()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}
