//! Descriptor output formats.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use rollchunk::ChunkDescriptor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{'hash_type': 'sha256', 'length': 4096, 'hash': '...'},` per line
    Python,
    /// One JSON object per line
    Json,
    /// `<hash_type>:<length>:<hash>` per line
    Id,
}

pub fn write_descriptor<W: Write>(
    out: &mut W,
    format: OutputFormat,
    descriptor: &ChunkDescriptor,
) -> Result<()> {
    match format {
        OutputFormat::Python => writeln!(out, "{},", descriptor),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, descriptor).context("encoding descriptor")?;
            writeln!(out)
        }
        OutputFormat::Id => writeln!(out, "{}", descriptor.id()),
    }
    .context("writing descriptor")
}
