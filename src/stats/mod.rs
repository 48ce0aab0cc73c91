//! Running summary of a chunking pass.

use std::fmt;

use crate::cdc::BoundaryReason;

/// Counts and size extremes for the chunks emitted so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Number of chunks.
    pub chunks: usize,
    /// Total bytes covered.
    pub bytes: u64,
    /// Smallest chunk, if any.
    pub min_len: Option<usize>,
    /// Largest chunk, if any.
    pub max_len: Option<usize>,
    /// Chunks closed by a checksum match.
    pub content_defined: usize,
    /// Chunks closed by the size cap.
    pub max_size_cuts: usize,
}

impl ChunkStats {
    /// Records one chunk.
    pub fn record(&mut self, len: usize, reason: BoundaryReason) {
        self.chunks += 1;
        self.bytes += len as u64;
        self.min_len = Some(self.min_len.map_or(len, |m| m.min(len)));
        self.max_len = Some(self.max_len.map_or(len, |m| m.max(len)));
        match reason {
            BoundaryReason::ContentDefined => self.content_defined += 1,
            BoundaryReason::MaxSize => self.max_size_cuts += 1,
            BoundaryReason::EndOfInput => {}
        }
    }

    /// Returns the mean chunk size in bytes (0 when empty).
    pub fn average(&self) -> u64 {
        if self.chunks == 0 {
            0
        } else {
            self.bytes / self.chunks as u64
        }
    }
}

impl fmt::Display for ChunkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes / {} chunks = {} bytes per chunk",
            self.bytes,
            self.chunks,
            self.average()
        )?;
        if let (Some(min), Some(max)) = (self.min_len, self.max_len) {
            write!(f, " (min {}, max {}, {} forced)", min, max, self.max_size_cuts)?;
        }
        Ok(())
    }
}
