//! The driving loop: boundary scanning and chunk emission.
//!
//! - [`Boundaries`] - Lazily yields [`ChunkBoundary`] ranges, no hashing
//! - [`ChunkIter`] - Lazily yields hashed [`Chunk`]s in input order
//!
//! Both share one [`Scanner`], which feeds the rolling checksum one byte at
//! a time and consults the boundary policy after every byte.

use std::iter::FusedIterator;
use std::ops::Range;

use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::cdc::{BoundaryPolicy, BoundaryReason, RollingChecksum};
use crate::chunk::{Chunk, ChunkDescriptor};
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::hash::ChunkHasher;
use crate::stats::ChunkStats;

/// A half-open byte range `[start, end)` closed by a boundary decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkBoundary {
    /// Offset of the first byte of the chunk.
    pub start: usize,
    /// Offset one past the boundary byte.
    pub end: usize,
    /// Which rule placed the boundary.
    pub reason: BoundaryReason,
}

impl ChunkBoundary {
    /// Returns the chunk length.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Returns the range of input offsets.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Per-pass scanning state.
///
/// Owned by exactly one pass; nothing here is shared between passes.
#[derive(Debug, Clone)]
pub(crate) struct Scanner {
    checksum: RollingChecksum,
    policy: BoundaryPolicy,
    /// Next byte to feed.
    pos: usize,
    /// Start of the open chunk.
    last_boundary: usize,
}

impl Scanner {
    pub(crate) fn new(config: &ChunkConfig) -> Self {
        Self {
            checksum: RollingChecksum::new(config.strategy(), config.window_size()),
            policy: BoundaryPolicy::for_validated(config),
            pos: 0,
            last_boundary: 0,
        }
    }

    /// Advances until the next boundary in `data`.
    ///
    /// `data` must be the same buffer on every call. A boundary decided at
    /// byte `i` closes `[last_boundary, i + 1)`: the boundary byte belongs
    /// to the chunk it closes.
    pub(crate) fn next_boundary(&mut self, data: &[u8]) -> Option<ChunkBoundary> {
        let len = data.len();
        while self.pos < len {
            self.checksum.feed(data, self.pos);
            self.pos += 1;

            let open = self.pos - self.last_boundary;
            if let Some(reason) = self
                .policy
                .decide(self.checksum.value(), open, self.pos == len)
            {
                let boundary = ChunkBoundary {
                    start: self.last_boundary,
                    end: self.pos,
                    reason,
                };
                self.last_boundary = self.pos;
                return Some(boundary);
            }
        }
        None
    }
}

/// An iterator over the chunk boundaries of a buffer.
///
/// Produced by [`Chunker::boundaries`](crate::Chunker::boundaries).
#[derive(Debug, Clone)]
pub struct Boundaries<'a> {
    data: &'a [u8],
    scanner: Scanner,
}

impl<'a> Boundaries<'a> {
    pub(crate) fn new(data: &'a [u8], config: &ChunkConfig) -> Self {
        Self {
            data,
            scanner: Scanner::new(config),
        }
    }
}

impl Iterator for Boundaries<'_> {
    type Item = ChunkBoundary;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.next_boundary(self.data)
    }
}

impl FusedIterator for Boundaries<'_> {}

/// An iterator that yields hashed chunks from an in-memory buffer.
///
/// Chunks come out strictly in offset order and together cover the buffer
/// exactly. If the hasher fails, the error is yielded once and the iterator
/// is exhausted afterwards; chunks yielded before stay valid.
///
/// # Example
///
/// ```
/// use rollchunk::{Chunker, ChunkConfig};
///
/// let config = ChunkConfig::new(16, 64, 0, 256)?;
/// let chunker = Chunker::new(config)?;
///
/// let data: Vec<u8> = (0..1000).map(|i| (i * 31 % 251) as u8).collect();
/// let mut iter = chunker.chunk(data);
/// while let Some(chunk) = iter.next() {
///     let chunk = chunk?;
///     println!("{}", chunk.descriptor);
/// }
/// assert_eq!(iter.stats().bytes, 1000);
/// # Ok::<(), rollchunk::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct ChunkIter<'a, H> {
    data: Bytes,
    scanner: Scanner,
    hasher: &'a H,
    hash_algorithm: &'a str,
    stats: ChunkStats,
    finished: bool,
}

impl<'a, H: ChunkHasher> ChunkIter<'a, H> {
    pub(crate) fn new(data: Bytes, config: &'a ChunkConfig, hasher: &'a H) -> Self {
        debug!(
            len = data.len(),
            strategy = %config.strategy(),
            window = config.window_size(),
            target = config.target_size(),
            min = config.min_size(),
            max = config.max_size(),
            hash = config.hash_algorithm(),
            "starting chunking pass"
        );

        Self {
            scanner: Scanner::new(config),
            data,
            hasher,
            hash_algorithm: config.hash_algorithm(),
            stats: ChunkStats::default(),
            finished: false,
        }
    }

    /// Returns statistics for the chunks yielded so far.
    pub fn stats(&self) -> &ChunkStats {
        &self.stats
    }

    /// Slices and hashes one boundary range.
    fn emit_chunk(&mut self, boundary: ChunkBoundary) -> Result<Chunk, ChunkError> {
        let data = self.data.slice(boundary.range());
        let descriptor = ChunkDescriptor::describe(&data, self.hash_algorithm, self.hasher)?;

        trace!(
            offset = boundary.start,
            len = boundary.len(),
            reason = %boundary.reason,
            "chunk"
        );
        self.stats.record(boundary.len(), boundary.reason);

        Ok(Chunk {
            data,
            offset: boundary.start as u64,
            reason: boundary.reason,
            descriptor,
        })
    }
}

impl<H: ChunkHasher> Iterator for ChunkIter<'_, H> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(boundary) = self.scanner.next_boundary(&self.data) else {
            self.finished = true;
            debug!(
                chunks = self.stats.chunks,
                bytes = self.stats.bytes,
                average = self.stats.average(),
                "chunking pass complete"
            );
            return None;
        };

        match self.emit_chunk(boundary) {
            Ok(chunk) => Some(Ok(chunk)),
            Err(e) => {
                warn!(offset = boundary.start, error = %e, "aborting chunking pass");
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<H: ChunkHasher> FusedIterator for ChunkIter<'_, H> {}
