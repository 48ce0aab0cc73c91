//! The Chunk type - one delimited byte range with its descriptor.

use std::fmt;
use std::ops::Range;

use bytes::Bytes;

use super::{ChunkDescriptor, ChunkHash};
use crate::cdc::BoundaryReason;

/// A content-defined chunk.
///
/// `data` is a zero-copy slice of the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk bytes.
    pub data: Bytes,

    /// Offset of the first byte in the input.
    pub offset: u64,

    /// Which rule closed the chunk.
    pub reason: BoundaryReason,

    /// Algorithm, length and digest.
    pub descriptor: ChunkDescriptor,
}

impl Chunk {
    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the chunk digest.
    pub fn hash(&self) -> &ChunkHash {
        &self.descriptor.hash
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range of input offsets.
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns its descriptor.
    pub fn into_descriptor(self) -> ChunkDescriptor {
        self.descriptor
    }

    /// Splits the chunk into (data, descriptor).
    pub fn into_parts(self) -> (Bytes, ChunkDescriptor) {
        (self.data, self.descriptor)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} bytes @ {}, {}={}, {})",
            self.len(),
            self.offset,
            self.descriptor.hash_algorithm,
            self.descriptor.hash,
            self.reason
        )
    }
}
