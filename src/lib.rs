//! rollchunk
//!
//! Content-Defined Chunking (CDC) with rolling checksums.
//!
//! `rollchunk` splits a byte buffer into variable-length chunks whose
//! boundaries depend only on nearby content, and describes each chunk by
//! digest algorithm, length and digest. Small insertions or deletions move
//! only the boundaries near the edit, which is what makes it useful for:
//!
//! - deduplicating storage
//! - backup systems
//! - delta synchronization
//!
//! The crate intentionally:
//! - does NOT persist, index or deduplicate chunks
//! - does NOT manage files or paths (the `cli` feature adds a thin front end)
//! - does NOT manage concurrency
//!
//! Two rolling checksums are available, selected by [`RollingStrategy`]:
//! a plain additive window sum (the `gzip --rsyncable` rule) and a
//! two-accumulator Adler-64 checksum. Both feed the same [`BoundaryPolicy`].
//!
//! # Example
//!
//! ```
//! use rollchunk::{Chunker, ChunkConfig, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let config = ChunkConfig::new(64, 1024, 256, 16 * 1024)?.with_hash_algorithm("sha256");
//!     let chunker = Chunker::new(config)?;
//!
//!     let data: Vec<u8> = (0..100_000u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
//!     for chunk in chunker.chunk(data) {
//!         let chunk = chunk?;
//!         println!("{}", chunk.descriptor);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cdc;
mod chunk;
mod chunker;
mod config;
mod error;
mod hash;
mod stats;

//
// Public surface
//

pub use cdc::{
    AdditiveSum, Adler64, BoundaryPolicy, BoundaryReason, MOD_ADLER, RollingChecksum,
};
pub use chunk::{Chunk, ChunkDescriptor, ChunkHash};
pub use chunker::{Boundaries, ChunkBoundary, ChunkIter, Chunker};
pub use config::{
    BOUNDED_MAX_CHUNK_SIZE, ChunkConfig, DEFAULT_HASH_ALGORITHM, DEFAULT_MAX_CHUNK_SIZE,
    DEFAULT_MIN_CHUNK_SIZE, DEFAULT_TARGET_SIZE, DEFAULT_WINDOW_SIZE, RollingStrategy,
};
pub use error::ChunkError;
pub use hash::{ChunkHasher, DigestHasher, HashAlgorithm, digest, digest_hex};
pub use stats::ChunkStats;
