//! Strong hash implementations for chunk identity.
//!
//! The chunker does not hash anything itself; it hands each chunk to a
//! [`ChunkHasher`] together with the configured algorithm name.
//!
//! - [`ChunkHasher`] - The hashing seam (`digest(bytes, name)`)
//! - [`DigestHasher`] - Default implementation (MD5, SHA-2 family, BLAKE3)
//! - [`HashAlgorithm`] - Algorithms known to [`DigestHasher`]

mod algorithm;
mod builtin;

pub use algorithm::HashAlgorithm;
pub use builtin::DigestHasher;

use crate::chunk::ChunkHash;
use crate::error::ChunkError;

/// Produces a digest of a byte range under a named algorithm.
///
/// Implementations must be deterministic and must return
/// [`ChunkError::UnsupportedAlgorithm`] for names they do not recognize.
///
/// Any `Fn(&[u8], &str) -> Result<ChunkHash, ChunkError>` is a hasher.
pub trait ChunkHasher {
    /// Hashes `data` with the algorithm called `algorithm`.
    fn digest(&self, data: &[u8], algorithm: &str) -> Result<ChunkHash, ChunkError>;
}

impl<F> ChunkHasher for F
where
    F: Fn(&[u8], &str) -> Result<ChunkHash, ChunkError>,
{
    fn digest(&self, data: &[u8], algorithm: &str) -> Result<ChunkHash, ChunkError> {
        self(data, algorithm)
    }
}

/// Hashes `data` with the default hasher.
///
/// # Example
///
/// ```
/// let hash = rollchunk::digest(b"hello world", "md5")?;
/// assert_eq!(hash.to_hex(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
/// # Ok::<(), rollchunk::ChunkError>(())
/// ```
pub fn digest(data: &[u8], algorithm: &str) -> Result<ChunkHash, ChunkError> {
    DigestHasher.digest(data, algorithm)
}

/// Hashes `data` with the default hasher and returns lowercase hex.
pub fn digest_hex(data: &[u8], algorithm: &str) -> Result<String, ChunkError> {
    digest(data, algorithm).map(|hash| hash.to_hex())
}
