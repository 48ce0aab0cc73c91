//! Built-in hasher backed by RustCrypto digests and BLAKE3.

use md5::Md5;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

use super::{ChunkHasher, HashAlgorithm};
use crate::chunk::ChunkHash;
use crate::error::ChunkError;

fn one_shot<D: Digest>(data: &[u8]) -> ChunkHash {
    ChunkHash::from_digest(D::digest(data).as_slice())
}

impl HashAlgorithm {
    /// Hashes `data` with this algorithm.
    pub fn digest(&self, data: &[u8]) -> ChunkHash {
        match self {
            HashAlgorithm::Md5 => one_shot::<Md5>(data),
            HashAlgorithm::Sha224 => one_shot::<Sha224>(data),
            HashAlgorithm::Sha256 => one_shot::<Sha256>(data),
            HashAlgorithm::Sha384 => one_shot::<Sha384>(data),
            HashAlgorithm::Sha512 => one_shot::<Sha512>(data),
            HashAlgorithm::Sha512_224 => one_shot::<Sha512_224>(data),
            HashAlgorithm::Sha512_256 => one_shot::<Sha512_256>(data),
            #[cfg(feature = "hash-blake3")]
            HashAlgorithm::Blake3 => ChunkHash::from_digest(blake3::hash(data).as_bytes()),
        }
    }
}

/// The default hasher: RustCrypto digests plus BLAKE3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestHasher;

impl DigestHasher {
    /// Creates a new hasher.
    pub const fn new() -> Self {
        Self
    }
}

impl ChunkHasher for DigestHasher {
    fn digest(&self, data: &[u8], algorithm: &str) -> Result<ChunkHash, ChunkError> {
        let algorithm: HashAlgorithm = algorithm.parse()?;
        Ok(algorithm.digest(data))
    }
}
