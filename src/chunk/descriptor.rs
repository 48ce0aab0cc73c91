//! The per-chunk output record.

use std::fmt;

use serde::Serialize;

use super::ChunkHash;
use crate::error::ChunkError;
use crate::hash::ChunkHasher;

/// Identifies one chunk by digest algorithm, length and digest.
///
/// Serializes with the key `hash_type` for the algorithm:
///
/// ```
/// use rollchunk::{ChunkDescriptor, ChunkHash};
///
/// let descriptor = ChunkDescriptor::new("md5", 3, ChunkHash::from_hex("00ff").unwrap());
/// assert_eq!(descriptor.id(), "md5:3:00ff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ChunkDescriptor {
    /// Name of the digest algorithm.
    #[serde(rename = "hash_type")]
    pub hash_algorithm: String,

    /// Chunk length in bytes.
    pub length: usize,

    /// Digest of the chunk bytes.
    pub hash: ChunkHash,
}

impl ChunkDescriptor {
    /// Creates a descriptor.
    pub fn new(hash_algorithm: impl Into<String>, length: usize, hash: ChunkHash) -> Self {
        Self {
            hash_algorithm: hash_algorithm.into(),
            length,
            hash,
        }
    }

    /// Hashes `data` and describes it.
    pub fn describe<H: ChunkHasher + ?Sized>(
        data: &[u8],
        hash_algorithm: &str,
        hasher: &H,
    ) -> Result<Self, ChunkError> {
        let hash = hasher.digest(data, hash_algorithm)?;
        Ok(Self::new(hash_algorithm, data.len(), hash))
    }

    /// Returns the `<hash_type>:<length>:<hash>` identity string.
    ///
    /// Two chunks with the same id are interchangeable for deduplication.
    pub fn id(&self) -> String {
        format!("{}:{}:{}", self.hash_algorithm, self.length, self.hash)
    }

    /// Returns the digest as lowercase hex.
    pub fn hash_hex(&self) -> String {
        self.hash.to_hex()
    }

    /// Checks that `data` is the chunk this descriptor describes.
    pub fn verify<H: ChunkHasher + ?Sized>(&self, data: &[u8], hasher: &H) -> Result<bool, ChunkError> {
        if data.len() != self.length {
            return Ok(false);
        }
        Ok(hasher.digest(data, &self.hash_algorithm)? == self.hash)
    }
}

impl fmt::Display for ChunkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'hash_type': '{}', 'length': {}, 'hash': '{}'}}",
            self.hash_algorithm, self.length, self.hash
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::DigestHasher;

    #[test]
    fn test_describe() {
        let d = ChunkDescriptor::describe(b"hello world", "md5", &DigestHasher).unwrap();
        assert_eq!(d.hash_algorithm, "md5");
        assert_eq!(d.length, 11);
        assert_eq!(d.hash_hex(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_describe_unknown_algorithm() {
        assert!(ChunkDescriptor::describe(b"x", "rot13", &DigestHasher).is_err());
    }

    #[test]
    fn test_id() {
        let d = ChunkDescriptor::describe(b"hello world", "md5", &DigestHasher).unwrap();
        assert_eq!(d.id(), "md5:11:5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_verify() {
        let d = ChunkDescriptor::describe(b"payload", "sha256", &DigestHasher).unwrap();
        assert!(d.verify(b"payload", &DigestHasher).unwrap());
        assert!(!d.verify(b"Payload", &DigestHasher).unwrap());
        assert!(!d.verify(b"payload!", &DigestHasher).unwrap());
    }

    #[test]
    fn test_display_matches_record_format() {
        let d = ChunkDescriptor::new("md5", 2, ChunkHash::from_hex("abcd").unwrap());
        assert_eq!(
            d.to_string(),
            "{'hash_type': 'md5', 'length': 2, 'hash': 'abcd'}"
        );
    }

    #[test]
    fn test_serialize() {
        let d = ChunkDescriptor::new("md5", 2, ChunkHash::from_hex("abcd").unwrap());
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            r#"{"hash_type":"md5","length":2,"hash":"abcd"}"#
        );
    }
}
