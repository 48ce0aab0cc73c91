//! Chunk digest values.

use std::fmt;

use serde::{Serialize, Serializer};

/// A digest of chunk content.
///
/// Digest width depends on the algorithm (16 bytes for MD5 up to 64 bytes for
/// SHA-512), so the value is stored inline with its length and stays `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkHash {
    bytes: [u8; ChunkHash::MAX_SIZE],
    len: u8,
}

impl ChunkHash {
    /// The widest digest that can be stored, in bytes.
    pub const MAX_SIZE: usize = 64;

    /// Creates a hash from a digest slice.
    ///
    /// Returns `None` if the slice is empty or longer than [`ChunkHash::MAX_SIZE`].
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.is_empty() || slice.len() > Self::MAX_SIZE {
            return None;
        }
        let mut bytes = [0u8; Self::MAX_SIZE];
        bytes[..slice.len()].copy_from_slice(slice);
        Some(Self {
            bytes,
            len: slice.len() as u8,
        })
    }

    /// Wraps digest output whose width is known to fit.
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        debug_assert!(!digest.is_empty() && digest.len() <= Self::MAX_SIZE);
        let len = digest.len().min(Self::MAX_SIZE);
        let mut bytes = [0u8; Self::MAX_SIZE];
        bytes[..len].copy_from_slice(&digest[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Returns the digest width in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; a digest has at least one byte.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Parses a hex string.
    ///
    /// Returns `None` if the string is not valid hex or decodes to an
    /// unsupported width.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        let bytes = hex::decode(hex_str).ok()?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for ChunkHash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for ChunkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ChunkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkHash({})", self.to_hex())
    }
}

impl Serialize for ChunkHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
