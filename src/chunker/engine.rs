//! Chunker - the entry point of a chunking pass.
//!
//! A [`Chunker`] pairs a validated [`ChunkConfig`] with a [`ChunkHasher`].
//! It holds no per-pass state, so one chunker can drive any number of
//! independent passes, including from several threads at once.

use std::io::Read;

use bytes::Bytes;

use super::iter::{Boundaries, ChunkIter};
use crate::chunk::{Chunk, ChunkDescriptor};
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::hash::{ChunkHasher, DigestHasher};

/// Splits buffers into content-defined chunks.
///
/// # Example
///
/// ```
/// use rollchunk::{Chunker, ChunkConfig, RollingStrategy};
///
/// let config = ChunkConfig::new(4, 4, 0, 8)?.with_strategy(RollingStrategy::Additive);
/// let chunker = Chunker::new(config)?;
///
/// let chunks = chunker.chunk_bytes(vec![1u8, 1, 1, 1, 5, 1, 1, 1, 1, 1])?;
/// let lengths: Vec<_> = chunks.iter().map(|c| c.len()).collect();
/// assert_eq!(lengths, [4, 1, 1, 1, 1, 1, 1]);
/// # Ok::<(), rollchunk::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunker<H = DigestHasher> {
    config: ChunkConfig,
    hasher: H,
}

impl Chunker<DigestHasher> {
    /// Creates a chunker using the built-in hasher.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if the configuration is invalid.
    /// The digest name is not checked until the first chunk is hashed.
    pub fn new(config: ChunkConfig) -> Result<Self, ChunkError> {
        Self::with_hasher(config, DigestHasher)
    }
}

impl<H: ChunkHasher> Chunker<H> {
    /// Creates a chunker with a custom hasher.
    pub fn with_hasher(config: ChunkConfig, hasher: H) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self { config, hasher })
    }

    /// Creates a lazy iterator over the chunks of `data`.
    ///
    /// `data` is converted to [`Bytes`] once; yielded chunks are zero-copy
    /// slices of it.
    pub fn chunk(&self, data: impl Into<Bytes>) -> ChunkIter<'_, H> {
        ChunkIter::new(data.into(), &self.config, &self.hasher)
    }

    /// Chunks an in-memory buffer and collects the result.
    ///
    /// Stops at the first hashing error.
    pub fn chunk_bytes(&self, data: impl Into<Bytes>) -> Result<Vec<Chunk>, ChunkError> {
        self.chunk(data).collect()
    }

    /// Yields only the descriptors of `data`, in order.
    pub fn descriptors(
        &self,
        data: impl Into<Bytes>,
    ) -> impl Iterator<Item = Result<ChunkDescriptor, ChunkError>> + '_ {
        self.chunk(data).map(|chunk| chunk.map(Chunk::into_descriptor))
    }

    /// Reads `reader` to the end and returns an iterator over its chunks.
    pub fn chunk_reader<R: Read>(&self, mut reader: R) -> Result<ChunkIter<'_, H>, ChunkError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(self.chunk(buf))
    }

    /// Returns the chunk boundaries of `data` without hashing anything.
    pub fn boundaries<'a>(&self, data: &'a [u8]) -> Boundaries<'a> {
        Boundaries::new(data, &self.config)
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Returns the hasher used by this chunker.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl Default for Chunker<DigestHasher> {
    fn default() -> Self {
        Self {
            config: ChunkConfig::default(),
            hasher: DigestHasher,
        }
    }
}
