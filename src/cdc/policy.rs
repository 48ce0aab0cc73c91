//! Boundary decision rule.

use std::fmt;
use std::num::NonZeroU64;

use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// Why a chunk was closed where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryReason {
    /// The rolling checksum hit the divisor after `min_size` bytes.
    ContentDefined,
    /// The chunk reached `max_size` bytes.
    MaxSize,
    /// The last byte of the input closed the final chunk.
    EndOfInput,
}

impl fmt::Display for BoundaryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoundaryReason::ContentDefined => "content",
            BoundaryReason::MaxSize => "max-size",
            BoundaryReason::EndOfInput => "end-of-input",
        })
    }
}

/// Decides whether the byte just fed to the checksum closes a chunk.
///
/// Shared by every rolling strategy; only the checksum value differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPolicy {
    divisor: NonZeroU64,
    min_size: usize,
    max_size: usize,
}

impl BoundaryPolicy {
    /// Creates a policy from raw bounds.
    pub fn new(divisor: NonZeroU64, min_size: usize, max_size: usize) -> Self {
        Self {
            divisor,
            min_size,
            max_size,
        }
    }

    /// Builds the policy described by a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if the configuration does not
    /// pass [`ChunkConfig::validate`].
    pub fn from_config(config: &ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self::for_validated(config))
    }

    /// Builds the policy of a configuration that already passed validation.
    pub(crate) fn for_validated(config: &ChunkConfig) -> Self {
        let divisor = NonZeroU64::new(config.target_size() as u64).unwrap_or(NonZeroU64::MIN);
        Self::new(divisor, config.min_size(), config.max_size())
    }

    /// Returns `true` if a boundary falls after the current byte.
    ///
    /// `offset_since_last_boundary` counts the bytes of the open chunk,
    /// including the current one.
    #[inline]
    pub fn is_boundary(
        &self,
        checksum: u64,
        offset_since_last_boundary: usize,
        is_final_byte: bool,
    ) -> bool {
        self.decide(checksum, offset_since_last_boundary, is_final_byte)
            .is_some()
    }

    /// Like [`BoundaryPolicy::is_boundary`], reporting which rule fired.
    ///
    /// Rules are checked in order: content match, size cap, end of input.
    #[inline]
    pub fn decide(
        &self,
        checksum: u64,
        offset_since_last_boundary: usize,
        is_final_byte: bool,
    ) -> Option<BoundaryReason> {
        if offset_since_last_boundary >= self.min_size && checksum % self.divisor.get() == 0 {
            Some(BoundaryReason::ContentDefined)
        } else if offset_since_last_boundary >= self.max_size {
            Some(BoundaryReason::MaxSize)
        } else if is_final_byte {
            Some(BoundaryReason::EndOfInput)
        } else {
            None
        }
    }

    /// Returns the checksum divisor.
    pub fn divisor(&self) -> u64 {
        self.divisor.get()
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
