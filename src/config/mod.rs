//! Configuration for chunking behavior.
//!
//! - [`ChunkConfig`] - Window, boundary bounds, checksum strategy and digest
//! - [`RollingStrategy`] - Which rolling checksum drives content boundaries
//!
//! # Example
//!
//! ```
//! use rollchunk::{ChunkConfig, RollingStrategy};
//!
//! // Window of 64 bytes, boundary divisor 1024, chunks between 256 B and 8 KiB
//! let config = ChunkConfig::new(64, 1024, 256, 8192)?
//!     .with_strategy(RollingStrategy::Adler)
//!     .with_hash_algorithm("sha512");
//!
//! // Presets
//! let v1 = ChunkConfig::rsyncable();
//! let v2 = ChunkConfig::bounded();
//! let v3 = ChunkConfig::adler();
//! # Ok::<(), rollchunk::ChunkError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ChunkError;

/// Default rolling window width (4 KiB).
pub const DEFAULT_WINDOW_SIZE: usize = 4 * 1024;

/// Default boundary divisor for the Adler-64 strategy (1 MiB).
pub const DEFAULT_TARGET_SIZE: usize = 1024 * 1024;

/// Default minimum chunk size (one window).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = DEFAULT_WINDOW_SIZE;

/// Default maximum chunk size (8 MiB).
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// Maximum chunk size of the bounded additive preset (1 MiB).
pub const BOUNDED_MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Default digest algorithm name.
pub const DEFAULT_HASH_ALGORITHM: &str = "sha256";

/// Rolling checksum used to find content-defined boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RollingStrategy {
    /// Plain sum of the bytes in the window (gzip `--rsyncable` style).
    ///
    /// Gives a lot of size variation; chunks of a few bytes are common
    /// unless `min_size` is raised.
    Additive,

    /// Two-accumulator Adler-style checksum modulo `2^32 - 5`.
    ///
    /// Chunk sizes cluster much closer to the target.
    #[default]
    Adler,
}

impl RollingStrategy {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RollingStrategy::Additive => "additive",
            RollingStrategy::Adler => "adler",
        }
    }
}

impl fmt::Display for RollingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollingStrategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "additive" | "sum" => Ok(RollingStrategy::Additive),
            "adler" | "adler64" => Ok(RollingStrategy::Adler),
            _ => Err(ChunkError::InvalidConfig {
                message: "unknown rolling strategy (expected additive or adler)",
            }),
        }
    }
}

/// Configuration for content-defined chunking.
///
/// A boundary is placed after byte `i` when any of these holds:
///
/// - the rolling checksum is a multiple of `target_size` and the chunk has
///   reached `min_size` bytes
/// - the chunk has reached `max_size` bytes
/// - byte `i` is the last byte of the input
///
/// Constraints: `window_size > 0`, `target_size > 0`,
/// `min_size <= max_size`, `max_size >= window_size`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    strategy: RollingStrategy,
    window_size: usize,
    target_size: usize,
    min_size: usize,
    max_size: usize,
    hash_algorithm: String,
}

impl ChunkConfig {
    /// Creates a new configuration with the default strategy and digest.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if:
    /// - `window_size` or `target_size` is zero
    /// - `min_size > max_size`
    /// - `max_size < window_size`
    pub fn new(
        window_size: usize,
        target_size: usize,
        min_size: usize,
        max_size: usize,
    ) -> Result<Self, ChunkError> {
        let config = Self {
            strategy: RollingStrategy::default(),
            window_size,
            target_size,
            min_size,
            max_size,
            hash_algorithm: DEFAULT_HASH_ALGORITHM.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Rusty Russell's `gzip --rsyncable` rule: break wherever the sum of the
    /// last 4096 bytes is a multiple of 4096. No size bounds.
    pub fn rsyncable() -> Self {
        Self {
            strategy: RollingStrategy::Additive,
            window_size: DEFAULT_WINDOW_SIZE,
            target_size: DEFAULT_WINDOW_SIZE,
            min_size: 0,
            max_size: usize::MAX,
            hash_algorithm: DEFAULT_HASH_ALGORITHM.to_string(),
        }
    }

    /// The rsyncable rule with chunks held between one window and 1 MiB.
    pub fn bounded() -> Self {
        Self {
            min_size: DEFAULT_WINDOW_SIZE,
            max_size: BOUNDED_MAX_CHUNK_SIZE,
            ..Self::rsyncable()
        }
    }

    /// Adler-64 rolling checksum over a 4 KiB window targeting 1 MiB chunks.
    pub fn adler() -> Self {
        Self {
            strategy: RollingStrategy::Adler,
            window_size: DEFAULT_WINDOW_SIZE,
            target_size: DEFAULT_TARGET_SIZE,
            min_size: 0,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            hash_algorithm: DEFAULT_HASH_ALGORITHM.to_string(),
        }
    }

    /// Sets the rolling checksum strategy.
    pub fn with_strategy(mut self, strategy: RollingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the rolling window width.
    ///
    /// Note: This does not validate the configuration. Use [`ChunkConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Sets the boundary divisor.
    pub fn with_target_size(mut self, size: usize) -> Self {
        self.target_size = size;
        self
    }

    /// Sets the minimum chunk size.
    pub fn with_min_size(mut self, size: usize) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the maximum chunk size.
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Sets the digest algorithm name.
    ///
    /// The name is not checked here; an unknown name surfaces as
    /// [`ChunkError::UnsupportedAlgorithm`] when the first chunk is hashed.
    pub fn with_hash_algorithm(mut self, name: impl Into<String>) -> Self {
        self.hash_algorithm = name.into();
        self
    }

    /// Returns the rolling checksum strategy.
    pub fn strategy(&self) -> RollingStrategy {
        self.strategy
    }

    /// Returns the rolling window width.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the boundary divisor.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the digest algorithm name.
    pub fn hash_algorithm(&self) -> &str {
        &self.hash_algorithm
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use rollchunk::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_window_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.window_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "window_size must be non-zero",
            });
        }

        if self.target_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "target_size must be non-zero",
            });
        }

        if self.min_size > self.max_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size cannot be greater than max_size",
            });
        }

        if self.max_size < self.window_size {
            return Err(ChunkError::InvalidConfig {
                message: "max_size cannot be smaller than window_size",
            });
        }

        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            ..Self::adler()
        }
    }
}
