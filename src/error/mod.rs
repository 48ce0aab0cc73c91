//! Error types for rollchunk.

use thiserror::Error;

/// Errors that can occur while configuring or running a chunking pass.
///
/// Every variant is structural: chunking is a pure computation over a fixed
/// buffer, so none of them are worth retrying.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// An I/O error occurred while loading input data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter.
    ///
    /// Detected before scanning begins; no chunks are produced.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The hasher does not recognize the requested digest algorithm.
    ///
    /// Fatal for the whole pass. Chunks already yielded are not retracted.
    #[error("unsupported hash algorithm: {name:?}")]
    UnsupportedAlgorithm {
        /// The algorithm name as it was requested.
        name: String,
    },
}

impl ChunkError {
    pub(crate) fn unsupported(name: impl Into<String>) -> Self {
        ChunkError::UnsupportedAlgorithm { name: name.into() }
    }
}
