//! Chunking engine for processing in-memory buffers.
//!
//! - [`Chunker`] - Validated configuration plus hasher; starts passes
//! - [`ChunkIter`] - Lazy, ordered stream of hashed chunks
//! - [`Boundaries`] - Lazy stream of boundary ranges without hashing

mod engine;
mod iter;

pub use engine::Chunker;
pub use iter::{Boundaries, ChunkBoundary, ChunkIter};
