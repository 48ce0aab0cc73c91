//! Chunk types.
//!
//! - [`Chunk`] - Byte range of the input with offset and descriptor
//! - [`ChunkDescriptor`] - `{hash_type, length, hash}` output record
//! - [`ChunkHash`] - Variable-width digest value

mod data;
mod descriptor;
mod hash;

pub use data::Chunk;
pub use descriptor::ChunkDescriptor;
pub use hash::ChunkHash;
