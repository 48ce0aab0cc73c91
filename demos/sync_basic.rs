//! Basic chunking example: chunk a buffer, edit it, chunk it again and count
//! how many chunk descriptors the two versions share.
//!
//! Run with:
//!     cargo run --example sync_basic

use std::collections::HashSet;

use rollchunk::{ChunkConfig, ChunkDescriptor, Chunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1 MB of pseudo-random text-like bytes
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let original: Vec<u8> = (0..1024 * 1024)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b'a' + (state % 26) as u8
        })
        .collect();

    let config = ChunkConfig::adler()
        .with_target_size(16 * 1024)
        .with_max_size(128 * 1024)
        .with_hash_algorithm("sha256");
    let chunker = Chunker::new(config)?;

    println!("Chunking {} bytes of data...\n", original.len());

    let mut iter = chunker.chunk(original.clone());
    let mut before = Vec::new();
    for chunk in iter.by_ref() {
        let chunk = chunk?;
        println!(
            "Chunk {}: offset={}, len={}, reason={}, hash={}",
            before.len() + 1,
            chunk.offset,
            chunk.len(),
            chunk.reason,
            &chunk.descriptor.hash_hex()[..16]
        );
        before.push(chunk.into_descriptor());
    }
    println!("\n{}", iter.stats());

    // Insert a few bytes in the middle and chunk again
    let mut edited = original;
    let at = edited.len() / 3;
    edited.splice(at..at, b"EDIT".iter().copied());

    let after: HashSet<ChunkDescriptor> = chunker.descriptors(edited).collect::<Result<_, _>>()?;
    let shared = before.iter().filter(|d| after.contains(*d)).count();

    println!(
        "After a 4-byte insertion: {} of {} chunks unchanged",
        shared,
        before.len()
    );

    Ok(())
}
