#![no_main]

use libfuzzer_sys::fuzz_target;
use rollchunk::{ChunkConfig, Chunker, DigestHasher, RollingStrategy};

fuzz_target!(|data: Vec<u8>| {
    let configs = vec![
        // Tiny window, content boundaries only
        ChunkConfig::new(4, 16, 0, 64).unwrap().with_strategy(RollingStrategy::Additive),
        ChunkConfig::new(4, 16, 0, 64).unwrap().with_strategy(RollingStrategy::Adler),
        // Bounded on both sides
        ChunkConfig::new(64, 256, 32, 1024).unwrap().with_strategy(RollingStrategy::Additive),
        ChunkConfig::new(64, 256, 32, 1024).unwrap().with_strategy(RollingStrategy::Adler),
        ChunkConfig::default(),
    ];

    for config in configs {
        let chunker = Chunker::new(config.clone()).unwrap();
        let chunks = chunker.chunk_bytes(data.clone()).unwrap();

        // Verify: all chunks are within min/max bounds
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(!chunk.is_empty());
            assert!(chunk.len() <= config.max_size());
            if i + 1 < chunks.len() {
                assert!(chunk.len() >= config.min_size());
            }
        }

        // Verify: chunks tile the input in order
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.offset, expected_offset);
            assert_eq!(&chunk.data[..], &data[chunk.offset as usize..chunk.end() as usize]);
            assert!(chunk.descriptor.verify(&chunk.data, &DigestHasher).unwrap());
            expected_offset = chunk.end();
        }
        assert_eq!(expected_offset, data.len() as u64);

        // Verify: determinism
        let again = chunker.chunk_bytes(data.clone()).unwrap();
        assert_eq!(chunks, again);
    }
});
