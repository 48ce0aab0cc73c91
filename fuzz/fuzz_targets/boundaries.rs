#![no_main]

use libfuzzer_sys::fuzz_target;
use rollchunk::{ChunkConfig, Chunker, RollingStrategy};

fuzz_target!(|input: (u8, u8, u8, Vec<u8>)| {
    let (window, min, extra, data) = input;
    let window = window as usize % 32 + 1;
    let min = min as usize % 64;
    let max = (min + extra as usize).max(window).max(1);

    for strategy in [RollingStrategy::Additive, RollingStrategy::Adler] {
        let config = ChunkConfig::new(window, 8, min.min(max), max)
            .unwrap()
            .with_strategy(strategy);
        let chunker = Chunker::new(config).unwrap();

        let boundaries: Vec<_> = chunker.boundaries(&data).collect();
        let mut start = 0;
        for (i, b) in boundaries.iter().enumerate() {
            assert_eq!(b.start, start);
            assert!(b.len() >= 1 && b.len() <= max);
            if i + 1 < boundaries.len() {
                assert!(b.len() >= min.min(max));
            }
            start = b.end;
        }
        assert_eq!(start, data.len());

        // Same cut points as the hashing pass
        let chunks = chunker.chunk_bytes(data.clone()).unwrap();
        assert_eq!(chunks.len(), boundaries.len());
    }
});
