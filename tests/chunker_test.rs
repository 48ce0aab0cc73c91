// Integration tests for the Chunker API
// Tests cover: coverage, ordering, size bounds, determinism, hashing, edge cases

use rollchunk::{
    BoundaryReason, Chunk, ChunkConfig, ChunkDescriptor, ChunkError, ChunkHash, Chunker,
    DigestHasher, RollingStrategy,
};

fn additive(window: usize, divisor: usize, min: usize, max: usize) -> ChunkConfig {
    ChunkConfig::new(window, divisor, min, max)
        .unwrap()
        .with_strategy(RollingStrategy::Additive)
}

fn adler(window: usize, target: usize, min: usize, max: usize) -> ChunkConfig {
    ChunkConfig::new(window, target, min, max)
        .unwrap()
        .with_strategy(RollingStrategy::Adler)
}

/// Deterministic pseudo-random bytes (xorshift64).
fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

fn lengths(chunks: &[Chunk]) -> Vec<usize> {
    chunks.iter().map(|c| c.len()).collect()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_input() {
    let chunker = Chunker::default();
    let chunks = chunker.chunk_bytes(Vec::new()).unwrap();
    assert!(chunks.is_empty(), "Empty input should produce no chunks");
}

#[test]
fn test_single_byte_input() {
    for config in [ChunkConfig::default(), ChunkConfig::rsyncable(), ChunkConfig::bounded()] {
        let chunker = Chunker::new(config).unwrap();
        let chunks = chunker.chunk_bytes(vec![0x42]).unwrap();

        assert_eq!(chunks.len(), 1, "One byte should give one chunk");
        assert_eq!(chunks[0].len(), 1);
        assert_eq!(chunks[0].descriptor.length, 1);
    }
}

#[test]
fn test_worked_example_reference_trace() {
    // window 4, min 0, max 8, divisor 4
    let chunker = Chunker::new(additive(4, 4, 0, 8)).unwrap();
    let data = vec![1u8, 1, 1, 1, 5, 1, 1, 1, 1, 1];
    let chunks = chunker.chunk_bytes(data.clone()).unwrap();

    assert_eq!(lengths(&chunks), vec![4, 1, 1, 1, 1, 1, 1]);
    let offsets: Vec<_> = chunks.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![0, 4, 5, 6, 7, 8, 9]);
    assert_eq!(&chunks[0].data[..], &data[..4]);
    assert_eq!(&chunks[1].data[..], &[5]);
}

#[test]
fn test_boundary_byte_belongs_to_closing_chunk() {
    // The byte whose window sum first hits the divisor ends its chunk.
    let chunker = Chunker::new(additive(4, 4, 0, 8)).unwrap();
    let chunks = chunker.chunk_bytes(vec![1u8, 1, 1, 1, 3]).unwrap();
    assert_eq!(lengths(&chunks), vec![4, 1]);
    assert_eq!(chunks[0].data.last(), Some(&1));
    assert_eq!(chunks[0].reason, BoundaryReason::ContentDefined);
}

#[test]
fn test_descriptor_records() {
    let chunker = Chunker::new(additive(4, 4, 0, 8).with_hash_algorithm("md5")).unwrap();
    let chunks = chunker.chunk_bytes(b"hello world".to_vec()).unwrap();

    for chunk in &chunks {
        assert_eq!(chunk.descriptor.hash_algorithm, "md5");
        assert_eq!(chunk.descriptor.length, chunk.len());
        assert_eq!(
            chunk.descriptor.hash,
            rollchunk::digest(&chunk.data, "md5").unwrap()
        );
    }
}

// ============================================================================
// Coverage and Ordering
// ============================================================================

#[test]
fn test_full_coverage_both_strategies() {
    let data = noise(50_000, 7);

    for config in [additive(64, 64, 0, 4096), adler(64, 512, 32, 4096)] {
        let chunker = Chunker::new(config).unwrap();
        let chunks = chunker.chunk_bytes(data.clone()).unwrap();

        let mut expected_offset = 0u64;
        let mut rebuilt = Vec::with_capacity(data.len());
        for chunk in &chunks {
            assert_eq!(chunk.offset, expected_offset, "chunks must be contiguous");
            assert!(!chunk.is_empty());
            expected_offset = chunk.end();
            rebuilt.extend_from_slice(&chunk.data);
        }
        assert_eq!(rebuilt, data, "concatenated chunks must equal input");
    }
}

#[test]
fn test_last_chunk_closed_by_end_of_input() {
    let chunker = Chunker::new(additive(4, 1000, 0, 64)).unwrap();
    let chunks = chunker.chunk_bytes(vec![1u8; 10]).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].reason, BoundaryReason::EndOfInput);
}

// ============================================================================
// Size Constraints
// ============================================================================

#[test]
fn test_max_size_enforces_boundary() {
    let chunker = Chunker::new(additive(2, 1000, 0, 3)).unwrap();
    let chunks = chunker.chunk_bytes(vec![1u8; 10]).unwrap();

    assert_eq!(lengths(&chunks), vec![3, 3, 3, 1]);
    assert!(chunks[..3].iter().all(|c| c.reason == BoundaryReason::MaxSize));
}

#[test]
fn test_size_bounds_hold() {
    let data = noise(100_000, 99);
    let config = adler(48, 256, 128, 1024);
    let chunker = Chunker::new(config.clone()).unwrap();
    let chunks = chunker.chunk_bytes(data).unwrap();
    let n = chunks.len();
    assert!(n > 10, "expected many chunks, got {}", n);

    for (i, chunk) in chunks.iter().enumerate() {
        if i + 1 < n {
            assert!(chunk.len() <= config.max_size(), "chunk {} too large", i);
            assert!(chunk.len() >= config.min_size(), "chunk {} too small", i);
        }
    }
}

#[test]
fn test_zeros_with_min_size() {
    // All-zero windows match every divisor; min_size alone spaces boundaries.
    let chunker = Chunker::new(additive(8, 8, 16, 64)).unwrap();
    let chunks = chunker.chunk_bytes(vec![0u8; 100]).unwrap();
    assert_eq!(lengths(&chunks), vec![16, 16, 16, 16, 16, 16, 4]);
}

// ============================================================================
// Determinism and Shift Resistance
// ============================================================================

#[test]
fn test_determinism() {
    let data = noise(20_000, 3);
    let config = adler(32, 256, 64, 2048);

    let first = Chunker::new(config.clone()).unwrap().chunk_bytes(data.clone()).unwrap();
    let second = Chunker::new(config).unwrap().chunk_bytes(data).unwrap();
    assert_eq!(first, second);
}

fn shared_descriptor_fraction(config: ChunkConfig) -> f64 {
    let original = noise(400_000, 42);
    let mut edited = original.clone();
    let at = original.len() / 2;
    edited.splice(at..at, b"inserted!".iter().copied());

    let chunker = Chunker::new(config).unwrap();
    let before: Vec<ChunkDescriptor> = chunker
        .descriptors(original)
        .collect::<Result<_, _>>()
        .unwrap();
    let after: std::collections::HashSet<ChunkDescriptor> = chunker
        .descriptors(edited)
        .collect::<Result<_, _>>()
        .unwrap();

    let shared = before.iter().filter(|d| after.contains(*d)).count();
    shared as f64 / before.len() as f64
}

#[test]
fn test_shift_resistance_adler() {
    let fraction = shared_descriptor_fraction(adler(64, 1024, 64, 16 * 1024));
    assert!(fraction > 0.9, "only {:.2} of chunks survived", fraction);
}

#[test]
fn test_shift_resistance_additive() {
    let fraction = shared_descriptor_fraction(additive(64, 1024, 64, 16 * 1024));
    assert!(fraction > 0.9, "only {:.2} of chunks survived", fraction);
}

// ============================================================================
// Hashing
// ============================================================================

#[test]
fn test_every_builtin_algorithm() {
    let data = noise(4096, 5);
    for alg in rollchunk::HashAlgorithm::ALL {
        let chunker = Chunker::new(adler(32, 256, 0, 1024).with_hash_algorithm(alg.name())).unwrap();
        for chunk in chunker.chunk_bytes(data.clone()).unwrap() {
            assert_eq!(chunk.hash().len(), alg.output_size());
            assert!(chunk.descriptor.verify(&chunk.data, &DigestHasher).unwrap());
        }
    }
}

#[test]
fn test_unsupported_algorithm_is_fatal() {
    let chunker = Chunker::new(ChunkConfig::default().with_hash_algorithm("sha3-999")).unwrap();
    let results: Vec<_> = chunker.chunk(noise(10_000, 1)).collect();

    assert_eq!(results.len(), 1, "pass must stop at the first failure");
    match &results[0] {
        Err(ChunkError::UnsupportedAlgorithm { name }) => assert_eq!(name, "sha3-999"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_custom_hasher() {
    let length_hasher = |data: &[u8], _: &str| -> Result<ChunkHash, ChunkError> {
        Ok(ChunkHash::from_slice(&(data.len() as u32).to_be_bytes()).unwrap())
    };
    let chunker = Chunker::with_hasher(additive(4, 4, 0, 8), length_hasher).unwrap();
    let chunks = chunker.chunk_bytes(vec![1u8, 1, 1, 1, 5]).unwrap();
    assert_eq!(chunks[0].descriptor.hash_hex(), "00000004");
    assert_eq!(chunks[1].descriptor.hash_hex(), "00000001");
}

// ============================================================================
// Edge Cases and Error Conditions
// ============================================================================

#[test]
fn test_config_validation() {
    assert!(ChunkConfig::new(0, 16, 0, 64).is_err(), "zero window should be invalid");
    assert!(ChunkConfig::new(4, 16, 65, 64).is_err(), "min > max should be invalid");
    assert!(ChunkConfig::new(128, 16, 0, 64).is_err(), "max < window should be invalid");

    let unchecked = ChunkConfig::default().with_max_size(1);
    assert!(matches!(
        Chunker::new(unchecked),
        Err(ChunkError::InvalidConfig { .. })
    ));
}

#[test]
fn test_chunk_reader_from_file() {
    use std::io::{Seek, SeekFrom, Write};

    let data = noise(30_000, 21);
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&data).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let chunker = Chunker::new(adler(32, 512, 64, 4096)).unwrap();
    let from_file: Vec<Chunk> = chunker
        .chunk_reader(file)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(from_file, chunker.chunk_bytes(data).unwrap());
}

#[test]
fn test_window_larger_than_input() {
    let chunker = Chunker::new(ChunkConfig::default()).unwrap();
    let data = noise(100, 11);
    let chunks = chunker.chunk_bytes(data.clone()).unwrap();
    let total: usize = chunks.iter().map(|c| c.len()).sum();
    assert_eq!(total, data.len());
}
