//! Adler-64 rolling checksum.
//!
//! The rsync weak checksum, widened: two accumulators `a` and `b` reduced
//! modulo the prime `2^32 - 5`. `a` is one plus the sum of the window bytes,
//! `b` is the sum of every intermediate `a`. Rolling is O(1):
//!
//! ```text
//! a' = a - leaving + entering                 (mod M)
//! b' = b - leaving * W - 1 + a'               (mod M)
//! ```
//!
//! `b'` consumes the new `a'`, so `a` is always updated first.

/// Largest prime below `2^32`.
pub const MOD_ADLER: u64 = 4_294_967_291;

/// Two-accumulator rolling checksum over the last `window` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adler64 {
    a: u64,
    b: u64,
    window: usize,
    /// `window mod M`, cached for the roll step.
    window_mod: u64,
}

impl Adler64 {
    /// Creates the empty-window state (`a = 1`, `b = 0`).
    pub fn new(window: usize) -> Self {
        Self {
            a: 1,
            b: 0,
            window,
            window_mod: (window as u64) % MOD_ADLER,
        }
    }

    /// Adds a byte without removing anything (window still filling).
    #[inline]
    pub fn push(&mut self, entering: u8) {
        self.a = (self.a + u64::from(entering)) % MOD_ADLER;
        self.b = (self.b + self.a) % MOD_ADLER;
    }

    /// Slides the window forward by one byte.
    ///
    /// Both accumulators stay in `[0, M)`: each subtraction is preceded by
    /// adding `M`, so no intermediate value wraps below zero.
    #[inline]
    pub fn roll(&mut self, leaving: u8, entering: u8) {
        let leaving = u64::from(leaving);
        self.a = (self.a + MOD_ADLER - leaving + u64::from(entering)) % MOD_ADLER;

        let removed = (leaving * self.window_mod + 1) % MOD_ADLER;
        self.b = (self.b + MOD_ADLER - removed + self.a) % MOD_ADLER;
    }

    /// Returns the combined 64-bit key `(a << 32) | b`.
    ///
    /// `b` sits in the low half so that a power-of-two divisor tests the
    /// better mixed accumulator.
    #[inline]
    pub fn value(&self) -> u64 {
        (self.a << 32) | self.b
    }

    /// Returns the `a` accumulator.
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Returns the `b` accumulator.
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Returns the window width.
    pub fn window(&self) -> usize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(window: &[u8]) -> Adler64 {
        let mut state = Adler64::new(window.len());
        for &b in window {
            state.push(b);
        }
        state
    }

    #[test]
    fn test_empty_state() {
        let state = Adler64::new(16);
        assert_eq!(state.a(), 1);
        assert_eq!(state.b(), 0);
        assert_eq!(state.value(), 1 << 32);
    }

    #[test]
    fn test_seed_small_window() {
        // a: 1 -> 2 -> 4 -> 7, b: 2 -> 6 -> 13
        let state = fresh(&[1, 2, 3]);
        assert_eq!(state.a(), 7);
        assert_eq!(state.b(), 13);
    }

    #[test]
    fn test_roll_matches_fresh_seed() {
        let data: Vec<u8> = (0..300u32).map(|i| (i.wrapping_mul(2654435761) >> 7) as u8).collect();
        let w = 32;

        let mut rolling = fresh(&data[..w]);
        for start in 1..=data.len() - w {
            rolling.roll(data[start - 1], data[start + w - 1]);
            let expected = fresh(&data[start..start + w]);
            assert_eq!(rolling.a(), expected.a(), "a at window {}", start);
            assert_eq!(rolling.b(), expected.b(), "b at window {}", start);
        }
    }

    #[test]
    fn test_roll_normalizes_negative_intermediates() {
        // Leaving bytes are large and entering bytes are zero, so the raw
        // recurrence goes negative on every step.
        let mut data = vec![0xFFu8; 8];
        data.extend(std::iter::repeat_n(0u8, 8));

        let mut rolling = fresh(&data[..8]);
        for start in 1..=8 {
            rolling.roll(data[start - 1], data[start + 7]);
            assert!(rolling.a() < MOD_ADLER);
            assert!(rolling.b() < MOD_ADLER);
            let expected = fresh(&data[start..start + 8]);
            assert_eq!(rolling, expected);
        }
        // All-zero window: a = 1, b = W
        assert_eq!(rolling.a(), 1);
        assert_eq!(rolling.b(), 8);
    }
}
