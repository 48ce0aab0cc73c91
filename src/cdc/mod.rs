//! Content-Defined Chunking (CDC) primitives.
//!
//! This module contains the boundary decision engine: a rolling checksum
//! over the last `W` bytes and the rule that turns its value into chunk
//! boundaries.
//!
//! - [`RollingChecksum`] - Tagged rolling checksum (additive or Adler-64)
//! - [`BoundaryPolicy`] - Content match / size cap / end of input rule

mod additive;
mod adler;
mod policy;

pub use additive::AdditiveSum;
pub use adler::{Adler64, MOD_ADLER};
pub use policy::{BoundaryPolicy, BoundaryReason};

use crate::config::RollingStrategy;

/// Rolling checksum state for one chunking pass.
///
/// Invariant: after `i` bytes have been fed, the state reflects exactly the
/// bytes `[i - W, i)`, or `[0, i)` while `i < W`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollingChecksum {
    /// Plain window sum.
    Additive(AdditiveSum),
    /// Two-accumulator Adler-64.
    Adler(Adler64),
}

impl RollingChecksum {
    /// Creates an empty checksum for the given strategy and window width.
    pub fn new(strategy: RollingStrategy, window: usize) -> Self {
        match strategy {
            RollingStrategy::Additive => RollingChecksum::Additive(AdditiveSum::new(window)),
            RollingStrategy::Adler => RollingChecksum::Adler(Adler64::new(window)),
        }
    }

    /// Seeds the checksum over the first `min(window, data.len())` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use rollchunk::{RollingChecksum, RollingStrategy};
    ///
    /// let sum = RollingChecksum::init(RollingStrategy::Additive, b"\x01\x02\x03\x04\x05", 4);
    /// assert_eq!(sum.value(), 10);
    /// ```
    pub fn init(strategy: RollingStrategy, data: &[u8], window: usize) -> Self {
        let mut state = Self::new(strategy, window);
        for &byte in &data[..window.min(data.len())] {
            state.push(byte);
        }
        state
    }

    /// Adds a byte while the window is still filling.
    #[inline]
    pub fn push(&mut self, entering: u8) {
        match self {
            RollingChecksum::Additive(s) => s.push(entering),
            RollingChecksum::Adler(s) => s.push(entering),
        }
    }

    /// Removes `leaving` from the trailing edge and adds `entering`.
    #[inline]
    pub fn advance(&mut self, leaving: u8, entering: u8) {
        match self {
            RollingChecksum::Additive(s) => s.roll(leaving, entering),
            RollingChecksum::Adler(s) => s.roll(leaving, entering),
        }
    }

    /// Feeds byte `i` of `data`: seeds while `i < W`, rolls afterwards.
    ///
    /// Bytes must be fed in order starting from 0.
    #[inline]
    pub fn feed(&mut self, data: &[u8], i: usize) {
        let window = self.window();
        if i < window {
            self.push(data[i]);
        } else {
            self.advance(data[i - window], data[i]);
        }
    }

    /// Returns the comparison key handed to the boundary policy.
    #[inline]
    pub fn value(&self) -> u64 {
        match self {
            RollingChecksum::Additive(s) => s.value(),
            RollingChecksum::Adler(s) => s.value(),
        }
    }

    /// Returns the window width.
    pub fn window(&self) -> usize {
        match self {
            RollingChecksum::Additive(s) => s.window(),
            RollingChecksum::Adler(s) => s.window(),
        }
    }

    /// Returns the strategy this checksum implements.
    pub fn strategy(&self) -> RollingStrategy {
        match self {
            RollingChecksum::Additive(_) => RollingStrategy::Additive,
            RollingChecksum::Adler(_) => RollingStrategy::Adler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_short_buffer() {
        let sum = RollingChecksum::init(RollingStrategy::Additive, &[5, 5], 8);
        assert_eq!(sum.value(), 10);
    }

    #[test]
    fn test_feed_equals_init_at_every_position() {
        let data: Vec<u8> = (0..200).map(|i| (i * 13 % 251) as u8).collect();
        let w = 16;

        for strategy in [RollingStrategy::Additive, RollingStrategy::Adler] {
            let mut state = RollingChecksum::new(strategy, w);
            for i in 0..data.len() {
                state.feed(&data, i);
                let start = (i + 1).saturating_sub(w);
                let expected = RollingChecksum::init(strategy, &data[start..=i], w);
                assert_eq!(state.value(), expected.value(), "{} at {}", strategy, i);
            }
        }
    }

    #[test]
    fn test_adler_value_layout() {
        // a = 1 + 1 + 2 + 3 = 7, b = 2 + 4 + 7 = 13; `a` in the high half.
        let sum = RollingChecksum::init(RollingStrategy::Adler, &[1, 2, 3], 3);
        assert_eq!(sum.value(), (7 << 32) | 13);
        assert_eq!(sum.value() % 16, 13);
    }

    #[test]
    fn test_strategy_roundtrip() {
        let c = RollingChecksum::new(RollingStrategy::Adler, 4);
        assert_eq!(c.strategy(), RollingStrategy::Adler);
        assert_eq!(c.window(), 4);
    }
}
