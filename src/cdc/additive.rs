//! Additive window sum.
//!
//! The checksum is the plain sum of the bytes currently in the window,
//! as used by `gzip --rsyncable`. Bytes are treated as unsigned.

/// Sliding sum over the last `window` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditiveSum {
    sum: u64,
    window: usize,
}

impl AdditiveSum {
    /// Creates an empty sum for a window of `window` bytes.
    pub fn new(window: usize) -> Self {
        Self { sum: 0, window }
    }

    /// Adds a byte without removing anything (window still filling).
    #[inline]
    pub fn push(&mut self, entering: u8) {
        self.sum = self.sum.wrapping_add(u64::from(entering));
    }

    /// Slides the window forward by one byte.
    #[inline]
    pub fn roll(&mut self, leaving: u8, entering: u8) {
        self.sum = self
            .sum
            .wrapping_sub(u64::from(leaving))
            .wrapping_add(u64::from(entering));
    }

    /// Returns the current window sum.
    #[inline]
    pub fn value(&self) -> u64 {
        self.sum
    }

    /// Returns the window width.
    pub fn window(&self) -> usize {
        self.window
    }
}
