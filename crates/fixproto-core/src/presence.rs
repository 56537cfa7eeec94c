//! Presence tracking for `optional` fields.
//!
//! One bit per optional field, packed into `u32` words. A set bit means the
//! field goes on the wire even when it holds its default value. Size the
//! bitmap with [`words_for`]:
//!
//! ```
//! use fixproto_core::presence::{words_for, Presence};
//!
//! let mut presence = Presence::<{ words_for(3) }>::new();
//! presence.set(2);
//! assert!(presence.is_set(2));
//! assert!(!presence.is_set(0));
//! ```

/// Number of `u32` words needed for `fields` presence bits
pub const fn words_for(fields: usize) -> usize {
    fields.div_ceil(32)
}

/// A bitmap of `W` words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Presence<const W: usize> {
    words: [u32; W],
}

impl<const W: usize> Presence<W> {
    /// Creates a bitmap with every bit clear
    pub const fn new() -> Self {
        Self { words: [0; W] }
    }

    /// Tests bit `index`; bits past the capacity read as clear
    pub fn is_set(&self, index: usize) -> bool {
        self.words
            .get(index / 32)
            .is_some_and(|word| word & Self::mask(index) != 0)
    }

    /// Sets bit `index`
    pub fn set(&mut self, index: usize) {
        if let Some(word) = self.words.get_mut(index / 32) {
            *word |= Self::mask(index);
        }
    }

    /// Clears bit `index`
    pub fn clear(&mut self, index: usize) {
        if let Some(word) = self.words.get_mut(index / 32) {
            *word &= !Self::mask(index);
        }
    }

    /// Clears every bit
    pub fn clear_all(&mut self) {
        self.words = [0; W];
    }

    /// True if any bit is set
    pub fn any(&self) -> bool {
        self.words.iter().any(|&word| word != 0)
    }

    fn mask(index: usize) -> u32 {
        1 << (index % 32)
    }
}

impl<const W: usize> Default for Presence<W> {
    fn default() -> Self {
        Self::new()
    }
}
