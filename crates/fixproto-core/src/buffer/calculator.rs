use super::WriteBuffer;

/// A sink that only counts the bytes pushed into it
///
/// Serializing into a `SizeCalculator` yields the exact encoded length of a
/// value without storing anything. Nested messages and packed arrays use it
/// to learn their length prefix before the real write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeCalculator {
    size: u32,
}

impl SizeCalculator {
    /// Creates a calculator with a count of zero
    pub const fn new() -> Self {
        Self { size: 0 }
    }
}

impl WriteBuffer for SizeCalculator {
    fn clear(&mut self) {
        self.size = 0;
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn max_size(&self) -> u32 {
        u32::MAX
    }

    fn available_size(&self) -> u32 {
        u32::MAX
    }

    fn push(&mut self, _byte: u8) -> bool {
        self.size = self.size.saturating_add(1);
        true
    }

    fn push_slice(&mut self, bytes: &[u8]) -> bool {
        self.size = self.size.saturating_add(super::clamp_u32(bytes.len()));
        true
    }
}
