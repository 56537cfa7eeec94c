use super::{clamp_u32, ReadBuffer, WriteBuffer};

/// A write buffer backed by an inline array of `N` bytes
#[derive(Debug, Clone)]
pub struct WriteBufferFixed<const N: usize> {
    data: [u8; N],
    write_index: usize,
}

impl<const N: usize> WriteBufferFixed<N> {
    /// Creates an empty buffer
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            write_index: 0,
        }
    }

    /// The bytes written so far
    pub fn data(&self) -> &[u8] {
        &self.data[..self.write_index]
    }
}

impl<const N: usize> Default for WriteBufferFixed<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> WriteBuffer for WriteBufferFixed<N> {
    fn clear(&mut self) {
        self.write_index = 0;
    }

    fn size(&self) -> u32 {
        clamp_u32(self.write_index)
    }

    fn max_size(&self) -> u32 {
        clamp_u32(N)
    }

    fn available_size(&self) -> u32 {
        clamp_u32(N - self.write_index)
    }

    fn push(&mut self, byte: u8) -> bool {
        match self.data.get_mut(self.write_index) {
            Some(slot) => {
                *slot = byte;
                self.write_index += 1;
                true
            }
            None => false,
        }
    }

    fn push_slice(&mut self, bytes: &[u8]) -> bool {
        let end = self.write_index + bytes.len();
        if end > N {
            return false;
        }
        self.data[self.write_index..end].copy_from_slice(bytes);
        self.write_index = end;
        true
    }
}

/// A read buffer backed by an inline array of `N` bytes
///
/// Fill it with [`push`](Self::push), or write into [`data_mut`](Self::data_mut)
/// directly (a DMA target, say) and then call
/// [`set_bytes_written`](Self::set_bytes_written).
#[derive(Debug, Clone)]
pub struct ReadBufferFixed<const N: usize> {
    data: [u8; N],
    write_index: usize,
    read_index: usize,
}

impl<const N: usize> ReadBufferFixed<N> {
    /// Creates an empty buffer
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            write_index: 0,
            read_index: 0,
        }
    }

    /// The whole backing array, for filling in place
    pub fn data_mut(&mut self) -> &mut [u8; N] {
        &mut self.data
    }

    /// Marks the first `n` bytes of the backing array as readable
    pub fn set_bytes_written(&mut self, n: usize) {
        self.write_index = n.min(N);
        self.read_index = self.read_index.min(self.write_index);
    }

    /// Append one byte to the readable data; false when full
    pub fn push(&mut self, byte: u8) -> bool {
        match self.data.get_mut(self.write_index) {
            Some(slot) => {
                *slot = byte;
                self.write_index += 1;
                true
            }
            None => false,
        }
    }

    /// Forget all data and rewind
    pub fn clear(&mut self) {
        self.read_index = 0;
        self.write_index = 0;
    }
}

impl<const N: usize> Default for ReadBufferFixed<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ReadBuffer for ReadBufferFixed<N> {
    fn size(&self) -> u32 {
        clamp_u32(self.write_index - self.read_index)
    }

    fn max_size(&self) -> u32 {
        clamp_u32(N)
    }

    fn peek(&self) -> Option<u8> {
        self.data[..self.write_index].get(self.read_index).copied()
    }

    fn advance(&mut self) -> bool {
        self.advance_by(1)
    }

    fn advance_by(&mut self, n: u32) -> bool {
        let target = self.read_index.saturating_add(n as usize);
        if target > self.write_index {
            return false;
        }
        self.read_index = target;
        true
    }

    fn pop(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.read_index += 1;
        Some(byte)
    }
}
