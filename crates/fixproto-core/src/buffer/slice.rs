use super::{clamp_u32, ReadBuffer, WriteBuffer};

/// A read buffer over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceReader<'a> {
    /// Creates a reader positioned at the start of `data`
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// The bytes not yet consumed
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl ReadBuffer for SliceReader<'_> {
    fn size(&self) -> u32 {
        clamp_u32(self.data.len() - self.position)
    }

    fn max_size(&self) -> u32 {
        clamp_u32(self.data.len())
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    fn advance(&mut self) -> bool {
        self.advance_by(1)
    }

    fn advance_by(&mut self, n: u32) -> bool {
        let target = self.position.saturating_add(n as usize);
        if target > self.data.len() {
            return false;
        }
        self.position = target;
        true
    }

    fn pop(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }
}

/// A write buffer over a borrowed mutable byte slice
#[derive(Debug)]
pub struct SliceWriter<'a> {
    data: &'a mut [u8],
    position: usize,
}

impl<'a> SliceWriter<'a> {
    /// Creates a writer that fills `data` from the start
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// The bytes written so far
    pub fn written(&self) -> &[u8] {
        &self.data[..self.position]
    }

    /// Gives the slice back along with the number of bytes written
    pub fn into_inner(self) -> (&'a mut [u8], usize) {
        (self.data, self.position)
    }
}

impl WriteBuffer for SliceWriter<'_> {
    fn clear(&mut self) {
        self.position = 0;
    }

    fn size(&self) -> u32 {
        clamp_u32(self.position)
    }

    fn max_size(&self) -> u32 {
        clamp_u32(self.data.len())
    }

    fn available_size(&self) -> u32 {
        clamp_u32(self.data.len() - self.position)
    }

    fn push(&mut self, byte: u8) -> bool {
        match self.data.get_mut(self.position) {
            Some(slot) => {
                *slot = byte;
                self.position += 1;
                true
            }
            None => false,
        }
    }

    fn push_slice(&mut self, bytes: &[u8]) -> bool {
        let end = self.position + bytes.len();
        if end > self.data.len() {
            return false;
        }
        self.data[self.position..end].copy_from_slice(bytes);
        self.position = end;
        true
    }
}
