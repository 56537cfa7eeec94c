//! Adapters between the buffer contracts and the `bytes` crate.
//!
//! Pairing [`BufWriter`] with a growable target such as `BytesMut` gives up the
//! fixed-capacity guarantee, since `remaining_mut()` then reports a huge
//! limit. Use `&mut [u8]` as the target to keep the bound.

use super::{clamp_u32, ReadBuffer, WriteBuffer};
use ::bytes::{Buf, BufMut};

/// Reads from any [`bytes::Buf`]
#[derive(Debug)]
pub struct BufReader<B> {
    inner: B,
    max_size: u32,
}

impl<B: Buf> BufReader<B> {
    /// Wraps `inner`; its current `remaining()` becomes the max size
    pub fn new(inner: B) -> Self {
        let max_size = clamp_u32(inner.remaining());
        Self { inner, max_size }
    }

    /// Unwraps the underlying buffer
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Buf> ReadBuffer for BufReader<B> {
    fn size(&self) -> u32 {
        clamp_u32(self.inner.remaining())
    }

    fn max_size(&self) -> u32 {
        self.max_size
    }

    fn peek(&self) -> Option<u8> {
        self.inner.chunk().first().copied()
    }

    fn advance(&mut self) -> bool {
        self.advance_by(1)
    }

    fn advance_by(&mut self, n: u32) -> bool {
        let n = n as usize;
        if n > self.inner.remaining() {
            return false;
        }
        self.inner.advance(n);
        true
    }

    fn pop(&mut self) -> Option<u8> {
        if !self.inner.has_remaining() {
            return None;
        }
        Some(self.inner.get_u8())
    }
}

/// Writes into any [`bytes::BufMut`], bounded by its `remaining_mut()`
#[derive(Debug)]
pub struct BufWriter<B> {
    inner: B,
    written: u32,
}

impl<B: BufMut> BufWriter<B> {
    /// Wraps `inner`
    pub fn new(inner: B) -> Self {
        Self { inner, written: 0 }
    }

    /// Unwraps the underlying buffer
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: BufMut> WriteBuffer for BufWriter<B> {
    /// Only resets the byte count; `BufMut` cannot rewind
    fn clear(&mut self) {
        self.written = 0;
    }

    fn size(&self) -> u32 {
        self.written
    }

    fn max_size(&self) -> u32 {
        self.written.saturating_add(self.available_size())
    }

    fn available_size(&self) -> u32 {
        clamp_u32(self.inner.remaining_mut())
    }

    fn push(&mut self, byte: u8) -> bool {
        if !self.inner.has_remaining_mut() {
            return false;
        }
        self.inner.put_u8(byte);
        self.written = self.written.saturating_add(1);
        true
    }

    fn push_slice(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() > self.inner.remaining_mut() {
            return false;
        }
        self.inner.put_slice(bytes);
        self.written = self.written.saturating_add(clamp_u32(bytes.len()));
        true
    }
}
