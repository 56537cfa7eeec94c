//! Byte sources and sinks.
//!
//! The engine never owns storage. It reads from a [`ReadBuffer`] and writes
//! to a [`WriteBuffer`], both supplied by the caller with a fixed capacity.
//! Both contracts report failure with a plain `bool`; the engine turns that
//! into [`Error::BufferFull`](crate::Error::BufferFull) or
//! [`Error::EndOfBuffer`](crate::Error::EndOfBuffer).
//!
//! Implementations shipped here:
//!
//! - [`WriteBufferFixed`] / [`ReadBufferFixed`]: inline arrays sized by a const generic
//! - [`SliceWriter`] / [`SliceReader`]: borrowed slices
//! - [`ReadBufferSection`]: a bounded view used for nested, length-delimited content
//! - [`SizeCalculator`]: a counting sink for the size-then-serialize protocol
//! - `BufReader` / `BufWriter`: adapters for the `bytes` crate (feature `bytes`)

#[cfg(feature = "bytes")]
mod bytes;
mod calculator;
mod fixed;
mod section;
mod slice;

#[cfg(feature = "bytes")]
pub use self::bytes::{BufReader, BufWriter};
pub use calculator::SizeCalculator;
pub use fixed::{ReadBufferFixed, WriteBufferFixed};
pub use section::ReadBufferSection;
pub use slice::{SliceReader, SliceWriter};

/// A capacity-bounded sink for serialized bytes
pub trait WriteBuffer {
    /// Discard everything written so far
    fn clear(&mut self);

    /// Number of bytes written
    fn size(&self) -> u32;

    /// Total capacity in bytes
    fn max_size(&self) -> u32;

    /// Number of bytes that can still be written
    fn available_size(&self) -> u32;

    /// Append one byte; false when there is no room
    fn push(&mut self, byte: u8) -> bool;

    /// Append all of `bytes`; false, with nothing written, when they do not fit
    fn push_slice(&mut self, bytes: &[u8]) -> bool;
}

/// A source of serialized bytes, consumed front to back
pub trait ReadBuffer {
    /// Number of bytes left to read
    fn size(&self) -> u32;

    /// Total capacity in bytes
    fn max_size(&self) -> u32;

    /// The next byte without consuming it
    fn peek(&self) -> Option<u8>;

    /// Skip one byte; false when empty
    fn advance(&mut self) -> bool;

    /// Skip `n` bytes; false, with nothing skipped, when fewer than `n` remain
    fn advance_by(&mut self, n: u32) -> bool;

    /// Consume and return the next byte
    fn pop(&mut self) -> Option<u8>;
}

impl<W: WriteBuffer + ?Sized> WriteBuffer for &mut W {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn size(&self) -> u32 {
        (**self).size()
    }

    fn max_size(&self) -> u32 {
        (**self).max_size()
    }

    fn available_size(&self) -> u32 {
        (**self).available_size()
    }

    fn push(&mut self, byte: u8) -> bool {
        (**self).push(byte)
    }

    fn push_slice(&mut self, bytes: &[u8]) -> bool {
        (**self).push_slice(bytes)
    }
}

impl<R: ReadBuffer + ?Sized> ReadBuffer for &mut R {
    fn size(&self) -> u32 {
        (**self).size()
    }

    fn max_size(&self) -> u32 {
        (**self).max_size()
    }

    fn peek(&self) -> Option<u8> {
        (**self).peek()
    }

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn advance_by(&mut self, n: u32) -> bool {
        (**self).advance_by(n)
    }

    fn pop(&mut self) -> Option<u8> {
        (**self).pop()
    }
}

/// Clamp a `usize` length into the `u32` domain used by the buffer contracts
pub(crate) fn clamp_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
