//! Fixed-capacity `string` and `bytes` fields.
//!
//! Both hold up to `N` bytes inline plus a length. The bounds-checked API
//! ([`get`](StringBytes::get), [`set`](StringBytes::set)) is the primary one
//! and reports failures. Indexing is the permissive path: reads past the end
//! clamp to the last slot, writes clamp the same way and grow the length to
//! cover the written index.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::str::Utf8Error;

use crate::buffer::{ReadBuffer, WriteBuffer};
#[cfg(feature = "debug-dump")]
use crate::dump::{open_field, write_hex_list, write_quoted, StringView};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::fmt::debug;
use crate::wire::{self, WireType};

/// Whether a [`StringBytes`] holds text or raw bytes
pub trait Flavor {
    /// True for `string` fields
    const IS_TEXT: bool;
}

/// The two flavors
pub mod flavor {
    /// `string`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Text {}

    /// `bytes`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Binary {}

    impl super::Flavor for Text {
        const IS_TEXT: bool = true;
    }

    impl super::Flavor for Binary {
        const IS_TEXT: bool = false;
    }
}

/// A length-delimited field of at most `N` bytes
pub struct StringBytes<const N: usize, F> {
    data: [u8; N],
    len: usize,
    _flavor: PhantomData<F>,
}

/// `string` field holding at most `N` bytes of UTF-8
pub type FieldString<const N: usize> = StringBytes<N, flavor::Text>;

/// `bytes` field holding at most `N` bytes
pub type FieldBytes<const N: usize> = StringBytes<N, flavor::Binary>;

impl<const N: usize, F: Flavor> StringBytes<N, F> {
    /// Creates an empty field
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            len: 0,
            _flavor: PhantomData,
        }
    }

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the field holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity in bytes
    pub const fn max_len(&self) -> usize {
        N
    }

    /// The stored bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Byte at `index`, or [`Error::IndexOutOfBound`] past the current length
    pub fn get(&self, index: usize) -> Result<u8> {
        self.as_bytes()
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBound)
    }

    /// Replaces the content with `bytes`
    ///
    /// Nothing is written when `bytes` is longer than `N`.
    pub fn set(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > N {
            return Err(Error::ArrayFull);
        }
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        Ok(())
    }

    /// Empties the field
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Worst-case bytes written by [`Field::serialize_with_id`] for `field_number`
    pub const fn max_serialized_size(field_number: u32) -> u32 {
        wire::tag_size(field_number) + Self::MAX_PAYLOAD_SIZE
    }

    /// Length prefix plus `N` bytes
    pub(crate) const MAX_PAYLOAD_SIZE: u32 = wire::varint_size(N as u64) + N as u32;

    fn clamp(index: usize) -> usize {
        const { assert!(N > 0, "indexing needs a capacity of at least one byte") };
        index.min(N - 1)
    }
}

impl<const N: usize> StringBytes<N, flavor::Text> {
    /// Replaces the content with as much of `text` as fits
    ///
    /// The cut backs off to a `char` boundary so the content stays UTF-8.
    pub fn set_str(&mut self, text: &str) {
        let mut take = text.len().min(N);
        while !text.is_char_boundary(take) {
            take -= 1;
        }
        self.data[..take].copy_from_slice(&text.as_bytes()[..take]);
        self.len = take;
    }

    /// The content as text
    ///
    /// Fails if a peer sent bytes that are not UTF-8.
    pub fn as_str(&self) -> core::result::Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }
}

impl<const N: usize, F: Flavor> Default for StringBytes<N, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, F> Clone for StringBytes<N, F> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            len: self.len,
            _flavor: PhantomData,
        }
    }
}

impl<const N: usize, F: Flavor> PartialEq for StringBytes<N, F> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize, F: Flavor> Eq for StringBytes<N, F> {}

impl<const N: usize, F: Flavor> fmt::Debug for StringBytes<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if F::IS_TEXT {
            if let Ok(text) = core::str::from_utf8(self.as_bytes()) {
                return fmt::Debug::fmt(text, f);
            }
        }
        fmt::Debug::fmt(self.as_bytes(), f)
    }
}

/// Indexing clamps to the last slot instead of panicking. A zero-capacity
/// field has no slot to clamp to, so indexing one does not compile:
///
/// ```compile_fail
/// let bytes = fixproto_core::FieldBytes::<0>::new();
/// let _byte: u8 = bytes[0];
/// ```
impl<const N: usize, F: Flavor> Index<usize> for StringBytes<N, F> {
    type Output = u8;

    /// Clamps `index` to the last slot of the capacity
    fn index(&self, index: usize) -> &u8 {
        &self.data[Self::clamp(index)]
    }
}

impl<const N: usize, F: Flavor> IndexMut<usize> for StringBytes<N, F> {
    /// Clamps `index` to the last slot and grows the length to cover it
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        let index = Self::clamp(index);
        if index >= self.len {
            self.len = index + 1;
        }
        &mut self.data[index]
    }
}

impl<const N: usize, F: Flavor> Field for StringBytes<N, F> {
    fn serialize_with_id(
        &self,
        field_number: u32,
        buffer: &mut dyn WriteBuffer,
        optional: bool,
    ) -> Result<()> {
        if self.is_empty() && !optional {
            return Ok(());
        }
        wire::serialize_tag(field_number, WireType::LengthDelimited, buffer)?;
        wire::serialize_varint(self.len as u64, buffer)?;
        if !buffer.push_slice(self.as_bytes()) {
            debug!(
                field_number,
                needed = self.len,
                available = buffer.available_size(),
                "no room for length-delimited payload"
            );
            return Err(Error::BufferFull);
        }
        Ok(())
    }

    fn serialize(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        if buffer.push_slice(self.as_bytes()) {
            Ok(())
        } else {
            Err(Error::BufferFull)
        }
    }

    /// Reads a length prefix and that many bytes, replacing the content
    fn deserialize(&mut self, buffer: &mut dyn ReadBuffer) -> Result<()> {
        let length = wire::deserialize_varint32(buffer)? as usize;
        if length > N {
            return Err(Error::ArrayFull);
        }

        self.clear();
        for slot in &mut self.data[..length] {
            *slot = buffer.pop().ok_or(Error::EndOfBuffer)?;
            self.len += 1;
        }
        Ok(())
    }

    fn deserialize_check_type(
        &mut self,
        buffer: &mut dyn ReadBuffer,
        wire_type: WireType,
    ) -> Result<()> {
        if wire_type != WireType::LengthDelimited {
            return Err(Error::InvalidWireType);
        }
        self.deserialize(buffer)
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    #[cfg(feature = "debug-dump")]
    fn dump<'a>(
        &self,
        mut view: StringView<'a>,
        indent: usize,
        name: Option<&str>,
        first: bool,
    ) -> StringView<'a> {
        open_field(&mut view, indent, name, first);
        if F::IS_TEXT {
            write_quoted(&mut view, self.as_bytes());
        } else {
            write_hex_list(&mut view, self.as_bytes());
        }
        view
    }
}
