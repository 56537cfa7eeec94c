//! Fixed-capacity repeated fields.
//!
//! Whether a repeated field is packed is decided by its element type:
//! scalars and enums pack, strings, bytes and messages get one tag per
//! element. A packable field still accepts elements that arrive one by one,
//! and every occurrence appends in encounter order, wherever it sits in the
//! stream.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::buffer::{ReadBuffer, ReadBufferSection, WriteBuffer};
#[cfg(feature = "debug-dump")]
use crate::dump::{open_field, StringView};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::fmt::{debug, trace};
use crate::message::Message;
use crate::scalar::{Scalar, ScalarKind};
use crate::string_bytes::{Flavor, StringBytes};
use crate::wire::{self, WireType};

/// A type that can be the element of a [`RepeatedField`]
pub trait RepeatedElement: Field + Default {
    /// True if the field is written as one packed block
    const PACKED: bool;

    /// Largest encoding of one element without its tag, length prefix
    /// included for length-delimited elements
    const MAX_PAYLOAD_SIZE: u32;
}

impl<K: ScalarKind> RepeatedElement for Scalar<K> {
    const PACKED: bool = true;
    const MAX_PAYLOAD_SIZE: u32 = K::MAX_PAYLOAD_SIZE;
}

impl<const N: usize, F: Flavor> RepeatedElement for StringBytes<N, F> {
    const PACKED: bool = false;
    const MAX_PAYLOAD_SIZE: u32 = StringBytes::<N, F>::MAX_PAYLOAD_SIZE;
}

impl<M: Message> RepeatedElement for M {
    const PACKED: bool = false;
    const MAX_PAYLOAD_SIZE: u32 =
        wire::varint_size(M::MAX_SERIALIZED_SIZE as u64) + M::MAX_SERIALIZED_SIZE;
}

/// Up to `N` elements of type `T`, stored inline
pub struct RepeatedField<T, const N: usize> {
    data: [T; N],
    len: usize,
}

impl<T: RepeatedElement, const N: usize> RepeatedField<T, N> {
    /// Creates an empty field
    pub fn new() -> Self {
        Self {
            data: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there are no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity in elements
    pub const fn max_len(&self) -> usize {
        N
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfBound)
    }

    /// Mutable element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfBound)
    }

    /// Stores `value` at `index`, growing the length to cover it
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let slot = self.data.get_mut(index).ok_or(Error::ArrayFull)?;
        *slot = value;
        if index >= self.len {
            self.len = index + 1;
        }
        Ok(())
    }

    /// Appends `value`
    pub fn add(&mut self, value: T) -> Result<()> {
        let slot = self.data.get_mut(self.len).ok_or(Error::ArrayFull)?;
        *slot = value;
        self.len += 1;
        Ok(())
    }

    /// Replaces the content with a copy of `values`
    ///
    /// Nothing changes when `values` is longer than `N`.
    pub fn set_data(&mut self, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        if values.len() > N {
            return Err(Error::ArrayFull);
        }
        self.data[..values.len()].clone_from_slice(values);
        self.len = values.len();
        Ok(())
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        for element in self.as_mut_slice() {
            element.clear();
        }
        self.len = 0;
    }

    /// The elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// The elements as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Iterates over the elements
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Worst-case bytes written by [`Field::serialize_with_id`] for `field_number`
    /// with all `N` elements at their largest
    ///
    /// A packed field pays for one tag and length prefix, an unpacked one for
    /// a tag per element.
    pub const fn max_serialized_size(field_number: u32) -> u32 {
        let elements = N as u32 * T::MAX_PAYLOAD_SIZE;
        if T::PACKED {
            wire::tag_size(field_number) + wire::varint_size(elements as u64) + elements
        } else {
            N as u32 * wire::tag_size(field_number) + elements
        }
    }

    fn clamp(index: usize) -> usize {
        const { assert!(N > 0, "indexing needs a capacity of at least one element") };
        index.min(N - 1)
    }

    fn next_slot(&mut self) -> Result<&mut T> {
        let slot = self.data.get_mut(self.len).ok_or(Error::ArrayFull)?;
        slot.clear();
        Ok(slot)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
    fn read_packed(&mut self, buffer: &mut dyn ReadBuffer) -> Result<()> {
        let size = wire::deserialize_varint32(buffer)?;
        if size > buffer.size() {
            return Err(Error::EndOfBuffer);
        }

        let mut section = ReadBufferSection::new(buffer, size);
        let mut count = 0u32;
        while !section.is_exhausted() {
            self.next_slot()?.deserialize(&mut section)?;
            self.len += 1;
            count += 1;
        }

        trace!(size, count, "decoded packed block");
        Ok(())
    }
}

impl<T: RepeatedElement, const N: usize> Default for RepeatedField<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for RepeatedField<T, N> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            len: self.len,
        }
    }
}

impl<T: RepeatedElement + PartialEq, const N: usize> PartialEq for RepeatedField<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: RepeatedElement + fmt::Debug, const N: usize> fmt::Debug for RepeatedField<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: RepeatedElement, const N: usize> IntoIterator for &'a RepeatedField<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Indexing clamps to the last slot instead of panicking. A zero-capacity
/// field has no slot to clamp to, so indexing one does not compile:
///
/// ```compile_fail
/// use fixproto_core::{RepeatedField, UInt32};
///
/// let values = RepeatedField::<UInt32, 0>::new();
/// let _value: &UInt32 = &values[0];
/// ```
impl<T: RepeatedElement, const N: usize> Index<usize> for RepeatedField<T, N> {
    type Output = T;

    /// Clamps `index` to the last slot of the capacity
    fn index(&self, index: usize) -> &T {
        &self.data[Self::clamp(index)]
    }
}

impl<T: RepeatedElement, const N: usize> IndexMut<usize> for RepeatedField<T, N> {
    /// Clamps `index` to the last slot and grows the length to cover it
    fn index_mut(&mut self, index: usize) -> &mut T {
        let index = Self::clamp(index);
        if index >= self.len {
            self.len = index + 1;
        }
        &mut self.data[index]
    }
}

impl<T: RepeatedElement, const N: usize> Field for RepeatedField<T, N> {
    /// Writes a packed block or one tagged entry per element
    ///
    /// An empty field writes nothing; repeated fields carry no presence.
    fn serialize_with_id(
        &self,
        field_number: u32,
        buffer: &mut dyn WriteBuffer,
        _optional: bool,
    ) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        if T::PACKED {
            let size = self.serialized_size();
            wire::serialize_tag(field_number, WireType::LengthDelimited, buffer)?;
            wire::serialize_varint(u64::from(size), buffer)?;
            if buffer.available_size() < size {
                debug!(
                    field_number,
                    needed = size,
                    available = buffer.available_size(),
                    "no room for packed block"
                );
                return Err(Error::BufferFull);
            }
            self.serialize(buffer)
        } else {
            for element in self.iter() {
                element.serialize_with_id(field_number, buffer, true)?;
            }
            Ok(())
        }
    }

    /// Writes the element payloads back to back, without tags
    fn serialize(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        for element in self.iter() {
            element.serialize(buffer)?;
        }
        Ok(())
    }

    /// Appends every element found in `buffer`, read back to back
    fn deserialize(&mut self, buffer: &mut dyn ReadBuffer) -> Result<()> {
        while buffer.size() > 0 {
            self.next_slot()?.deserialize(buffer)?;
            self.len += 1;
        }
        Ok(())
    }

    fn deserialize_check_type(
        &mut self,
        buffer: &mut dyn ReadBuffer,
        wire_type: WireType,
    ) -> Result<()> {
        if T::PACKED && wire_type == WireType::LengthDelimited {
            return self.read_packed(buffer);
        }

        self.next_slot()?.deserialize_check_type(buffer, wire_type)?;
        self.len += 1;
        Ok(())
    }

    fn clear(&mut self) {
        RepeatedField::clear(self);
    }

    #[cfg(feature = "debug-dump")]
    fn dump<'a>(
        &self,
        mut view: StringView<'a>,
        indent: usize,
        name: Option<&str>,
        first: bool,
    ) -> StringView<'a> {
        use core::fmt::Write;

        open_field(&mut view, indent, name, first);
        let _ = view.write_char('[');
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                let _ = view.write_str(", ");
            }
            view = element.dump(view, indent, None, true);
        }
        let _ = view.write_char(']');
        view
    }
}
