//! Low-level protobuf wire format primitives.
//!
//! Everything on the wire is built from four encodings:
//!
//! - varints: 7 bits per byte, least significant group first, high bit set on
//!   every byte but the last
//! - zigzag: maps signed integers onto unsigned ones so small magnitudes stay
//!   short as varints
//! - fixed32 / fixed64: little-endian, written and read a byte at a time
//! - length-delimited: a varint byte count followed by that many bytes
//!
//! Each field is preceded by a tag, `(field_number << 3) | wire_type`, itself
//! written as a varint.
//!
//! Wire types:
//! - 0: VARINT (int32, int64, uint32, uint64, sint32, sint64, bool, enum)
//! - 1: FIXED64 (fixed64, sfixed64, double)
//! - 2: LENGTH_DELIMITED (string, bytes, embedded messages, packed repeated fields)
//! - 5: FIXED32 (fixed32, sfixed32, float)
//!
//! The functions here are stateless and never allocate. They fail closed on
//! buffer exhaustion.

use crate::buffer::{ReadBuffer, WriteBuffer};
use crate::error::{Error, Result};
use crate::fmt::trace;

/// Protobuf wire types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// Variable-length integer
    Varint = 0,
    /// 64-bit fixed-width
    Fixed64 = 1,
    /// Length-delimited (strings, bytes, embedded messages, packed arrays)
    LengthDelimited = 2,
    /// Start group (deprecated, never dispatched)
    StartGroup = 3,
    /// End group (deprecated, never dispatched)
    EndGroup = 4,
    /// 32-bit fixed-width
    Fixed32 = 5,
}

impl TryFrom<u8> for WireType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::Fixed32),
            _ => Err(Error::InvalidWireType),
        }
    }
}

/// Field number reserved to mean "no field", never valid on the wire
pub const FIELD_NUMBER_NOT_SET: u32 = 0;

/// Maximum valid protobuf field number (2^29 - 1)
pub const MAX_VALID_NUMBER: u32 = 536_870_911;

/// Maximum encoded width of a 32-bit varint
pub const MAX_VARINT32_BYTES: u32 = 5;

/// Maximum encoded width of a 64-bit varint
pub const MAX_VARINT64_BYTES: u32 = 10;

const VARINT_CONTINUATION: u8 = 0x80;
const VARINT_PAYLOAD: u8 = 0x7F;

/// A decoded field tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    /// The field number
    pub field_number: u32,
    /// How the payload that follows is framed
    pub wire_type: WireType,
}

impl Tag {
    /// Creates a tag
    pub const fn new(field_number: u32, wire_type: WireType) -> Self {
        Self {
            field_number,
            wire_type,
        }
    }

    /// The raw tag value, `(field_number << 3) | wire_type`
    pub const fn to_raw(self) -> u32 {
        make_tag(self.field_number, self.wire_type)
    }

    /// Splits a raw tag value into field number and wire type
    pub fn from_raw(raw: u32) -> Result<Self> {
        let wire_type = WireType::try_from((raw & 0x07) as u8)?;
        Ok(Self::new(raw >> 3, wire_type))
    }
}

/// Combines a field number and wire type into a raw tag value
pub const fn make_tag(field_number: u32, wire_type: WireType) -> u32 {
    (field_number << 3) | wire_type as u32
}

/// Number of bytes the tag for `field_number` occupies
///
/// The wire type lives in the low three bits, so it never changes the size.
pub const fn tag_size(field_number: u32) -> u32 {
    varint_size((field_number as u64) << 3)
}

/// Writes the tag for `field_number` / `wire_type`
pub fn serialize_tag(
    field_number: u32,
    wire_type: WireType,
    buffer: &mut dyn WriteBuffer,
) -> Result<()> {
    serialize_varint(u64::from(make_tag(field_number, wire_type)), buffer)
}

/// Reads the next tag
///
/// Returns [`Error::EndOfBuffer`] when the buffer is empty, which the message
/// decode loop treats as the end of the message.
pub fn deserialize_tag(buffer: &mut dyn ReadBuffer) -> Result<Tag> {
    let raw = deserialize_varint32(buffer)?;
    Tag::from_raw(raw)
}

/// Writes `value` as a base-128 varint
pub fn serialize_varint(mut value: u64, buffer: &mut dyn WriteBuffer) -> Result<()> {
    while value >= u64::from(VARINT_CONTINUATION) {
        let byte = (value as u8) | VARINT_CONTINUATION;
        if !buffer.push(byte) {
            return Err(Error::BufferFull);
        }
        value >>= 7;
    }
    if buffer.push(value as u8) {
        Ok(())
    } else {
        Err(Error::BufferFull)
    }
}

/// Number of bytes `value` occupies as a varint
pub const fn varint_size(value: u64) -> u32 {
    let mut size = 1;
    let mut rest = value >> 7;
    while rest != 0 {
        size += 1;
        rest >>= 7;
    }
    size
}

fn deserialize_varint(buffer: &mut dyn ReadBuffer, max_bytes: u32) -> Result<u64> {
    let mut result: u64 = 0;
    let mut shift = 0u32;

    for _ in 0..max_bytes {
        let byte = buffer.pop().ok_or(Error::EndOfBuffer)?;
        result |= u64::from(byte & VARINT_PAYLOAD) << shift;
        if byte & VARINT_CONTINUATION == 0 {
            return Ok(result);
        }
        shift += 7;
    }

    Err(Error::OverlongVarint)
}

/// Reads a varint of at most 5 bytes
///
/// Bits beyond the 32nd are dropped, as protobuf parsers do for 32-bit fields.
pub fn deserialize_varint32(buffer: &mut dyn ReadBuffer) -> Result<u32> {
    deserialize_varint(buffer, MAX_VARINT32_BYTES).map(|v| v as u32)
}

/// Reads a varint of at most 10 bytes
pub fn deserialize_varint64(buffer: &mut dyn ReadBuffer) -> Result<u64> {
    deserialize_varint(buffer, MAX_VARINT64_BYTES)
}

/// Zigzag-encodes a signed 32-bit value: 0, -1, 1, -2 ... map to 0, 1, 2, 3 ...
pub const fn zigzag_encode32(n: i32) -> u32 {
    ((n as u32) << 1) ^ ((n >> 31) as u32)
}

/// Zigzag-encodes a signed 64-bit value
pub const fn zigzag_encode64(n: i64) -> u64 {
    ((n as u64) << 1) ^ ((n >> 63) as u64)
}

/// Inverse of [`zigzag_encode32`]
pub const fn zigzag_decode32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

/// Inverse of [`zigzag_encode64`]
pub const fn zigzag_decode64(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

/// Writes 4 bytes, little-endian
pub fn serialize_fixed32(value: u32, buffer: &mut dyn WriteBuffer) -> Result<()> {
    for byte in value.to_le_bytes() {
        if !buffer.push(byte) {
            return Err(Error::BufferFull);
        }
    }
    Ok(())
}

/// Writes 8 bytes, little-endian
pub fn serialize_fixed64(value: u64, buffer: &mut dyn WriteBuffer) -> Result<()> {
    for byte in value.to_le_bytes() {
        if !buffer.push(byte) {
            return Err(Error::BufferFull);
        }
    }
    Ok(())
}

/// Reads 4 bytes, little-endian
pub fn deserialize_fixed32(buffer: &mut dyn ReadBuffer) -> Result<u32> {
    let mut bytes = [0u8; 4];
    for slot in &mut bytes {
        *slot = buffer.pop().ok_or(Error::EndOfBuffer)?;
    }
    Ok(u32::from_le_bytes(bytes))
}

/// Reads 8 bytes, little-endian
pub fn deserialize_fixed64(buffer: &mut dyn ReadBuffer) -> Result<u64> {
    let mut bytes = [0u8; 8];
    for slot in &mut bytes {
        *slot = buffer.pop().ok_or(Error::EndOfBuffer)?;
    }
    Ok(u64::from_le_bytes(bytes))
}

/// Skips the payload of a field nobody claimed
///
/// Unknown fields are dropped so that older firmware can read messages from
/// newer peers. Group wire types are rejected since nothing can frame them.
pub fn skip_unknown_field(buffer: &mut dyn ReadBuffer, wire_type: WireType) -> Result<()> {
    trace!(?wire_type, "skipping unknown field");

    match wire_type {
        WireType::Varint => deserialize_varint64(buffer).map(|_| ()),
        WireType::Fixed64 => advance_or_eob(buffer, 8),
        WireType::Fixed32 => advance_or_eob(buffer, 4),
        WireType::LengthDelimited => {
            let length = deserialize_varint32(buffer)?;
            advance_or_eob(buffer, length)
        }
        WireType::StartGroup | WireType::EndGroup => Err(Error::InvalidWireType),
    }
}

fn advance_or_eob(buffer: &mut dyn ReadBuffer, n: u32) -> Result<()> {
    if buffer.advance_by(n) {
        Ok(())
    } else {
        Err(Error::EndOfBuffer)
    }
}
