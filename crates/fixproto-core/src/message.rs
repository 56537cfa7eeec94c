//! Messages: framing, the top-level decode loop and debug rendering.
//!
//! A message type lists its fields once, in [`Message::serialize_fields`]
//! and [`Message::deserialize_field`]. Everything else comes from the blanket
//! [`Field`] implementation below: the length-delimited framing used when the
//! message is embedded, size computation through the counting sink, and the
//! tag loop that reads a body.
//!
//! A hand-written message looks like what a code generator would emit:
//!
//! ```
//! use fixproto_core::{
//!     skip_unknown_field, Field, FieldString, Message, ReadBuffer, Result, UInt32,
//!     WireType, WriteBuffer,
//! };
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Reading {
//!     sensor: UInt32,
//!     label: FieldString<16>,
//! }
//!
//! impl Message for Reading {
//!     const MAX_SERIALIZED_SIZE: u32 =
//!         UInt32::max_serialized_size(1) + FieldString::<16>::max_serialized_size(2);
//!
//!     fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
//!         self.sensor.serialize_with_id(1, buffer, false)?;
//!         self.label.serialize_with_id(2, buffer, false)
//!     }
//!
//!     fn deserialize_field(
//!         &mut self,
//!         field_number: u32,
//!         wire_type: WireType,
//!         buffer: &mut dyn ReadBuffer,
//!     ) -> Result<()> {
//!         match field_number {
//!             1 => self.sensor.deserialize_check_type(buffer, wire_type),
//!             2 => self.label.deserialize_check_type(buffer, wire_type),
//!             _ => skip_unknown_field(buffer, wire_type),
//!         }
//!     }
//!
//!     fn field_number_to_name(field_number: u32) -> &'static str {
//!         match field_number {
//!             1 => "sensor",
//!             2 => "label",
//!             _ => fixproto_core::INVALID_FIELD_NAME,
//!         }
//!     }
//!
//!     # #[cfg(feature = "debug-dump")]
//!     fn dump_fields<'a>(
//!         &self,
//!         view: fixproto_core::dump::StringView<'a>,
//!         indent: usize,
//!     ) -> fixproto_core::dump::StringView<'a> {
//!         let view = self.sensor.dump(view, indent, Some("sensor"), true);
//!         self.label.dump(view, indent, Some("label"), false)
//!     }
//! }
//!
//! let mut reading = Reading::default();
//! reading.sensor.set(3);
//! reading.label.set_str("temp");
//!
//! let mut storage = [0u8; 32];
//! let mut writer = fixproto_core::SliceWriter::new(&mut storage);
//! reading.serialize(&mut writer)?;
//! assert_eq!(writer.written(), b"\x08\x03\x12\x04temp");
//! # Ok::<(), fixproto_core::Error>(())
//! ```

use crate::buffer::{ReadBuffer, ReadBufferSection, WriteBuffer};
#[cfg(feature = "debug-dump")]
use crate::dump::{open_field, write_indent, StringView};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::fmt::debug;
use crate::wire::{self, WireType, FIELD_NUMBER_NOT_SET};

/// Name reported for field numbers a message does not define
pub const INVALID_FIELD_NAME: &str = "Invalid FieldNumber";

/// A protobuf message
pub trait Message: Default {
    /// Worst-case size of the body written by [`Field::serialize`]: the sum
    /// of every field's `max_serialized_size`
    ///
    /// A `WriteBufferFixed` of this size can hold any value of the message.
    const MAX_SERIALIZED_SIZE: u32;

    /// Writes every field that is present, in field-number order
    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()>;

    /// Decodes one field whose tag has just been read
    ///
    /// Unclaimed field numbers must go to
    /// [`skip_unknown_field`](crate::wire::skip_unknown_field).
    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()>;

    /// Resets every field, presence bit and oneof
    fn clear_fields(&mut self) {
        *self = Self::default();
    }

    /// The schema name of a field, or [`INVALID_FIELD_NAME`]
    fn field_number_to_name(field_number: u32) -> &'static str;

    /// Renders each field on its own line at `indent`
    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a>;

    /// Renders the whole message as JSON-like text
    #[cfg(feature = "debug-dump")]
    fn to_string<'a>(&self, view: StringView<'a>) -> StringView<'a> {
        dump_message(self, view, 0, None, true)
    }
}

/// Worst-case bytes written when `M` is embedded as field `field_number`:
/// tag, length prefix and body
pub const fn max_serialized_size<M: Message>(field_number: u32) -> u32 {
    wire::tag_size(field_number)
        + wire::varint_size(M::MAX_SERIALIZED_SIZE as u64)
        + M::MAX_SERIALIZED_SIZE
}

#[cfg(feature = "debug-dump")]
fn dump_message<'a, M: Message>(
    message: &M,
    mut view: StringView<'a>,
    indent: usize,
    name: Option<&str>,
    first: bool,
) -> StringView<'a> {
    use core::fmt::Write;

    open_field(&mut view, indent, name, first);
    let _ = view.write_str("{\n");
    let mut view = message.dump_fields(view, indent + 2);
    let _ = view.write_char('\n');
    write_indent(&mut view, indent);
    let _ = view.write_char('}');
    view
}

impl<M: Message> Field for M {
    /// Writes tag, body size and body
    ///
    /// An empty body is skipped unless `optional` is set.
    fn serialize_with_id(
        &self,
        field_number: u32,
        buffer: &mut dyn WriteBuffer,
        optional: bool,
    ) -> Result<()> {
        let size = self.serialized_size();
        if size == 0 && !optional {
            return Ok(());
        }

        wire::serialize_tag(field_number, WireType::LengthDelimited, buffer)?;
        wire::serialize_varint(u64::from(size), buffer)?;
        if buffer.available_size() < size {
            debug!(
                field_number,
                needed = size,
                available = buffer.available_size(),
                "no room for nested message"
            );
            return Err(Error::BufferFull);
        }
        self.serialize_fields(buffer)
    }

    fn serialize(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.serialize_fields(buffer)
    }

    /// Reads tags and dispatches them until `buffer` runs dry
    ///
    /// Input that ends between two fields ends the message. Input that ends
    /// anywhere else, a tag cut short included, is [`Error::EndOfBuffer`].
    fn deserialize(&mut self, buffer: &mut dyn ReadBuffer) -> Result<()> {
        while buffer.size() > 0 {
            let tag = wire::deserialize_tag(buffer)?;
            if tag.field_number == FIELD_NUMBER_NOT_SET {
                return Err(Error::InvalidFieldId);
            }
            self.deserialize_field(tag.field_number, tag.wire_type, buffer)?;
        }
        Ok(())
    }

    /// Decodes an embedded message from a section of its declared size
    fn deserialize_check_type(
        &mut self,
        buffer: &mut dyn ReadBuffer,
        wire_type: WireType,
    ) -> Result<()> {
        if wire_type != WireType::LengthDelimited {
            return Err(Error::InvalidWireType);
        }

        let size = wire::deserialize_varint32(buffer)?;
        if size > buffer.size() {
            return Err(Error::EndOfBuffer);
        }
        let mut section = ReadBufferSection::new(buffer, size);
        self.deserialize(&mut section)
    }

    fn clear(&mut self) {
        self.clear_fields();
    }

    #[cfg(feature = "debug-dump")]
    fn dump<'a>(
        &self,
        view: StringView<'a>,
        indent: usize,
        name: Option<&str>,
        first: bool,
    ) -> StringView<'a> {
        dump_message(self, view, indent, name, first)
    }
}
