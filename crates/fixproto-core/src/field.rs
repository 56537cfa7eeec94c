//! The contract every field kind implements.

use crate::buffer::{ReadBuffer, SizeCalculator, WriteBuffer};
#[cfg(feature = "debug-dump")]
use crate::dump::StringView;
use crate::error::Result;
use crate::wire::WireType;

/// Serialization contract shared by scalars, strings, bytes, repeated fields
/// and embedded messages
///
/// The trait is object safe; oneof members are reached through `&dyn Field`.
pub trait Field {
    /// Writes tag and payload for `field_number`
    ///
    /// Fields holding their default are skipped unless `optional` is set,
    /// which is how explicit presence (optional fields, oneof members) forces
    /// them onto the wire.
    fn serialize_with_id(
        &self,
        field_number: u32,
        buffer: &mut dyn WriteBuffer,
        optional: bool,
    ) -> Result<()>;

    /// Writes the payload without a tag
    ///
    /// For a message this is its body, for a string the raw bytes.
    fn serialize(&self, buffer: &mut dyn WriteBuffer) -> Result<()>;

    /// Reads the payload from `buffer`, merging into the current value
    ///
    /// For a message this runs the decode loop until `buffer` is exhausted.
    fn deserialize(&mut self, buffer: &mut dyn ReadBuffer) -> Result<()>;

    /// Checks the wire type of an already-read tag, then reads the payload
    fn deserialize_check_type(
        &mut self,
        buffer: &mut dyn ReadBuffer,
        wire_type: WireType,
    ) -> Result<()>;

    /// Resets the field to its default
    fn clear(&mut self);

    /// Size in bytes of what [`serialize`](Self::serialize) would write
    fn serialized_size(&self) -> u32 {
        let mut calculator = SizeCalculator::new();
        // The calculator never runs out of room.
        let _ = self.serialize(&mut calculator);
        calculator.size()
    }

    /// Renders the field into `view` and hands the view back
    ///
    /// `first` suppresses the separator, `name` is omitted for values that
    /// are not struct members (repeated elements, the top-level message).
    #[cfg(feature = "debug-dump")]
    fn dump<'a>(
        &self,
        view: StringView<'a>,
        indent: usize,
        name: Option<&str>,
        first: bool,
    ) -> StringView<'a>;
}
