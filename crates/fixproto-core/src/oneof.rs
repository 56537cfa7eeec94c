//! Oneof slots.
//!
//! A oneof is a Rust enum with one variant per member, held in a
//! [`OneofField`]. The enum makes exclusivity a type property: switching
//! members drops the old payload and constructs the new one in a single
//! assignment, and cloning a message clones whichever member is live.

use crate::buffer::{ReadBuffer, WriteBuffer};
#[cfg(feature = "debug-dump")]
use crate::dump::StringView;
use crate::error::Result;
use crate::field::Field;
use crate::fmt::debug;
use crate::wire::{skip_unknown_field, WireType, FIELD_NUMBER_NOT_SET};

/// The member enum of a oneof
pub trait Oneof: Sized {
    /// Worst-case bytes written by the largest member, tag included
    ///
    /// Usually computed with [`max_member_size`].
    const MAX_SERIALIZED_SIZE: u32;

    /// Field number of the live member
    fn field_number(&self) -> u32;

    /// A default-valued member for `field_number`, or `None` if it is not
    /// part of this oneof
    fn init(field_number: u32) -> Option<Self>;

    /// The live member's field
    fn field(&self) -> &dyn Field;

    /// The live member's field, mutably
    fn field_mut(&mut self) -> &mut dyn Field;

    /// Schema name of the live member
    fn name(&self) -> &'static str;
}

/// The largest of the members' `max_serialized_size` values
pub const fn max_member_size(sizes: &[u32]) -> u32 {
    let mut max = 0;
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] > max {
            max = sizes[i];
        }
        i += 1;
    }
    max
}

/// Storage for one oneof: a member or nothing
#[derive(Debug, Clone, PartialEq)]
pub struct OneofField<O> {
    active: Option<O>,
}

impl<O: Oneof> OneofField<O> {
    /// Creates an empty slot
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Worst-case bytes written by [`serialize`](Self::serialize)
    pub const fn max_serialized_size() -> u32 {
        O::MAX_SERIALIZED_SIZE
    }

    /// Field number of the live member, [`FIELD_NUMBER_NOT_SET`] when empty
    pub fn which(&self) -> u32 {
        self.active
            .as_ref()
            .map_or(FIELD_NUMBER_NOT_SET, O::field_number)
    }

    /// The live member
    pub fn get(&self) -> Option<&O> {
        self.active.as_ref()
    }

    /// The live member, mutably
    pub fn get_mut(&mut self) -> Option<&mut O> {
        self.active.as_mut()
    }

    /// Makes `member` the live member, dropping the previous one
    pub fn set(&mut self, member: O) {
        self.active = Some(member);
    }

    /// Drops the live member
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Writes the live member
    ///
    /// Members always carry presence, so a default value is still written.
    pub fn serialize(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        match &self.active {
            Some(member) => member
                .field()
                .serialize_with_id(member.field_number(), buffer, true),
            None => Ok(()),
        }
    }

    /// Decodes member `field_number` into the slot
    ///
    /// Another live member is replaced; the same member is merged into. If
    /// decoding fails the slot is left empty.
    pub fn deserialize(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        if self.which() != field_number {
            match O::init(field_number) {
                Some(member) => self.active = Some(member),
                None => return skip_unknown_field(buffer, wire_type),
            }
        }

        let result = match &mut self.active {
            Some(member) => member.field_mut().deserialize_check_type(buffer, wire_type),
            None => Ok(()),
        };
        if let Err(_error) = result {
            debug!(field_number, error = %_error, "oneof member failed to decode, clearing");
            self.active = None;
        }
        result
    }

    /// Renders the live member, if any, under its own name
    #[cfg(feature = "debug-dump")]
    pub fn dump<'a>(&self, view: StringView<'a>, indent: usize, first: bool) -> StringView<'a> {
        match &self.active {
            Some(member) => member.field().dump(view, indent, Some(member.name()), first),
            None => view,
        }
    }
}

impl<O: Oneof> Default for OneofField<O> {
    fn default() -> Self {
        Self::new()
    }
}
