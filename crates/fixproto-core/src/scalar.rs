//! Singular scalar fields.
//!
//! A [`Scalar`] stores one value; a zero-sized *kind* type picks its wire
//! encoding at compile time, so there is no dispatch on the field type at
//! runtime. The aliases ([`Int32`], [`SInt64`], [`Double`] ...) name the
//! protobuf types.
//!
//! Encodings:
//!
//! | kind | wire type | payload |
//! |---|---|---|
//! | int32, enum | VARINT | two's complement, sign-extended to 64 bits |
//! | int64, uint32, uint64, bool | VARINT | plain |
//! | sint32, sint64 | VARINT | zigzag |
//! | fixed32, sfixed32, float | FIXED32 | little-endian |
//! | fixed64, sfixed64, double | FIXED64 | little-endian |

use core::fmt;

use crate::buffer::{ReadBuffer, WriteBuffer};
#[cfg(feature = "debug-dump")]
use crate::dump::{open_field, StringView};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::wire::{self, WireType};

/// Compile-time description of a scalar wire encoding
pub trait ScalarKind {
    /// The Rust value type
    type Value: Copy + PartialEq + Default + fmt::Debug;

    /// Wire type of a single value
    const WIRE_TYPE: WireType;

    /// Largest payload a single value can produce, tag excluded
    const MAX_PAYLOAD_SIZE: u32;

    /// Writes the payload for `value`
    fn encode(value: Self::Value, buffer: &mut dyn WriteBuffer) -> Result<()>;

    /// Reads one payload
    fn decode(buffer: &mut dyn ReadBuffer) -> Result<Self::Value>;

    /// Renders `value` for the debug dump
    #[cfg(feature = "debug-dump")]
    fn write_value(value: Self::Value, view: &mut StringView<'_>) {
        use core::fmt::Write;
        let _ = write!(view, "{value:?}");
    }
}

/// A protobuf enum type
///
/// Generated enums implement this. Fields store the raw `i32`, so values
/// unknown to this build survive a decode/encode cycle.
pub trait ProtoEnum: Copy {
    /// The wire value
    fn to_i32(self) -> i32;

    /// The variant for `value`, if this build knows it
    fn from_i32(value: i32) -> Option<Self>;

    /// The variant name as written in the schema
    fn name(self) -> &'static str;
}

/// The scalar encodings
pub mod kind {
    use core::marker::PhantomData;

    use super::{ProtoEnum, ScalarKind};
    use crate::buffer::{ReadBuffer, WriteBuffer};
    use crate::error::Result;
    use crate::wire::{self, WireType};

    macro_rules! scalar_kind {
        (
            $(#[$doc:meta])*
            $name:ident, $value:ty, $wire:ident, $max:expr,
            |$ev:ident, $eb:ident| $encode:expr,
            |$db:ident| $decode:expr
        ) => {
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $name {}

            impl ScalarKind for $name {
                type Value = $value;

                const WIRE_TYPE: WireType = WireType::$wire;

                const MAX_PAYLOAD_SIZE: u32 = $max;

                fn encode($ev: $value, $eb: &mut dyn WriteBuffer) -> Result<()> {
                    $encode
                }

                fn decode($db: &mut dyn ReadBuffer) -> Result<$value> {
                    $decode
                }
            }
        };
    }

    scalar_kind!(
        /// `int32`: negatives take the full 10 bytes
        Int32, i32, Varint, wire::MAX_VARINT64_BYTES,
        |v, b| wire::serialize_varint(i64::from(v) as u64, b),
        |b| wire::deserialize_varint64(b).map(|v| v as i32)
    );
    scalar_kind!(
        /// `int64`
        Int64, i64, Varint, wire::MAX_VARINT64_BYTES,
        |v, b| wire::serialize_varint(v as u64, b),
        |b| wire::deserialize_varint64(b).map(|v| v as i64)
    );
    scalar_kind!(
        /// `uint32`
        UInt32, u32, Varint, wire::MAX_VARINT32_BYTES,
        |v, b| wire::serialize_varint(u64::from(v), b),
        |b| wire::deserialize_varint32(b)
    );
    scalar_kind!(
        /// `uint64`
        UInt64, u64, Varint, wire::MAX_VARINT64_BYTES,
        |v, b| wire::serialize_varint(v, b),
        |b| wire::deserialize_varint64(b)
    );
    scalar_kind!(
        /// `sint32`: zigzag
        SInt32, i32, Varint, wire::MAX_VARINT32_BYTES,
        |v, b| wire::serialize_varint(u64::from(wire::zigzag_encode32(v)), b),
        |b| wire::deserialize_varint32(b).map(wire::zigzag_decode32)
    );
    scalar_kind!(
        /// `sint64`: zigzag
        SInt64, i64, Varint, wire::MAX_VARINT64_BYTES,
        |v, b| wire::serialize_varint(wire::zigzag_encode64(v), b),
        |b| wire::deserialize_varint64(b).map(wire::zigzag_decode64)
    );
    scalar_kind!(
        /// `bool`: any non-zero varint decodes as true
        Bool, bool, Varint, 1,
        |v, b| wire::serialize_varint(u64::from(v), b),
        |b| wire::deserialize_varint64(b).map(|v| v != 0)
    );
    scalar_kind!(
        /// `fixed32`
        Fixed32, u32, Fixed32, 4,
        |v, b| wire::serialize_fixed32(v, b),
        |b| wire::deserialize_fixed32(b)
    );
    scalar_kind!(
        /// `fixed64`
        Fixed64, u64, Fixed64, 8,
        |v, b| wire::serialize_fixed64(v, b),
        |b| wire::deserialize_fixed64(b)
    );
    scalar_kind!(
        /// `sfixed32`
        SFixed32, i32, Fixed32, 4,
        |v, b| wire::serialize_fixed32(v as u32, b),
        |b| wire::deserialize_fixed32(b).map(|v| v as i32)
    );
    scalar_kind!(
        /// `sfixed64`
        SFixed64, i64, Fixed64, 8,
        |v, b| wire::serialize_fixed64(v as u64, b),
        |b| wire::deserialize_fixed64(b).map(|v| v as i64)
    );
    scalar_kind!(
        /// `float`
        Float, f32, Fixed32, 4,
        |v, b| wire::serialize_fixed32(v.to_bits(), b),
        |b| wire::deserialize_fixed32(b).map(f32::from_bits)
    );
    scalar_kind!(
        /// `double`
        Double, f64, Fixed64, 8,
        |v, b| wire::serialize_fixed64(v.to_bits(), b),
        |b| wire::deserialize_fixed64(b).map(f64::from_bits)
    );

    /// An enum field of type `E`, encoded like `int32`
    pub struct Enum<E>(PhantomData<fn() -> E>);

    impl<E: ProtoEnum> ScalarKind for Enum<E> {
        type Value = i32;

        const WIRE_TYPE: WireType = WireType::Varint;

        const MAX_PAYLOAD_SIZE: u32 = Int32::MAX_PAYLOAD_SIZE;

        fn encode(value: i32, buffer: &mut dyn WriteBuffer) -> Result<()> {
            Int32::encode(value, buffer)
        }

        fn decode(buffer: &mut dyn ReadBuffer) -> Result<i32> {
            Int32::decode(buffer)
        }

        #[cfg(feature = "debug-dump")]
        fn write_value(value: i32, view: &mut crate::dump::StringView<'_>) {
            use core::fmt::Write;
            let _ = match E::from_i32(value) {
                Some(known) => view.write_str(known.name()),
                None => write!(view, "{value}"),
            };
        }
    }
}

/// A singular scalar field
pub struct Scalar<K: ScalarKind> {
    value: K::Value,
}

impl<K: ScalarKind> Scalar<K> {
    /// Creates a field holding `value`
    pub fn new(value: K::Value) -> Self {
        Self { value }
    }

    /// The current value
    pub fn get(&self) -> K::Value {
        self.value
    }

    /// Mutable access to the value
    pub fn get_mut(&mut self) -> &mut K::Value {
        &mut self.value
    }

    /// Replaces the value
    pub fn set(&mut self, value: K::Value) {
        self.value = value;
    }

    /// True while the field holds its type's default
    pub fn is_default(&self) -> bool {
        self.value == K::Value::default()
    }

    /// Worst-case bytes written by [`Field::serialize_with_id`] for `field_number`
    ///
    /// Negative `int32` and enum values are sign-extended, so both count the
    /// full 10-byte varint.
    pub const fn max_serialized_size(field_number: u32) -> u32 {
        wire::tag_size(field_number) + K::MAX_PAYLOAD_SIZE
    }
}

impl<K: ScalarKind> Default for Scalar<K> {
    fn default() -> Self {
        Self {
            value: K::Value::default(),
        }
    }
}

impl<K: ScalarKind> Clone for Scalar<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ScalarKind> Copy for Scalar<K> {}

impl<K: ScalarKind> PartialEq for Scalar<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: ScalarKind> fmt::Debug for Scalar<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<K: ScalarKind> Field for Scalar<K> {
    fn serialize_with_id(
        &self,
        field_number: u32,
        buffer: &mut dyn WriteBuffer,
        optional: bool,
    ) -> Result<()> {
        if self.is_default() && !optional {
            return Ok(());
        }
        wire::serialize_tag(field_number, K::WIRE_TYPE, buffer)?;
        K::encode(self.value, buffer)
    }

    fn serialize(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        K::encode(self.value, buffer)
    }

    fn deserialize(&mut self, buffer: &mut dyn ReadBuffer) -> Result<()> {
        self.value = K::decode(buffer)?;
        Ok(())
    }

    fn deserialize_check_type(
        &mut self,
        buffer: &mut dyn ReadBuffer,
        wire_type: WireType,
    ) -> Result<()> {
        if wire_type != K::WIRE_TYPE {
            return Err(Error::InvalidWireType);
        }
        self.deserialize(buffer)
    }

    fn clear(&mut self) {
        self.value = K::Value::default();
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
        K::write_value(self.value, &mut view);
        view
    }
}

/// `int32` field
pub type Int32 = Scalar<kind::Int32>;
/// `int64` field
pub type Int64 = Scalar<kind::Int64>;
/// `uint32` field
pub type UInt32 = Scalar<kind::UInt32>;
/// `uint64` field
pub type UInt64 = Scalar<kind::UInt64>;
/// `sint32` field
pub type SInt32 = Scalar<kind::SInt32>;
/// `sint64` field
pub type SInt64 = Scalar<kind::SInt64>;
/// `bool` field
pub type Bool = Scalar<kind::Bool>;
/// `fixed32` field
pub type Fixed32 = Scalar<kind::Fixed32>;
/// `fixed64` field
pub type Fixed64 = Scalar<kind::Fixed64>;
/// `sfixed32` field
pub type SFixed32 = Scalar<kind::SFixed32>;
/// `sfixed64` field
pub type SFixed64 = Scalar<kind::SFixed64>;
/// `float` field
pub type Float = Scalar<kind::Float>;
/// `double` field
pub type Double = Scalar<kind::Double>;
/// Enum field of type `E`
pub type EnumField<E> = Scalar<kind::Enum<E>>;

impl<E: ProtoEnum> Scalar<kind::Enum<E>> {
    /// The stored value as `E`, or `None` when this build does not know it
    pub fn get_enum(&self) -> Option<E> {
        E::from_i32(self.value)
    }

    /// Stores `value`
    pub fn set_enum(&mut self, value: E) {
        self.value = value.to_i32();
    }
}
