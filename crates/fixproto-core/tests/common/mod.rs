//! Messages written the way a code generator would emit them.

#![allow(dead_code)]

use fixproto_core::message;
use fixproto_core::oneof::max_member_size;
use fixproto_core::presence::{words_for, Presence};
use fixproto_core::{
    skip_unknown_field, Bool, Double, EnumField, Field, FieldBytes, FieldString, Fixed32,
    Fixed64, Float, Int32, Int64, Message, Oneof, OneofField, ProtoEnum, ReadBuffer,
    RepeatedField, Result, SFixed32, SFixed64, SInt32, SInt64, SliceReader, SliceWriter, UInt32,
    UInt64, WireType, WriteBuffer, INVALID_FIELD_NAME,
};

#[cfg(feature = "debug-dump")]
use fixproto_core::dump::StringView;

/// Serializes `message` into a fresh vector
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    let mut storage = [0u8; 1024];
    let mut writer = SliceWriter::new(&mut storage);
    message.serialize(&mut writer).expect("serialize");
    writer.written().to_vec()
}

/// Decodes a fresh `M` from `bytes`
pub fn decode<M: Message>(bytes: &[u8]) -> Result<M> {
    let mut message = M::default();
    message.deserialize(&mut SliceReader::new(bytes))?;
    Ok(message)
}

// ---------------------------------------------------------------------------
// enum Color

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ProtoEnum for Color {
    fn to_i32(self) -> i32 {
        self as i32
    }

    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Color::Red),
            1 => Some(Color::Green),
            2 => Some(Color::Blue),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }
}

// ---------------------------------------------------------------------------
// message SimpleTypes

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimpleTypes {
    pub a_int32: Int32,
    pub a_int64: Int64,
    pub a_uint32: UInt32,
    pub a_uint64: UInt64,
    pub a_sint32: SInt32,
    pub a_sint64: SInt64,
    pub a_bool: Bool,
    pub a_enum: EnumField<Color>,
    pub a_fixed64: Fixed64,
    pub a_sfixed64: SFixed64,
    pub a_double: Double,
    pub a_fixed32: Fixed32,
    pub a_sfixed32: SFixed32,
    pub a_float: Float,
}

impl Message for SimpleTypes {
    const MAX_SERIALIZED_SIZE: u32 = Int32::max_serialized_size(1)
        + Int64::max_serialized_size(2)
        + UInt32::max_serialized_size(3)
        + UInt64::max_serialized_size(4)
        + SInt32::max_serialized_size(5)
        + SInt64::max_serialized_size(6)
        + Bool::max_serialized_size(7)
        + EnumField::<Color>::max_serialized_size(8)
        + Fixed64::max_serialized_size(9)
        + SFixed64::max_serialized_size(10)
        + Double::max_serialized_size(11)
        + Fixed32::max_serialized_size(12)
        + SFixed32::max_serialized_size(13)
        + Float::max_serialized_size(14);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.a_int32.serialize_with_id(1, buffer, false)?;
        self.a_int64.serialize_with_id(2, buffer, false)?;
        self.a_uint32.serialize_with_id(3, buffer, false)?;
        self.a_uint64.serialize_with_id(4, buffer, false)?;
        self.a_sint32.serialize_with_id(5, buffer, false)?;
        self.a_sint64.serialize_with_id(6, buffer, false)?;
        self.a_bool.serialize_with_id(7, buffer, false)?;
        self.a_enum.serialize_with_id(8, buffer, false)?;
        self.a_fixed64.serialize_with_id(9, buffer, false)?;
        self.a_sfixed64.serialize_with_id(10, buffer, false)?;
        self.a_double.serialize_with_id(11, buffer, false)?;
        self.a_fixed32.serialize_with_id(12, buffer, false)?;
        self.a_sfixed32.serialize_with_id(13, buffer, false)?;
        self.a_float.serialize_with_id(14, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.a_int32.deserialize_check_type(buffer, wire_type),
            2 => self.a_int64.deserialize_check_type(buffer, wire_type),
            3 => self.a_uint32.deserialize_check_type(buffer, wire_type),
            4 => self.a_uint64.deserialize_check_type(buffer, wire_type),
            5 => self.a_sint32.deserialize_check_type(buffer, wire_type),
            6 => self.a_sint64.deserialize_check_type(buffer, wire_type),
            7 => self.a_bool.deserialize_check_type(buffer, wire_type),
            8 => self.a_enum.deserialize_check_type(buffer, wire_type),
            9 => self.a_fixed64.deserialize_check_type(buffer, wire_type),
            10 => self.a_sfixed64.deserialize_check_type(buffer, wire_type),
            11 => self.a_double.deserialize_check_type(buffer, wire_type),
            12 => self.a_fixed32.deserialize_check_type(buffer, wire_type),
            13 => self.a_sfixed32.deserialize_check_type(buffer, wire_type),
            14 => self.a_float.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "a_int32",
            2 => "a_int64",
            3 => "a_uint32",
            4 => "a_uint64",
            5 => "a_sint32",
            6 => "a_sint64",
            7 => "a_bool",
            8 => "a_enum",
            9 => "a_fixed64",
            10 => "a_sfixed64",
            11 => "a_double",
            12 => "a_fixed32",
            13 => "a_sfixed32",
            14 => "a_float",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.a_int32.dump(view, indent, Some("a_int32"), true);
        let view = self.a_int64.dump(view, indent, Some("a_int64"), false);
        let view = self.a_uint32.dump(view, indent, Some("a_uint32"), false);
        let view = self.a_uint64.dump(view, indent, Some("a_uint64"), false);
        let view = self.a_sint32.dump(view, indent, Some("a_sint32"), false);
        let view = self.a_sint64.dump(view, indent, Some("a_sint64"), false);
        let view = self.a_bool.dump(view, indent, Some("a_bool"), false);
        let view = self.a_enum.dump(view, indent, Some("a_enum"), false);
        let view = self.a_fixed64.dump(view, indent, Some("a_fixed64"), false);
        let view = self.a_sfixed64.dump(view, indent, Some("a_sfixed64"), false);
        let view = self.a_double.dump(view, indent, Some("a_double"), false);
        let view = self.a_fixed32.dump(view, indent, Some("a_fixed32"), false);
        let view = self.a_sfixed32.dump(view, indent, Some("a_sfixed32"), false);
        self.a_float.dump(view, indent, Some("a_float"), false)
    }
}

// ---------------------------------------------------------------------------
// message NestedA { int32 x = 1; float y = 2; sint64 z = 3; }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NestedA {
    pub x: Int32,
    pub y: Float,
    pub z: SInt64,
}

impl Message for NestedA {
    const MAX_SERIALIZED_SIZE: u32 = Int32::max_serialized_size(1)
        + Float::max_serialized_size(2)
        + SInt64::max_serialized_size(3);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.x.serialize_with_id(1, buffer, false)?;
        self.y.serialize_with_id(2, buffer, false)?;
        self.z.serialize_with_id(3, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.x.deserialize_check_type(buffer, wire_type),
            2 => self.y.deserialize_check_type(buffer, wire_type),
            3 => self.z.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "x",
            2 => "y",
            3 => "z",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.x.dump(view, indent, Some("x"), true);
        let view = self.y.dump(view, indent, Some("y"), false);
        self.z.dump(view, indent, Some("z"), false)
    }
}

// ---------------------------------------------------------------------------
// message NestedB { double u = 1; double v = 2; NestedA nested_a = 3; }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NestedB {
    pub u: Double,
    pub v: Double,
    pub nested_a: NestedA,
}

impl Message for NestedB {
    const MAX_SERIALIZED_SIZE: u32 = Double::max_serialized_size(1)
        + Double::max_serialized_size(2)
        + message::max_serialized_size::<NestedA>(3);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.u.serialize_with_id(1, buffer, false)?;
        self.v.serialize_with_id(2, buffer, false)?;
        self.nested_a.serialize_with_id(3, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.u.deserialize_check_type(buffer, wire_type),
            2 => self.v.deserialize_check_type(buffer, wire_type),
            3 => self.nested_a.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "u",
            2 => "v",
            3 => "nested_a",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.u.dump(view, indent, Some("u"), true);
        let view = self.v.dump(view, indent, Some("v"), false);
        self.nested_a.dump(view, indent, Some("nested_a"), false)
    }
}

// ---------------------------------------------------------------------------
// message NestedC { NestedB nested_b = 1; int32 w = 2; }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NestedC {
    pub nested_b: NestedB,
    pub w: Int32,
}

impl Message for NestedC {
    const MAX_SERIALIZED_SIZE: u32 =
        message::max_serialized_size::<NestedB>(1) + Int32::max_serialized_size(2);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.nested_b.serialize_with_id(1, buffer, false)?;
        self.w.serialize_with_id(2, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.nested_b.deserialize_check_type(buffer, wire_type),
            2 => self.w.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "nested_b",
            2 => "w",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.nested_b.dump(view, indent, Some("nested_b"), true);
        self.w.dump(view, indent, Some("w"), false)
    }
}

// ---------------------------------------------------------------------------
// message RepeatedScalars { uint32 x = 1; repeated uint32 y = 2; uint32 z = 3; }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RepeatedScalars {
    pub x: UInt32,
    pub y: RepeatedField<UInt32, 3>,
    pub z: UInt32,
}

impl Message for RepeatedScalars {
    const MAX_SERIALIZED_SIZE: u32 = UInt32::max_serialized_size(1)
        + RepeatedField::<UInt32, 3>::max_serialized_size(2)
        + UInt32::max_serialized_size(3);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.x.serialize_with_id(1, buffer, false)?;
        self.y.serialize_with_id(2, buffer, false)?;
        self.z.serialize_with_id(3, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.x.deserialize_check_type(buffer, wire_type),
            2 => self.y.deserialize_check_type(buffer, wire_type),
            3 => self.z.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "x",
            2 => "y",
            3 => "z",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.x.dump(view, indent, Some("x"), true);
        let view = self.y.dump(view, indent, Some("y"), false);
        self.z.dump(view, indent, Some("z"), false)
    }
}

// ---------------------------------------------------------------------------
// message RepeatedMessages { uint32 x = 1; repeated NestedA y = 2; uint32 z = 3; }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RepeatedMessages {
    pub x: UInt32,
    pub y: RepeatedField<NestedA, 3>,
    pub z: UInt32,
}

impl Message for RepeatedMessages {
    const MAX_SERIALIZED_SIZE: u32 = UInt32::max_serialized_size(1)
        + RepeatedField::<NestedA, 3>::max_serialized_size(2)
        + UInt32::max_serialized_size(3);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.x.serialize_with_id(1, buffer, false)?;
        self.y.serialize_with_id(2, buffer, false)?;
        self.z.serialize_with_id(3, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.x.deserialize_check_type(buffer, wire_type),
            2 => self.y.deserialize_check_type(buffer, wire_type),
            3 => self.z.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "x",
            2 => "y",
            3 => "z",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.x.dump(view, indent, Some("x"), true);
        let view = self.y.dump(view, indent, Some("y"), false);
        self.z.dump(view, indent, Some("z"), false)
    }
}

// ---------------------------------------------------------------------------
// message Text { string name = 1; bytes data = 2; repeated string tags = 3; }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Text {
    pub name: FieldString<10>,
    pub data: FieldBytes<8>,
    pub tags: RepeatedField<FieldString<8>, 3>,
}

impl Message for Text {
    const MAX_SERIALIZED_SIZE: u32 = FieldString::<10>::max_serialized_size(1)
        + FieldBytes::<8>::max_serialized_size(2)
        + RepeatedField::<FieldString<8>, 3>::max_serialized_size(3);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.name.serialize_with_id(1, buffer, false)?;
        self.data.serialize_with_id(2, buffer, false)?;
        self.tags.serialize_with_id(3, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.name.deserialize_check_type(buffer, wire_type),
            2 => self.data.deserialize_check_type(buffer, wire_type),
            3 => self.tags.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "name",
            2 => "data",
            3 => "tags",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.name.dump(view, indent, Some("name"), true);
        let view = self.data.dump(view, indent, Some("data"), false);
        self.tags.dump(view, indent, Some("tags"), false)
    }
}

// ---------------------------------------------------------------------------
// message WithOneof {
//   int32 x = 1;
//   oneof xyz { float a = 2; NestedA b = 3; string c = 4; }
//   int32 y = 5;
// }

#[derive(Debug, Clone, PartialEq)]
pub enum Xyz {
    A(Float),
    B(NestedA),
    C(FieldString<8>),
}

impl Oneof for Xyz {
    const MAX_SERIALIZED_SIZE: u32 = max_member_size(&[
        Float::max_serialized_size(2),
        message::max_serialized_size::<NestedA>(3),
        FieldString::<8>::max_serialized_size(4),
    ]);

    fn field_number(&self) -> u32 {
        match self {
            Xyz::A(_) => 2,
            Xyz::B(_) => 3,
            Xyz::C(_) => 4,
        }
    }

    fn init(field_number: u32) -> Option<Self> {
        match field_number {
            2 => Some(Xyz::A(Float::default())),
            3 => Some(Xyz::B(NestedA::default())),
            4 => Some(Xyz::C(FieldString::default())),
            _ => None,
        }
    }

    fn field(&self) -> &dyn Field {
        match self {
            Xyz::A(field) => field,
            Xyz::B(field) => field,
            Xyz::C(field) => field,
        }
    }

    fn field_mut(&mut self) -> &mut dyn Field {
        match self {
            Xyz::A(field) => field,
            Xyz::B(field) => field,
            Xyz::C(field) => field,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Xyz::A(_) => "a",
            Xyz::B(_) => "b",
            Xyz::C(_) => "c",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WithOneof {
    pub x: Int32,
    pub xyz: OneofField<Xyz>,
    pub y: Int32,
}

impl WithOneof {
    pub const A: u32 = 2;
    pub const B: u32 = 3;
    pub const C: u32 = 4;

    pub fn has_a(&self) -> bool {
        self.xyz.which() == Self::A
    }

    pub fn has_b(&self) -> bool {
        self.xyz.which() == Self::B
    }

    pub fn has_c(&self) -> bool {
        self.xyz.which() == Self::C
    }

    pub fn a(&self) -> f32 {
        match self.xyz.get() {
            Some(Xyz::A(a)) => a.get(),
            _ => 0.0,
        }
    }

    pub fn set_a(&mut self, value: f32) {
        self.xyz.set(Xyz::A(Float::new(value)));
    }

    pub fn mutable_b(&mut self) -> &mut NestedA {
        if !self.has_b() {
            self.xyz.set(Xyz::B(NestedA::default()));
        }
        match self.xyz.get_mut() {
            Some(Xyz::B(b)) => b,
            _ => unreachable!("member b was just activated"),
        }
    }

    pub fn b(&self) -> Option<&NestedA> {
        match self.xyz.get() {
            Some(Xyz::B(b)) => Some(b),
            _ => None,
        }
    }

    pub fn set_c(&mut self, value: &str) {
        let mut c = FieldString::new();
        c.set_str(value);
        self.xyz.set(Xyz::C(c));
    }

    pub fn clear_xyz(&mut self) {
        self.xyz.clear();
    }
}

impl Message for WithOneof {
    const MAX_SERIALIZED_SIZE: u32 = Int32::max_serialized_size(1)
        + OneofField::<Xyz>::max_serialized_size()
        + Int32::max_serialized_size(5);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.x.serialize_with_id(1, buffer, false)?;
        self.xyz.serialize(buffer)?;
        self.y.serialize_with_id(5, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.x.deserialize_check_type(buffer, wire_type),
            2..=4 => self.xyz.deserialize(field_number, wire_type, buffer),
            5 => self.y.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "x",
            2 => "a",
            3 => "b",
            4 => "c",
            5 => "y",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.x.dump(view, indent, Some("x"), true);
        let view = self.y.dump(view, indent, Some("y"), false);
        self.xyz.dump(view, indent, false)
    }
}

// ---------------------------------------------------------------------------
// message WithOptional {
//   int32 a = 1;
//   optional int32 b = 2;
//   optional NestedA c = 3;
//   optional string d = 4;
// }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WithOptional {
    presence: Presence<{ words_for(3) }>,
    a: Int32,
    b: Int32,
    c: NestedA,
    d: FieldString<8>,
}

impl WithOptional {
    const B: usize = 0;
    const C: usize = 1;
    const D: usize = 2;

    pub fn a(&self) -> i32 {
        self.a.get()
    }

    pub fn set_a(&mut self, value: i32) {
        self.a.set(value);
    }

    pub fn has_b(&self) -> bool {
        self.presence.is_set(Self::B)
    }

    pub fn b(&self) -> i32 {
        self.b.get()
    }

    pub fn set_b(&mut self, value: i32) {
        self.presence.set(Self::B);
        self.b.set(value);
    }

    pub fn clear_b(&mut self) {
        self.presence.clear(Self::B);
        self.b.clear();
    }

    pub fn has_c(&self) -> bool {
        self.presence.is_set(Self::C)
    }

    pub fn c(&self) -> &NestedA {
        &self.c
    }

    pub fn mutable_c(&mut self) -> &mut NestedA {
        self.presence.set(Self::C);
        &mut self.c
    }

    pub fn clear_c(&mut self) {
        self.presence.clear(Self::C);
        self.c.clear();
    }

    pub fn has_d(&self) -> bool {
        self.presence.is_set(Self::D)
    }

    pub fn d(&self) -> &FieldString<8> {
        &self.d
    }

    pub fn set_d(&mut self, value: &str) {
        self.presence.set(Self::D);
        self.d.set_str(value);
    }

    pub fn clear_d(&mut self) {
        self.presence.clear(Self::D);
        self.d.clear();
    }
}

impl Message for WithOptional {
    const MAX_SERIALIZED_SIZE: u32 = Int32::max_serialized_size(1)
        + Int32::max_serialized_size(2)
        + message::max_serialized_size::<NestedA>(3)
        + FieldString::<8>::max_serialized_size(4);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.a.serialize_with_id(1, buffer, false)?;
        if self.has_b() {
            self.b.serialize_with_id(2, buffer, true)?;
        }
        if self.has_c() {
            self.c.serialize_with_id(3, buffer, true)?;
        }
        if self.has_d() {
            self.d.serialize_with_id(4, buffer, true)?;
        }
        Ok(())
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.a.deserialize_check_type(buffer, wire_type),
            2 => {
                self.presence.set(Self::B);
                self.b.deserialize_check_type(buffer, wire_type)
            }
            3 => {
                self.presence.set(Self::C);
                self.c.deserialize_check_type(buffer, wire_type)
            }
            4 => {
                self.presence.set(Self::D);
                self.d.deserialize_check_type(buffer, wire_type)
            }
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "a",
            2 => "b",
            3 => "c",
            4 => "d",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.a.dump(view, indent, Some("a"), true);
        let view = self.b.dump(view, indent, Some("b"), false);
        let view = self.c.dump(view, indent, Some("c"), false);
        self.d.dump(view, indent, Some("d"), false)
    }
}

// ---------------------------------------------------------------------------
// google.protobuf.Timestamp / Duration: int64 seconds = 1; int32 nanos = 2;

macro_rules! seconds_nanos {
    ($name:ident) => {
        #[derive(Debug, Default, Clone, PartialEq)]
        pub struct $name {
            pub seconds: Int64,
            pub nanos: Int32,
        }

        impl Message for $name {
            const MAX_SERIALIZED_SIZE: u32 =
                Int64::max_serialized_size(1) + Int32::max_serialized_size(2);

            fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
                self.seconds.serialize_with_id(1, buffer, false)?;
                self.nanos.serialize_with_id(2, buffer, false)
            }

            fn deserialize_field(
                &mut self,
                field_number: u32,
                wire_type: WireType,
                buffer: &mut dyn ReadBuffer,
            ) -> Result<()> {
                match field_number {
                    1 => self.seconds.deserialize_check_type(buffer, wire_type),
                    2 => self.nanos.deserialize_check_type(buffer, wire_type),
                    _ => skip_unknown_field(buffer, wire_type),
                }
            }

            fn field_number_to_name(field_number: u32) -> &'static str {
                match field_number {
                    1 => "seconds",
                    2 => "nanos",
                    _ => INVALID_FIELD_NAME,
                }
            }

            #[cfg(feature = "debug-dump")]
            fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
                let view = self.seconds.dump(view, indent, Some("seconds"), true);
                self.nanos.dump(view, indent, Some("nanos"), false)
            }
        }
    };
}

seconds_nanos!(Timestamp);
seconds_nanos!(Duration);

// ---------------------------------------------------------------------------
// message Event { Timestamp at = 1; Duration took = 2; repeated sint32 deltas = 3; }

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Event {
    pub at: Timestamp,
    pub took: Duration,
    pub deltas: RepeatedField<SInt32, 8>,
}

impl Message for Event {
    const MAX_SERIALIZED_SIZE: u32 = message::max_serialized_size::<Timestamp>(1)
        + message::max_serialized_size::<Duration>(2)
        + RepeatedField::<SInt32, 8>::max_serialized_size(3);

    fn serialize_fields(&self, buffer: &mut dyn WriteBuffer) -> Result<()> {
        self.at.serialize_with_id(1, buffer, false)?;
        self.took.serialize_with_id(2, buffer, false)?;
        self.deltas.serialize_with_id(3, buffer, false)
    }

    fn deserialize_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        buffer: &mut dyn ReadBuffer,
    ) -> Result<()> {
        match field_number {
            1 => self.at.deserialize_check_type(buffer, wire_type),
            2 => self.took.deserialize_check_type(buffer, wire_type),
            3 => self.deltas.deserialize_check_type(buffer, wire_type),
            _ => skip_unknown_field(buffer, wire_type),
        }
    }

    fn field_number_to_name(field_number: u32) -> &'static str {
        match field_number {
            1 => "at",
            2 => "took",
            3 => "deltas",
            _ => INVALID_FIELD_NAME,
        }
    }

    #[cfg(feature = "debug-dump")]
    fn dump_fields<'a>(&self, view: StringView<'a>, indent: usize) -> StringView<'a> {
        let view = self.at.dump(view, indent, Some("at"), true);
        let view = self.took.dump(view, indent, Some("took"), false);
        self.deltas.dump(view, indent, Some("deltas"), false)
    }
}
