//! # fixproto-core
//!
//! An allocation-free Protocol Buffers wire format engine for embedded targets.
//!
//! Messages are plain fixed-layout values: strings, bytes and repeated fields
//! carry their capacity in the type, buffers are supplied by the caller, and
//! nothing ever touches a heap. The encoding is bit-exact with standard
//! protobuf, so firmware built on this crate talks to any conforming peer.
//!
//! ## Architecture
//!
//! - [`wire`]: tag, varint, zigzag and fixed-width primitives, unknown-field skipping
//! - [`buffer`]: the [`ReadBuffer`] / [`WriteBuffer`] contracts, bounded sections
//!   and the size-counting sink
//! - [`Field`]: the contract shared by every field kind
//! - [`scalar`], [`string_bytes`], [`repeated`]: the field kinds
//! - [`message`]: framing and the top-level decode loop
//! - [`oneof`], [`presence`]: exclusive members and optional-field presence
//! - `dump`: JSON-like debug rendering (feature `debug-dump`)
//!
//! ## Example
//!
//! ```
//! use fixproto_core::{Field, ReadBufferFixed, UInt32, WriteBufferFixed};
//!
//! let mut value = UInt32::default();
//! value.set(150);
//!
//! let mut buffer = WriteBufferFixed::<8>::new();
//! value.serialize_with_id(1, &mut buffer, false)?;
//! assert_eq!(buffer.data(), &[0x08, 0x96, 0x01]);
//!
//! let mut input = ReadBufferFixed::<8>::new();
//! for &byte in &buffer.data()[1..] {
//!     input.push(byte);
//! }
//! let mut decoded = UInt32::default();
//! decoded.deserialize(&mut input)?;
//! assert_eq!(decoded.get(), 150);
//! # Ok::<(), fixproto_core::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error`; without it the crate is `no_std`
//! - `tracing` (default): structured logging of decode decisions
//! - `debug-dump` (default): `Message::to_string` into a caller-owned buffer
//! - `bytes`: adapters between the buffer contracts and the `bytes` crate

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

mod fmt;

pub mod buffer;
#[cfg(feature = "debug-dump")]
pub mod dump;
pub mod error;
pub mod field;
pub mod message;
pub mod oneof;
pub mod presence;
pub mod repeated;
pub mod scalar;
pub mod string_bytes;
pub mod wire;

// Re-export primary types for convenience
pub use buffer::{
    ReadBuffer, ReadBufferFixed, ReadBufferSection, SizeCalculator, SliceReader, SliceWriter,
    WriteBuffer, WriteBufferFixed,
};
#[cfg(feature = "bytes")]
pub use buffer::{BufReader, BufWriter};
pub use error::{Error, Result};
pub use field::Field;
pub use message::{Message, INVALID_FIELD_NAME};
pub use oneof::{Oneof, OneofField};
pub use presence::Presence;
pub use repeated::{RepeatedElement, RepeatedField};
pub use scalar::{
    Bool, Double, EnumField, Fixed32, Fixed64, Float, Int32, Int64, ProtoEnum, SFixed32,
    SFixed64, SInt32, SInt64, Scalar, UInt32, UInt64,
};
pub use string_bytes::{FieldBytes, FieldString};
pub use wire::{skip_unknown_field, Tag, WireType};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum valid protobuf field number (2^29 - 1)
pub const MAX_FIELD_NUMBER: u32 = wire::MAX_VALID_NUMBER;
