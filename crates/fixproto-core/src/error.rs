//! Error types for the fixproto-core library.
//!
//! Every encode and decode operation reports failure through [`Error`]. The
//! variants carry no payload so the type stays `Copy` and never allocates,
//! which keeps it usable from interrupt context on targets without a heap.

use thiserror::Error;

/// Result type alias for fixproto operations
pub type Result<T> = core::result::Result<T, Error>;

/// Failure modes of the wire format engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The write buffer has no room for the bytes being serialized
    #[error("write buffer is full")]
    BufferFull,

    /// A fixed-capacity container cannot hold another element
    #[error("fixed-capacity array is full")]
    ArrayFull,

    /// The read buffer ran out of bytes
    ///
    /// Input that ends cleanly between two fields ends the message without
    /// this error. Seeing it means the input was cut inside a tag or payload.
    #[error("unexpected end of read buffer")]
    EndOfBuffer,

    /// The wire type in the stream does not match the field's encoding
    #[error("wire type does not match the field encoding")]
    InvalidWireType,

    /// Field number zero appeared on the wire
    #[error("field number 0 is not a valid field id")]
    InvalidFieldId,

    /// A varint ran past the maximum byte width of its type
    #[error("varint exceeds the maximum width of its type")]
    OverlongVarint,

    /// A bounds-checked accessor was given an index past the current length
    #[error("index out of bounds")]
    IndexOutOfBound,
}

impl Error {
    /// Returns true for the read-exhausted condition
    ///
    /// A caller receiving input in pieces can retry once more bytes arrive.
    pub fn is_end_of_buffer(&self) -> bool {
        matches!(self, Self::EndOfBuffer)
    }

    /// Returns true if the caller could succeed by retrying with more capacity
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::BufferFull | Self::ArrayFull)
    }
}
