//! Errors reported by the checked entry points.
//!
//! The word-level engines themselves never fail: they rely on the caller to
//! hand them viable ranges. [`BitCursor::try_new`](crate::BitCursor::try_new),
//! [`BitRange`](crate::BitRange), [`try_copy`](crate::try_copy) and
//! [`DualRangeReader::try_new`](crate::DualRangeReader::try_new) validate their
//! inputs first and report problems with this type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sub-word offset does not fit in the word it addresses.
    #[error("bit offset {offset} is not below the word width {digits}")]
    OffsetOutOfRange { offset: usize, digits: usize },

    /// A cursor addresses a word past the end of its storage.
    #[error("cursor at word {word}, offset {offset} lies outside storage of {len} words")]
    CursorOutOfBounds { word: usize, offset: usize, len: usize },

    /// The end of a range precedes its start.
    #[error("range end (bit {last}) precedes its start (bit {first})")]
    ReversedRange { first: usize, last: usize },

    /// Two ranges that must be read in lockstep have different lengths.
    #[error("ranges have different lengths: {first} and {second} bits")]
    LengthMismatch { first: usize, second: usize },

    /// A destination cannot hold every bit of its source.
    #[error("destination holds {available} bits but {required} are needed")]
    DestinationTooShort { required: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
