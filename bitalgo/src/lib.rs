//! Bit-granular ranges over slices of unsigned words, processed a word at a time.
//!
//! A [`BitCursor`] addresses one bit of caller-owned word storage. The range
//! engines ([`copy`], [`shift_left`], [`shift_right`], [`fill`],
//! [`transform`]) and the [`DualRangeReader`] operate on whole words wherever
//! the ranges allow and fall back to masked partial words only at their ends.
//!
//! ```
//! use bitalgo::{BitCursor, BitValue, copy, equal, shift_right, fill};
//!
//! let src = [0xDEAD_BEEFu32];
//! let mut dst = [0u8; 5];
//! let end = copy(&src, BitCursor::new(0, 0), BitCursor::new(1, 0), &mut dst, BitCursor::new(0, 4));
//! assert_eq!(end, BitCursor::new(4, 4));
//! assert!(equal(&src, BitCursor::new(0, 0), BitCursor::new(1, 0), &dst, BitCursor::new(0, 4), end));
//!
//! let start = shift_right(&mut dst, BitCursor::new(0, 4), end, 8);
//! fill(&mut dst, BitCursor::new(0, 4), start, BitValue::Zero);
//! assert_eq!(dst, [0x00, 0xF0, 0xEE, 0xDB, 0x0A]);
//! ```

pub mod algorithm;
pub use algorithm::{
    Ones, compare, copy, equal, fill, find, mismatch, ones, shift_left, shift_right, transform, transform_unary,
    try_copy,
};

pub mod cursor;
pub use cursor::{BitCursor, BitRange, BitValue, check_cursor, check_range};

pub mod error;
pub use error::{Error, Result};

pub mod reader;
pub use reader::{Alignment, Chunk, DualRangeReader, pad};

pub mod word;
pub use word::{ReadWidth, Word, digits, fill_random, primitives};
