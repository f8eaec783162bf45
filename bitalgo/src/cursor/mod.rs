mod range;

pub use range::{BitRange, check_cursor, check_range};
pub(crate) use range::assert_range_viability;

use crate::error::{Error, Result};
use crate::word::Word;
use derive_more::Display;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Not, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BitValue {
    #[default]
    #[display("0")]
    Zero,
    #[display("1")]
    One,
}

impl BitValue {
    #[inline]
    #[must_use]
    pub fn is_one(self) -> bool {
        self == BitValue::One
    }

    /// Word with every bit equal to this value.
    #[inline]
    #[must_use]
    pub fn splat<W: Word>(self) -> W {
        match self {
            BitValue::Zero => W::ZERO,
            BitValue::One => W::ONES,
        }
    }
}

impl From<bool> for BitValue {
    fn from(value: bool) -> Self {
        if value { BitValue::One } else { BitValue::Zero }
    }
}

impl From<BitValue> for bool {
    fn from(value: BitValue) -> Self {
        value.is_one()
    }
}

impl Not for BitValue {
    type Output = BitValue;

    fn not(self) -> Self::Output {
        match self {
            BitValue::Zero => BitValue::One,
            BitValue::One => BitValue::Zero,
        }
    }
}

/// Address of a single bit: a word index into caller-owned storage plus the
/// offset of the bit inside that word.
///
/// The offset is always below `W::DIGITS`; constructors carry any excess into
/// the word index. Cursors hold no reference to the storage they address, so
/// every access takes the word slice explicitly. They order by bit position.
///
/// ```
/// use bitalgo::{BitCursor, BitValue};
///
/// let mut words = [0u8; 2];
/// let cursor = BitCursor::<u8>::new(0, 11);
/// assert_eq!((cursor.word(), cursor.offset()), (1, 3));
///
/// cursor.set(&mut words, BitValue::One);
/// assert_eq!(words, [0, 0b1000]);
/// assert_eq!(cursor.get(&words), BitValue::One);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitCursor<W: Word> {
    word: usize,
    offset: usize,
    marker: PhantomData<W>,
}

impl<W: Word> BitCursor<W> {
    /// Cursor at bit `offset` of word `word`, normalizing offsets of a word or more.
    #[inline]
    #[must_use]
    pub fn new(word: usize, offset: usize) -> Self {
        BitCursor {
            word: word + offset / W::DIGITS,
            offset: offset % W::DIGITS,
            marker: PhantomData,
        }
    }

    /// Like [`BitCursor::new`], but rejects offsets that do not fit in one word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffsetOutOfRange`] when `offset >= W::DIGITS`.
    pub fn try_new(word: usize, offset: usize) -> Result<Self> {
        if offset >= W::DIGITS {
            return Err(Error::OffsetOutOfRange {
                offset,
                digits: W::DIGITS,
            });
        }
        Ok(Self::new(word, offset))
    }

    #[inline]
    #[must_use]
    pub fn at_word(word: usize) -> Self {
        Self::new(word, 0)
    }

    #[inline]
    #[must_use]
    pub fn from_bit_index(index: usize) -> Self {
        Self::new(index / W::DIGITS, index % W::DIGITS)
    }

    /// One past the last bit of `words`.
    #[inline]
    #[must_use]
    pub fn end_of(words: &[W]) -> Self {
        Self::at_word(words.len())
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> usize {
        self.word
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn bit_index(&self) -> usize {
        self.word * W::DIGITS + self.offset
    }

    #[inline]
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.offset == 0
    }

    #[inline]
    #[must_use]
    pub fn is_in_same_word(&self, other: &Self) -> bool {
        self.word == other.word
    }

    #[inline]
    pub fn advance(&mut self, bits: usize) {
        let offset = self.offset + bits;
        self.word += offset / W::DIGITS;
        self.offset = offset % W::DIGITS;
    }

    #[inline]
    #[must_use]
    pub fn advanced(mut self, bits: usize) -> Self {
        self.advance(bits);
        self
    }

    /// # Panics
    ///
    /// Panics when moving before the first bit of storage.
    #[inline]
    pub fn retreat(&mut self, bits: usize) {
        *self = Self::from_bit_index(self.bit_index() - bits);
    }

    #[inline]
    #[must_use]
    pub fn retreated(mut self, bits: usize) -> Self {
        self.retreat(bits);
        self
    }

    /// Number of bits in `[first, last)`.
    #[inline]
    #[must_use]
    pub fn distance(first: Self, last: Self) -> usize {
        debug_assert!(first <= last, "{last:?} precedes {first:?}");
        (last.word - first.word) * W::DIGITS + last.offset - first.offset
    }

    /// # Panics
    ///
    /// Panics if the cursor lies outside `words`.
    #[inline]
    #[must_use]
    pub fn get(&self, words: &[W]) -> BitValue {
        ((words[self.word] >> self.offset) & W::ONE != W::ZERO).into()
    }

    /// # Panics
    ///
    /// Panics if the cursor lies outside `words`.
    #[inline]
    pub fn set(&self, words: &mut [W], value: BitValue) {
        let mask = W::ONE << self.offset;
        match value {
            BitValue::One => words[self.word] |= mask,
            BitValue::Zero => words[self.word] &= !mask,
        }
    }

    /// # Panics
    ///
    /// Panics if the cursor lies outside `words`.
    #[inline]
    pub fn flip(&self, words: &mut [W]) {
        words[self.word] ^= W::ONE << self.offset;
    }
}

impl<W: Word> Default for BitCursor<W> {
    fn default() -> Self {
        Self::at_word(0)
    }
}

impl<W: Word> fmt::Debug for BitCursor<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BitCursor")
            .field("word", &self.word)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<W: Word> fmt::Display for BitCursor<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.word, self.offset)
    }
}

impl<W: Word> Add<usize> for BitCursor<W> {
    type Output = Self;

    fn add(self, bits: usize) -> Self::Output {
        self.advanced(bits)
    }
}

impl<W: Word> AddAssign<usize> for BitCursor<W> {
    fn add_assign(&mut self, bits: usize) {
        self.advance(bits);
    }
}

impl<W: Word> Sub<usize> for BitCursor<W> {
    type Output = Self;

    fn sub(self, bits: usize) -> Self::Output {
        self.retreated(bits)
    }
}

impl<W: Word> SubAssign<usize> for BitCursor<W> {
    fn sub_assign(&mut self, bits: usize) {
        self.retreat(bits);
    }
}

impl<W: Word> Sub for BitCursor<W> {
    type Output = isize;

    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, other: Self) -> Self::Output {
        self.bit_index() as isize - other.bit_index() as isize
    }
}
