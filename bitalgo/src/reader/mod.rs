//! Lockstep reading of two bit ranges in matched word-sized chunks.

mod alignment;

pub use alignment::Alignment;
use alignment::Phase;

use crate::cursor::{BitCursor, BitValue, assert_range_viability, check_range};
use crate::error::{Error, Result};
use crate::word::primitives::{cast_word, extract_word, low_mask};
use crate::word::{ReadWidth, Word};
use std::fmt;
use std::marker::PhantomData;

/// Reads two ranges of possibly different word widths in chunks of the read
/// word type `R`.
///
/// Each call returns one chunk from each range, both right-justified, covering
/// the same number of bits. The protocol is one [`read_first`] followed by
/// [`read`] while [`is_next_read_last`] is false and one final [`read_last`].
/// The first read brings the range that lags behind onto a word boundary, so
/// every later read can fetch at least one side as whole words.
///
/// Bits of a chunk at and above [`relevant_bits`] are not part of the ranges.
/// Mask them off or [`pad`] them before comparing.
///
/// When the ranges differ in length, only their common prefix is read; see
/// [`is_mismatched`].
///
/// ```
/// use bitalgo::{BitCursor, DualRangeReader};
///
/// let left = [0xA5u8, 0x0F];
/// let right = [0x5A_A5u16];
/// let mut reader = DualRangeReader::new(
///     &left, BitCursor::new(0, 0), BitCursor::new(1, 4),
///     &right, BitCursor::new(0, 0), BitCursor::new(0, 12),
/// );
/// assert!(reader.is_next_read_last());
/// let (first, second) = reader.read_first();
/// assert_eq!(reader.relevant_bits(), 12);
/// assert_eq!((first, second), (0x0FA5u16, 0x0AA5u16));
/// ```
///
/// [`read_first`]: DualRangeReader::read_first
/// [`read`]: DualRangeReader::read
/// [`is_next_read_last`]: DualRangeReader::is_next_read_last
/// [`read_last`]: DualRangeReader::read_last
/// [`relevant_bits`]: DualRangeReader::relevant_bits
/// [`is_mismatched`]: DualRangeReader::is_mismatched
pub struct DualRangeReader<'life, W1: Word, W2: Word, R: Word> {
    words1: &'life [W1],
    words2: &'life [W2],
    cursor1: BitCursor<W1>,
    cursor2: BitCursor<W2>,
    lengths: (usize, usize),
    remaining: usize,
    alignment: Alignment,
    phase: Phase,
    padding: BitValue,
    relevant_bits: usize,
    marker: PhantomData<R>,
}

impl<'life, W1, W2> DualRangeReader<'life, W1, W2, <W1 as ReadWidth<W2>>::Read>
where
    W1: ReadWidth<W2>,
    W2: Word,
{
    /// Reader over `[first1, last1)` of `words1` and `[first2, last2)` of
    /// `words2`, reading in the wider of the two word types.
    #[must_use]
    pub fn new(
        words1: &'life [W1],
        first1: BitCursor<W1>,
        last1: BitCursor<W1>,
        words2: &'life [W2],
        first2: BitCursor<W2>,
        last2: BitCursor<W2>,
    ) -> Self {
        Self::with_read_type(words1, first1, last1, words2, first2, last2)
    }

    /// [`DualRangeReader::new`] for untrusted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorOutOfBounds`] or [`Error::ReversedRange`] when
    /// a range does not fit its storage, and [`Error::LengthMismatch`] when
    /// the ranges differ in length.
    pub fn try_new(
        words1: &'life [W1],
        first1: BitCursor<W1>,
        last1: BitCursor<W1>,
        words2: &'life [W2],
        first2: BitCursor<W2>,
        last2: BitCursor<W2>,
    ) -> Result<Self> {
        check_range(words1, first1, last1)?;
        check_range(words2, first2, last2)?;
        let first = BitCursor::distance(first1, last1);
        let second = BitCursor::distance(first2, last2);
        if first != second {
            return Err(Error::LengthMismatch { first, second });
        }
        Ok(Self::new(words1, first1, last1, words2, first2, last2))
    }
}

impl<'life, W1: Word, W2: Word, R: Word> DualRangeReader<'life, W1, W2, R> {
    /// Reader with an explicitly chosen read word type.
    ///
    /// # Panics
    ///
    /// Panics if `R` is narrower than either storage word type.
    #[must_use]
    pub fn with_read_type(
        words1: &'life [W1],
        first1: BitCursor<W1>,
        last1: BitCursor<W1>,
        words2: &'life [W2],
        first2: BitCursor<W2>,
        last2: BitCursor<W2>,
    ) -> Self {
        assert!(
            R::DIGITS >= W1::DIGITS && R::DIGITS >= W2::DIGITS,
            "read word of {} bits cannot hold storage words of {} and {} bits",
            R::DIGITS,
            W1::DIGITS,
            W2::DIGITS
        );
        assert_range_viability(words1, first1, last1);
        assert_range_viability(words2, first2, last2);
        let lengths = (BitCursor::distance(first1, last1), BitCursor::distance(first2, last2));
        DualRangeReader {
            words1,
            words2,
            cursor1: first1,
            cursor2: first2,
            lengths,
            remaining: lengths.0.min(lengths.1),
            alignment: Alignment::classify(first1.offset(), first2.offset()),
            phase: Phase::Initial,
            padding: BitValue::Zero,
            relevant_bits: 0,
            marker: PhantomData,
        }
    }

    /// Sets the value [`DualRangeReader::pad_read`] fills irrelevant bits with.
    #[must_use]
    pub fn with_padding(mut self, padding: BitValue) -> Self {
        self.padding = padding;
        self
    }

    pub fn set_padding(&mut self, padding: BitValue) {
        self.padding = padding;
    }

    #[must_use]
    pub fn padding(&self) -> BitValue {
        self.padding
    }

    /// Reads the first chunk.
    ///
    /// With at least one range on a word boundary this is a full `R`-sized
    /// chunk. Otherwise only enough bits are read to bring the range that is
    /// behind onto its next word boundary. Fewer bits are read when the
    /// ranges are shorter.
    pub fn read_first(&mut self) -> (R, R) {
        debug_assert_eq!(self.phase, Phase::Initial, "read_first must be the first read");
        let bits = match self.alignment {
            Alignment::BothAligned | Alignment::FirstAligned | Alignment::SecondAligned => R::DIGITS,
            Alignment::FirstAhead => W2::DIGITS - self.cursor2.offset(),
            Alignment::SecondAhead => W1::DIGITS - self.cursor1.offset(),
        }
        .min(self.remaining);
        let pair = self.fetch(bits);
        self.alignment = self.alignment.after_first_read();
        self.phase = Phase::Steady;
        pair
    }

    /// Reads a full `R`-sized chunk from each range.
    pub fn read(&mut self) -> (R, R) {
        debug_assert_eq!(self.phase, Phase::Steady, "read must follow read_first");
        debug_assert!(!self.is_next_read_last(), "the next read is the last one");
        self.fetch(R::DIGITS)
    }

    /// Reads whatever is left of the common range, possibly nothing.
    ///
    /// Storage is not touched when nothing is left.
    pub fn read_last(&mut self) -> (R, R) {
        debug_assert_ne!(self.phase, Phase::Finished, "read_last was already called");
        debug_assert!(self.is_next_read_last(), "more than one chunk is left");
        self.phase = Phase::Finished;
        if self.remaining == 0 {
            self.relevant_bits = 0;
            return (R::ZERO, R::ZERO);
        }
        self.fetch(self.remaining)
    }

    #[must_use]
    pub fn is_next_read_last(&self) -> bool {
        self.remaining <= R::DIGITS
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// Number of bits of the most recent chunk that belong to the ranges.
    #[must_use]
    pub fn relevant_bits(&self) -> usize {
        self.relevant_bits
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Cursors to the next unread bit of each range.
    #[must_use]
    pub fn positions(&self) -> (BitCursor<W1>, BitCursor<W2>) {
        (self.cursor1, self.cursor2)
    }

    /// Full lengths of both ranges in bits.
    #[must_use]
    pub fn lengths(&self) -> (usize, usize) {
        self.lengths
    }

    #[must_use]
    pub fn is_mismatched(&self) -> bool {
        self.lengths.0 != self.lengths.1
    }

    /// Pads the bits of `pair` above the most recent chunk with the reader's padding value.
    #[must_use]
    pub fn pad_read(&self, pair: (R, R)) -> (R, R) {
        pad(pair, self.relevant_bits, self.padding)
    }

    fn fetch(&mut self, bits: usize) -> (R, R) {
        let pair = match self.alignment {
            Alignment::BothAligned => (self.load_first(bits), self.load_second(bits)),
            Alignment::FirstAligned => (
                self.load_first(bits),
                extract_word(self.words2, self.cursor2, bits),
            ),
            Alignment::SecondAligned => (
                extract_word(self.words1, self.cursor1, bits),
                self.load_second(bits),
            ),
            Alignment::FirstAhead | Alignment::SecondAhead => (
                extract_word(self.words1, self.cursor1, bits),
                extract_word(self.words2, self.cursor2, bits),
            ),
        };
        self.cursor1.advance(bits);
        self.cursor2.advance(bits);
        self.remaining -= bits;
        self.relevant_bits = bits;
        pair
    }

    fn load_first(&self, bits: usize) -> R {
        load(self.words1, self.cursor1, bits)
    }

    fn load_second(&self, bits: usize) -> R {
        load(self.words2, self.cursor2, bits)
    }
}

/// A whole storage word when one is exactly what is asked for.
#[inline]
fn load<W: Word, R: Word>(words: &[W], at: BitCursor<W>, bits: usize) -> R {
    if W::DIGITS == R::DIGITS && bits == R::DIGITS && at.is_aligned() {
        cast_word(words[at.word()])
    } else {
        extract_word(words, at, bits)
    }
}

/// Sets the bits at and above `relevant_bits` in both words of `pair` to `fill`.
#[inline]
#[must_use]
pub fn pad<R: Word>(pair: (R, R), relevant_bits: usize, fill: BitValue) -> (R, R) {
    let keep = low_mask::<R>(relevant_bits);
    match fill {
        BitValue::Zero => (pair.0 & keep, pair.1 & keep),
        BitValue::One => (pair.0 | !keep, pair.1 | !keep),
    }
}

/// One lockstep chunk produced by iterating a [`DualRangeReader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<R: Word> {
    pub first: R,
    pub second: R,
    pub relevant_bits: usize,
}

impl<R: Word> Chunk<R> {
    /// Position within the chunk of the lowest relevant bit where the two sides differ.
    #[must_use]
    pub fn first_difference(&self) -> Option<usize> {
        let difference = (self.first ^ self.second) & low_mask::<R>(self.relevant_bits);
        (difference != R::ZERO).then(|| difference.trailing_zeros())
    }
}

/// Drives the read protocol, yielding every non-empty chunk.
impl<W1: Word, W2: Word, R: Word> Iterator for DualRangeReader<'_, W1, W2, R> {
    type Item = Chunk<R>;

    fn next(&mut self) -> Option<Chunk<R>> {
        let (first, second) = match self.phase {
            Phase::Finished => return None,
            Phase::Initial => self.read_first(),
            Phase::Steady if self.is_next_read_last() => self.read_last(),
            Phase::Steady => self.read(),
        };
        if self.relevant_bits == 0 {
            self.phase = Phase::Finished;
            return None;
        }
        Some(Chunk {
            first,
            second,
            relevant_bits: self.relevant_bits,
        })
    }
}

impl<W1: Word, W2: Word, R: Word> fmt::Debug for DualRangeReader<'_, W1, W2, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DualRangeReader")
            .field("positions", &self.positions())
            .field("lengths", &self.lengths)
            .field("remaining", &self.remaining)
            .field("alignment", &self.alignment)
            .field("phase", &self.phase)
            .field("padding", &self.padding)
            .field("relevant_bits", &self.relevant_bits)
            .finish()
    }
}
