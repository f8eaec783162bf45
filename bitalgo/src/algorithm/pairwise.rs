use crate::cursor::BitCursor;
use crate::reader::DualRangeReader;
use crate::word::{ReadWidth, Word};
use std::cmp::Ordering;

/// First pair of positions at which `[first1, last1)` and `[first2, last2)` differ.
///
/// When the common prefix of the two ranges holds no difference, the cursors
/// one past that prefix are returned; for ranges of equal length that is
/// `(last1, last2)`.
///
/// ```
/// use bitalgo::{BitCursor, mismatch};
///
/// let left = [0b1011_0110u8];
/// let right = [0b1101_0110_0000u16];
/// let (at_left, at_right) = mismatch(
///     &left, BitCursor::new(0, 1), BitCursor::new(0, 8),
///     &right, BitCursor::new(0, 5), BitCursor::new(0, 12),
/// );
/// assert_eq!((at_left, at_right), (BitCursor::new(0, 5), BitCursor::new(0, 9)));
/// ```
#[must_use]
pub fn mismatch<W1, W2>(
    words1: &[W1],
    first1: BitCursor<W1>,
    last1: BitCursor<W1>,
    words2: &[W2],
    first2: BitCursor<W2>,
    last2: BitCursor<W2>,
) -> (BitCursor<W1>, BitCursor<W2>)
where
    W1: ReadWidth<W2>,
    W2: Word,
{
    let reader = DualRangeReader::new(words1, first1, last1, words2, first2, last2);
    let mut consumed = 0;
    for chunk in reader {
        if let Some(position) = chunk.first_difference() {
            return (first1 + (consumed + position), first2 + (consumed + position));
        }
        consumed += chunk.relevant_bits;
    }
    (first1 + consumed, first2 + consumed)
}

/// Whether both ranges have the same length and hold the same bits.
#[must_use]
pub fn equal<W1, W2>(
    words1: &[W1],
    first1: BitCursor<W1>,
    last1: BitCursor<W1>,
    words2: &[W2],
    first2: BitCursor<W2>,
    last2: BitCursor<W2>,
) -> bool
where
    W1: ReadWidth<W2>,
    W2: Word,
{
    if BitCursor::distance(first1, last1) != BitCursor::distance(first2, last2) {
        return false;
    }
    mismatch(words1, first1, last1, words2, first2, last2).0 == last1
}

/// Lexicographic order of the two bit sequences, read from `first` upward.
///
/// A zero bit orders before a one bit, and a proper prefix orders before the
/// longer range.
#[must_use]
pub fn compare<W1, W2>(
    words1: &[W1],
    first1: BitCursor<W1>,
    last1: BitCursor<W1>,
    words2: &[W2],
    first2: BitCursor<W2>,
    last2: BitCursor<W2>,
) -> Ordering
where
    W1: ReadWidth<W2>,
    W2: Word,
{
    let (at1, at2) = mismatch(words1, first1, last1, words2, first2, last2);
    if at1 < last1 && at2 < last2 {
        return at1.get(words1).cmp(&at2.get(words2));
    }
    BitCursor::distance(first1, last1).cmp(&BitCursor::distance(first2, last2))
}
