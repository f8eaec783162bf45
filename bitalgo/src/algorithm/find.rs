use crate::cursor::{BitCursor, BitValue, assert_range_viability};
use crate::word::Word;
use crate::word::primitives::{extract_word, trailing_run};
use sorted_iter::SortedIterator;
use sorted_iter::assume::AssumeSortedByItemExt;

/// Cursor of the first bit in `[first, last)` equal to `value`, or `last`.
///
/// ```
/// use bitalgo::{BitCursor, BitValue, find};
///
/// let words = [0u8, 0b0010_0000];
/// let found = find(&words, BitCursor::new(0, 3), BitCursor::new(2, 0), BitValue::One);
/// assert_eq!(found, BitCursor::new(1, 5));
/// ```
#[must_use]
pub fn find<W: Word>(words: &[W], first: BitCursor<W>, last: BitCursor<W>, value: BitValue) -> BitCursor<W> {
    assert_range_viability(words, first, last);
    let mut position = first;
    while position < last {
        let bits = (W::DIGITS - position.offset()).min(BitCursor::distance(position, last));
        let chunk = extract_word::<W, W>(words, position, bits);
        let run = trailing_run(chunk, !value).min(bits);
        if run < bits {
            return position + run;
        }
        position.advance(bits);
    }
    last
}

/// Offsets, relative to `first`, of the set bits in `[first, last)` in ascending order.
#[must_use]
pub fn ones<W: Word>(words: &[W], first: BitCursor<W>, last: BitCursor<W>) -> impl SortedIterator<Item = usize> {
    assert_range_viability(words, first, last);
    Ones {
        words,
        first,
        next: first,
        last,
        pending: W::ZERO,
        pending_base: 0,
    }
    .assume_sorted_by_item()
}

/// Iterator behind [`ones`]; pulls one word of the range at a time.
pub struct Ones<'life, W: Word> {
    words: &'life [W],
    first: BitCursor<W>,
    next: BitCursor<W>,
    last: BitCursor<W>,
    pending: W,
    pending_base: usize,
}

impl<W: Word> Iterator for Ones<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pending == W::ZERO {
            if self.next >= self.last {
                return None;
            }
            let bits = (W::DIGITS - self.next.offset()).min(BitCursor::distance(self.next, self.last));
            self.pending = extract_word::<W, W>(self.words, self.next, bits);
            self.pending_base = BitCursor::distance(self.first, self.next);
            self.next.advance(bits);
        }
        let lowest = self.pending.trailing_zeros();
        self.pending ^= W::ONE << lowest;
        Some(self.pending_base + lowest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_stops_at_range_end() {
        let words = [u16::MAX, 0x00FF];
        let first = BitCursor::new(0, 0);
        let last = BitCursor::new(1, 8);
        assert_eq!(find(&words, first, last, BitValue::Zero), last);
        assert_eq!(find(&words, first, BitCursor::new(2, 0), BitValue::Zero), BitCursor::new(1, 8));
        assert_eq!(find(&words, last, last, BitValue::One), last);
    }

    #[test]
    fn ones_are_relative_to_first() {
        let words = [0b1001_0001u8, 0b0000_0011];
        let support: Vec<usize> = ones(&words, BitCursor::new(0, 4), BitCursor::new(1, 1)).collect();
        assert_eq!(support, vec![0, 3, 4]);
    }
}
