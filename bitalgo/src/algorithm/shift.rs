use crate::cursor::{BitCursor, assert_range_viability};
use crate::word::Word;
use crate::word::primitives::{blend, shift_merge_left, shift_merge_right};

/// Shifts the bits of `[first, last)` toward `first` by `n` positions, in place.
///
/// Afterwards bit `first + i` holds what bit `first + i + n` held before, for
/// every `i` below `distance(first, last) - n`. Returns `last - n`, the end of
/// that shifted content. The `n` bits from there to `last` are left with
/// unspecified content (see [`fill`](crate::fill)); bits outside the range are
/// never modified.
///
/// When `n` is zero or not below the length of the range nothing is moved and
/// `first` is returned.
///
/// ```
/// use bitalgo::{BitCursor, shift_left};
///
/// let mut words = [0b1011_0100u8];
/// let end = shift_left(&mut words, BitCursor::new(0, 2), BitCursor::new(0, 8), 2);
/// assert_eq!(end, BitCursor::new(0, 6));
/// assert_eq!(words[0] & 0b0011_1111, 0b0010_1100);
/// ```
pub fn shift_left<W: Word>(words: &mut [W], first: BitCursor<W>, last: BitCursor<W>, n: usize) -> BitCursor<W> {
    assert_range_viability(words, first, last);
    if n == 0 || n >= BitCursor::distance(first, last) {
        return first;
    }
    let word_shift = n / W::DIGITS;
    let bit_shift = n % W::DIGITS;
    let start = first.word();
    let end = span_end(last);
    let boundaries = Boundaries::save(words, first, last);

    let moved_end = end - word_shift;
    if word_shift > 0 {
        words.copy_within(start + word_shift..end, start);
    }
    if bit_shift > 0 {
        for index in start..moved_end {
            let next = if index + 1 < moved_end { words[index + 1] } else { W::ZERO };
            words[index] = shift_merge_right(words[index], next, bit_shift);
        }
    }

    boundaries.restore(words, first, last);
    last - n
}

/// Shifts the bits of `[first, last)` toward `last` by `n` positions, in place.
///
/// Afterwards bit `first + n + i` holds what bit `first + i` held before, for
/// every `i` below `distance(first, last) - n`. Returns `first + n`, the start
/// of that shifted content. The `n` vacated bits from `first` are left with
/// unspecified content; bits outside the range are never modified.
///
/// When `n` is zero or not below the length of the range nothing is moved and
/// `first` is returned.
pub fn shift_right<W: Word>(words: &mut [W], first: BitCursor<W>, last: BitCursor<W>, n: usize) -> BitCursor<W> {
    assert_range_viability(words, first, last);
    if n == 0 || n >= BitCursor::distance(first, last) {
        return first;
    }
    let word_shift = n / W::DIGITS;
    let bit_shift = n % W::DIGITS;
    let start = first.word();
    let end = span_end(last);
    let boundaries = Boundaries::save(words, first, last);

    let moved_start = start + word_shift;
    if word_shift > 0 {
        words.copy_within(start..end - word_shift, moved_start);
    }
    if bit_shift > 0 {
        let mut carry = W::ZERO;
        for index in moved_start..end {
            let current = words[index];
            words[index] = shift_merge_left(carry, current, bit_shift);
            carry = current;
        }
    }

    boundaries.restore(words, first, last);
    first + n
}

/// One past the last word holding a bit of a range ending at `last`.
fn span_end<W: Word>(last: BitCursor<W>) -> usize {
    last.word() + usize::from(!last.is_aligned())
}

/// Pre-shift contents of the words the range shares with its neighbours.
struct Boundaries<W: Word> {
    first: W,
    last: Option<W>,
}

impl<W: Word> Boundaries<W> {
    fn save(words: &[W], first: BitCursor<W>, last: BitCursor<W>) -> Self {
        Boundaries {
            first: words[first.word()],
            last: (!last.is_aligned()).then(|| words[last.word()]),
        }
    }

    fn restore(&self, words: &mut [W], first: BitCursor<W>, last: BitCursor<W>) {
        if !first.is_aligned() {
            let word = first.word();
            words[word] = blend(words[word], self.first, 0, first.offset());
        }
        if let Some(saved) = self.last {
            let word = last.word();
            words[word] = blend(words[word], saved, last.offset(), W::DIGITS - last.offset());
        }
    }
}
