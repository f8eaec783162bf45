use super::writer::write_aligned;
use crate::cursor::{BitCursor, BitValue, assert_range_viability};
use crate::word::Word;

/// Sets every bit of `[first, last)` to `value`.
///
/// Interior words are stored outright; the boundary words are blended so bits
/// outside the range keep their contents.
pub fn fill<W: Word>(words: &mut [W], first: BitCursor<W>, last: BitCursor<W>, value: BitValue) {
    assert_range_viability(words, first, last);
    if first == last {
        return;
    }
    let pattern = value.splat::<W>();
    write_aligned(words, first, BitCursor::distance(first, last), |_| pattern);
}
