use crate::cursor::BitCursor;
use crate::word::Word;
use crate::word::primitives::blend;

/// Writes `len` bits starting at `d_first`, one destination word at a time.
///
/// `produce(bits)` returns the next `bits` bits right-justified. A leading
/// partial word and a trailing partial word are blended so the destination
/// bits around the written range survive; every word in between is stored
/// outright. Returns the cursor one past the last written bit.
pub(crate) fn write_aligned<D: Word>(
    dst: &mut [D],
    d_first: BitCursor<D>,
    len: usize,
    mut produce: impl FnMut(usize) -> D,
) -> BitCursor<D> {
    let mut remaining = len;
    let mut word = d_first.word();
    let offset = d_first.offset();

    if offset != 0 {
        let bits = remaining.min(D::DIGITS - offset);
        let chunk = produce(bits) << offset;
        dst[word] = blend(dst[word], chunk, offset, bits);
        remaining -= bits;
        if offset + bits < D::DIGITS {
            return BitCursor::new(word, offset + bits);
        }
        word += 1;
    }

    while remaining >= D::DIGITS {
        dst[word] = produce(D::DIGITS);
        word += 1;
        remaining -= D::DIGITS;
    }

    if remaining > 0 {
        dst[word] = blend(dst[word], produce(remaining), 0, remaining);
    }
    BitCursor::new(word, remaining)
}
