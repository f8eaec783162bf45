use super::writer::write_aligned;
use crate::cursor::{BitCursor, assert_range_viability};
use crate::word::Word;
use crate::word::primitives::extract_word;

/// Writes `op` applied to each destination-sized chunk of `[first, last)` into `dst`.
///
/// Chunks are cut at the destination's word boundaries, exactly as [`copy`](crate::copy)
/// does, so `op` sees whole words except at the two ends of the destination
/// range. Bits `op` sets above a partial chunk are discarded.
pub fn transform_unary<S: Word, D: Word>(
    src: &[S],
    first: BitCursor<S>,
    last: BitCursor<S>,
    dst: &mut [D],
    d_first: BitCursor<D>,
    mut op: impl FnMut(D) -> D,
) -> BitCursor<D> {
    assert_range_viability(src, first, last);
    if first == last {
        return d_first;
    }
    let mut source = first;
    write_aligned(dst, d_first, BitCursor::distance(first, last), |bits| {
        let chunk = extract_word::<S, D>(src, source, bits);
        source.advance(bits);
        op(chunk)
    })
}

/// Combines `[first1, last1)` with the equally long range starting at `first2`
/// through `op` and writes the result into `dst` starting at `d_first`.
///
/// ```
/// use bitalgo::{BitCursor, transform};
///
/// let left = [0b1100u8];
/// let right = [0b1010u8];
/// let mut out = [0u8];
/// transform(&left, BitCursor::new(0, 0), BitCursor::new(0, 4), &right, BitCursor::new(0, 0),
///     &mut out, BitCursor::new(0, 0), |a, b| a ^ b);
/// assert_eq!(out, [0b0110]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn transform<S1: Word, S2: Word, D: Word>(
    src1: &[S1],
    first1: BitCursor<S1>,
    last1: BitCursor<S1>,
    src2: &[S2],
    first2: BitCursor<S2>,
    dst: &mut [D],
    d_first: BitCursor<D>,
    mut op: impl FnMut(D, D) -> D,
) -> BitCursor<D> {
    assert_range_viability(src1, first1, last1);
    if first1 == last1 {
        return d_first;
    }
    let len = BitCursor::distance(first1, last1);
    assert_range_viability(src2, first2, first2 + len);
    let mut source1 = first1;
    let mut source2 = first2;
    write_aligned(dst, d_first, len, |bits| {
        let chunk1 = extract_word::<S1, D>(src1, source1, bits);
        let chunk2 = extract_word::<S2, D>(src2, source2, bits);
        source1.advance(bits);
        source2.advance(bits);
        op(chunk1, chunk2)
    })
}
