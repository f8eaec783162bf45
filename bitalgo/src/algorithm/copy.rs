use super::writer::write_aligned;
use crate::cursor::{BitCursor, BitRange, assert_range_viability, check_cursor, check_range};
use crate::error::{Error, Result};
use crate::word::Word;
use crate::word::primitives::extract_word;

/// Copies the bits of `[first, last)` from `src` into `dst` starting at `d_first`.
///
/// Work is aligned to the destination: a leading partial word is blended in,
/// whole destination words are then stored outright, and a trailing partial
/// word is blended again. Destination bits outside the written range are left
/// untouched. Source and destination may use different word widths.
///
/// Returns the cursor one past the last written bit, or `d_first` for an empty
/// range.
///
/// # Panics
///
/// Panics if the destination is shorter than the source range.
///
/// ```
/// use bitalgo::{BitCursor, copy};
///
/// let src = [0b1111_0000u8, 0b0000_1111];
/// let mut dst = [0u16; 1];
/// let end = copy(&src, BitCursor::new(0, 4), BitCursor::new(1, 4), &mut dst, BitCursor::new(0, 2));
/// assert_eq!(dst, [0b11_1111_1100]);
/// assert_eq!(end, BitCursor::new(0, 10));
/// ```
pub fn copy<S: Word, D: Word>(
    src: &[S],
    first: BitCursor<S>,
    last: BitCursor<S>,
    dst: &mut [D],
    d_first: BitCursor<D>,
) -> BitCursor<D> {
    assert_range_viability(src, first, last);
    if first == last {
        return d_first;
    }
    let mut source = first;
    write_aligned(dst, d_first, BitCursor::distance(first, last), |bits| {
        let chunk = extract_word::<S, D>(src, source, bits);
        source.advance(bits);
        chunk
    })
}

/// [`copy`] with the source range and destination capacity checked first.
///
/// # Errors
///
/// Returns [`Error::CursorOutOfBounds`] or [`Error::ReversedRange`] for a
/// range that does not fit its storage, and [`Error::DestinationTooShort`]
/// when fewer than `range.len()` bits follow `d_first` in `dst`.
pub fn try_copy<S: Word, D: Word>(
    src: &[S],
    range: BitRange<S>,
    dst: &mut [D],
    d_first: BitCursor<D>,
) -> Result<BitCursor<D>> {
    check_range(src, range.first(), range.last())?;
    check_cursor(dst, d_first)?;
    let available = BitCursor::distance(d_first, BitCursor::end_of(dst));
    if available < range.len() {
        return Err(Error::DestinationTooShort {
            required: range.len(),
            available,
        });
    }
    Ok(copy(src, range.first(), range.last(), dst, d_first))
}
