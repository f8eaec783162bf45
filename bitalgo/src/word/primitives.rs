//! Word-at-a-time building blocks shared by the engines and the reader.

use crate::cursor::{BitCursor, BitValue};
use crate::word::Word;

/// `word << n`, or zero once `n` reaches the word width.
#[inline]
#[must_use]
pub fn shl_or_zero<W: Word>(word: W, n: usize) -> W {
    if n >= W::DIGITS { W::ZERO } else { word << n }
}

/// `word >> n`, or zero once `n` reaches the word width.
#[inline]
#[must_use]
pub fn shr_or_zero<W: Word>(word: W, n: usize) -> W {
    if n >= W::DIGITS { W::ZERO } else { word >> n }
}

/// Word with bits `[0, bits)` set.
#[inline]
#[must_use]
pub fn low_mask<W: Word>(bits: usize) -> W {
    if bits >= W::DIGITS { W::ONES } else { !(W::ONES << bits) }
}

/// Reinterprets a word in another width, dropping bits the target cannot hold.
#[inline]
#[must_use]
pub fn cast_word<W: Word, R: Word>(word: W) -> R {
    R::from_u128(word.to_u128())
}

/// Reads the `n` bits starting at `at`, right-justified into an `R`.
///
/// Bits at and above `n` in the result are zero. Only the words that hold at
/// least one of the requested bits are read, so the caller bounds `n` by what
/// is left of its range and no end cursor is needed here.
///
/// # Panics
///
/// Panics if the requested bits run past the end of `words`.
#[inline]
#[must_use]
pub fn extract_word<W: Word, R: Word>(words: &[W], at: BitCursor<W>, n: usize) -> R {
    debug_assert!(n <= R::DIGITS, "cannot extract {n} bits into a {}-bit word", R::DIGITS);
    if n == 0 {
        return R::ZERO;
    }
    let offset = at.offset();
    if W::DIGITS == R::DIGITS {
        let head = words[at.word()] >> offset;
        let merged = if offset + n > W::DIGITS {
            head | (words[at.word() + 1] << (W::DIGITS - offset))
        } else {
            head
        };
        return cast_word(merged & low_mask::<W>(n));
    }

    let mut value = R::ZERO;
    let mut taken = 0;
    let mut cursor = at;
    while taken < n {
        let take = (W::DIGITS - cursor.offset()).min(n - taken);
        let chunk = (words[cursor.word()] >> cursor.offset()) & low_mask::<W>(take);
        value |= cast_word::<W, R>(chunk) << taken;
        taken += take;
        cursor = BitCursor::at_word(cursor.word() + 1);
    }
    value
}

/// Takes the bits selected by `mask` from `replacement` and the rest from `base`.
#[inline]
#[must_use]
pub fn blend_masked<W: Word>(base: W, replacement: W, mask: W) -> W {
    base ^ ((base ^ replacement) & mask)
}

/// Replaces bits `[boundary, boundary + width)` of `low_word` with the bits of
/// `high_word` at the same positions.
///
/// `high_word` is expected to be shifted into place already. Bits of `low_word`
/// below `boundary` and at or above `boundary + width` survive.
#[inline]
#[must_use]
pub fn blend<W: Word>(low_word: W, high_word: W, boundary: usize, width: usize) -> W {
    blend_masked(low_word, high_word, shl_or_zero(low_mask::<W>(width), boundary))
}

/// Shifts the double word `high:low` toward the most significant end by `n`
/// and returns its high half.
#[inline]
#[must_use]
pub fn shift_merge_left<W: Word>(low: W, high: W, n: usize) -> W {
    debug_assert!(n < W::DIGITS);
    (high << n) | shr_or_zero(low, W::DIGITS - n)
}

/// Shifts the double word `high:low` toward the least significant end by `n`
/// and returns its low half.
#[inline]
#[must_use]
pub fn shift_merge_right<W: Word>(low: W, high: W, n: usize) -> W {
    debug_assert!(n < W::DIGITS);
    (low >> n) | shl_or_zero(high, W::DIGITS - n)
}

/// Length of the run of `value` bits at the low end of `word`.
#[inline]
#[must_use]
pub fn trailing_run<W: Word>(word: W, value: BitValue) -> usize {
    match value {
        BitValue::Zero => word.trailing_zeros(),
        BitValue::One => (!word).trailing_zeros(),
    }
}
