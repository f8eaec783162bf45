use super::BitCursor;
use crate::error::{Error, Result};
use crate::word::Word;

/// A validated half-open range of bits `[first, last)`.
///
/// The engines take bare cursor pairs and trust them. `BitRange` is the
/// checked way to build such a pair from untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitRange<W: Word> {
    first: BitCursor<W>,
    last: BitCursor<W>,
}

impl<W: Word> BitRange<W> {
    /// # Errors
    ///
    /// Returns [`Error::ReversedRange`] when `last` precedes `first`.
    pub fn new(first: BitCursor<W>, last: BitCursor<W>) -> Result<Self> {
        if last < first {
            return Err(Error::ReversedRange {
                first: first.bit_index(),
                last: last.bit_index(),
            });
        }
        Ok(BitRange { first, last })
    }

    /// Checks the range against the storage it is meant to address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorOutOfBounds`] when either cursor lies past the end
    /// of `words`, and [`Error::ReversedRange`] when `last` precedes `first`.
    pub fn within(words: &[W], first: BitCursor<W>, last: BitCursor<W>) -> Result<Self> {
        check_range(words, first, last)?;
        Ok(BitRange { first, last })
    }

    /// Every bit of `words`.
    #[must_use]
    pub fn whole(words: &[W]) -> Self {
        BitRange {
            first: BitCursor::at_word(0),
            last: BitCursor::end_of(words),
        }
    }

    #[must_use]
    pub fn first(&self) -> BitCursor<W> {
        self.first
    }

    #[must_use]
    pub fn last(&self) -> BitCursor<W> {
        self.last
    }

    #[must_use]
    pub fn len(&self) -> usize {
        BitCursor::distance(self.first, self.last)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    #[must_use]
    pub fn contains(&self, cursor: BitCursor<W>) -> bool {
        self.first <= cursor && cursor < self.last
    }
}

/// Checks that `cursor` addresses a bit of `words` or the position one past the end.
///
/// # Errors
///
/// Returns [`Error::CursorOutOfBounds`] otherwise.
pub fn check_cursor<W: Word>(words: &[W], cursor: BitCursor<W>) -> Result<()> {
    if cursor <= BitCursor::end_of(words) {
        Ok(())
    } else {
        Err(Error::CursorOutOfBounds {
            word: cursor.word(),
            offset: cursor.offset(),
            len: words.len(),
        })
    }
}

/// Checks that `[first, last)` is a well-formed range inside `words`.
///
/// # Errors
///
/// See [`BitRange::within`].
pub fn check_range<W: Word>(words: &[W], first: BitCursor<W>, last: BitCursor<W>) -> Result<()> {
    check_cursor(words, first)?;
    check_cursor(words, last)?;
    BitRange::new(first, last).map(|_| ())
}

#[track_caller]
#[inline]
pub(crate) fn assert_range_viability<W: Word>(words: &[W], first: BitCursor<W>, last: BitCursor<W>) {
    if cfg!(any(debug_assertions, feature = "strict")) {
        if let Err(error) = check_range(words, first, last) {
            panic!("range [{first}, {last}) is not viable: {error}");
        }
    }
}
