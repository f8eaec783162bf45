use rand::distributions::{Distribution, Standard};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

pub mod primitives;

/// A fixed-width unsigned storage unit.
///
/// Bit 0 is the least significant bit. Every value must stay within the low
/// [`DIGITS`](Word::DIGITS) bits, so `!word` and `word << n` have to discard
/// anything above the width; the primitive unsigned integers do this for free.
/// Shifting by `DIGITS` or more is not required to be meaningful; the helpers
/// in [`primitives`] guard those amounts.
///
/// Implement this trait to run the algorithms over words of an unusual width.
pub trait Word
where
    Self: Copy
        + Default
        + Eq
        + Ord
        + Hash
        + Debug
        + BitAnd<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + Not<Output = Self>
        + BitAndAssign
        + BitOrAssign
        + BitXorAssign
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>,
{
    /// Number of bits in the word.
    const DIGITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const ONES: Self;

    /// Number of trailing zero bits; `DIGITS` for [`Word::ZERO`].
    fn trailing_zeros(self) -> usize;

    fn to_u128(self) -> u128;

    /// Keeps the low `DIGITS` bits of `value`.
    fn from_u128(value: u128) -> Self;
}

macro_rules! implement_word {
    ($word_type:ty) => {
        impl Word for $word_type {
            const DIGITS: usize = <$word_type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ONES: Self = <$word_type>::MAX;

            #[inline]
            fn trailing_zeros(self) -> usize {
                <$word_type>::trailing_zeros(self) as usize
            }

            #[inline]
            fn to_u128(self) -> u128 {
                u128::from(self)
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_u128(value: u128) -> Self {
                value as $word_type
            }
        }
    };
}

implement_word!(u8);
implement_word!(u16);
implement_word!(u32);
implement_word!(u64);
implement_word!(u128);

/// Bit width of `W`.
#[inline]
#[must_use]
pub const fn digits<W: Word>() -> usize {
    W::DIGITS
}

/// Picks the word type two ranges are read in when they are traversed together.
///
/// For the primitive integers this is the wider of the two. Every [`Word`]
/// reads against itself in its own width.
pub trait ReadWidth<Other: Word>: Word {
    type Read: Word;
}

impl<W: Word> ReadWidth<W> for W {
    type Read = W;
}

macro_rules! implement_read_width {
    ($narrow:ty => $($wide:ty),+) => {
        $(
            impl ReadWidth<$wide> for $narrow {
                type Read = $wide;
            }

            impl ReadWidth<$narrow> for $wide {
                type Read = $wide;
            }
        )+
    };
}

implement_read_width!(u8 => u16, u32, u64, u128);
implement_read_width!(u16 => u32, u64, u128);
implement_read_width!(u32 => u64, u128);
implement_read_width!(u64 => u128);

/// Overwrites every word with random bits.
pub fn fill_random<W: Word>(words: &mut [W], random_number_generator: &mut impl rand::Rng)
where
    Standard: Distribution<W>,
{
    for word in words {
        *word = random_number_generator.r#gen();
    }
}
