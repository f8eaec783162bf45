#![allow(dead_code)]

use bitalgo::{BitCursor, Word, fill_random};
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::{Not, Shl, Shr};

const U12_MASK: u16 = 0x0FFF;

/// Twelve-bit word kept in the low bits of a `u16`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(BitAnd, BitOr, BitXor, BitAndAssign, BitOrAssign, BitXorAssign)]
pub struct U12(pub u16);

impl Not for U12 {
    type Output = U12;

    fn not(self) -> U12 {
        U12(!self.0 & U12_MASK)
    }
}

impl Shl<usize> for U12 {
    type Output = U12;

    fn shl(self, bits: usize) -> U12 {
        if bits >= 12 { U12(0) } else { U12((self.0 << bits) & U12_MASK) }
    }
}

impl Shr<usize> for U12 {
    type Output = U12;

    fn shr(self, bits: usize) -> U12 {
        if bits >= 12 { U12(0) } else { U12(self.0 >> bits) }
    }
}

impl Word for U12 {
    const DIGITS: usize = 12;
    const ZERO: Self = U12(0);
    const ONE: Self = U12(1);
    const ONES: Self = U12(U12_MASK);

    fn trailing_zeros(self) -> usize {
        (self.0 | 0x1000).trailing_zeros() as usize
    }

    fn to_u128(self) -> u128 {
        u128::from(self.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_u128(value: u128) -> Self {
        U12((value & u128::from(U12_MASK)) as u16)
    }
}

impl Distribution<U12> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> U12 {
        U12(rng.r#gen::<u16>() & U12_MASK)
    }
}

pub fn random_words<W: Word>(count: usize, seed: u64) -> Vec<W>
where
    Standard: Distribution<W>,
{
    let mut words = vec![W::ZERO; count];
    fill_random(&mut words, &mut StdRng::seed_from_u64(seed));
    words
}

/// Every bit of `words`, least significant first.
pub fn bits_of<W: Word>(words: &[W]) -> Vec<bool> {
    (0..words.len() * W::DIGITS)
        .map(|index| BitCursor::<W>::from_bit_index(index).get(words).into())
        .collect()
}

/// Packs up to `R::DIGITS` bits, least significant first.
pub fn word_of<R: Word>(bits: &[bool]) -> R {
    assert!(bits.len() <= R::DIGITS);
    bits.iter()
        .enumerate()
        .filter(|(_, bit)| **bit)
        .fold(R::ZERO, |word, (index, _)| word | (R::ONE << index))
}

/// Range picked from two arbitrary numbers, inside storage of `word_count` words.
pub fn range_in<W: Word>(word_count: usize, a: usize, b: usize) -> (BitCursor<W>, BitCursor<W>) {
    let total = word_count * W::DIGITS + 1;
    let (low, high) = (a % total, b % total);
    (
        BitCursor::from_bit_index(low.min(high)),
        BitCursor::from_bit_index(low.max(high)),
    )
}

/// Number of words needed to hold `bits` bits.
pub fn words_for<W: Word>(bits: usize) -> usize {
    bits.div_ceil(W::DIGITS)
}

macro_rules! call_test_per_word {
    ($function:ident $(, $argument:expr)*) => {
        $function::<u8>($($argument),*);
        $function::<u16>($($argument),*);
        $function::<u32>($($argument),*);
        $function::<u64>($($argument),*);
        $function::<u128>($($argument),*);
        $function::<U12>($($argument),*);
    };
}

macro_rules! call_test_per_word_pair {
    ($function:ident $(, $argument:expr)*) => {
        $function::<u8, u8>($($argument),*);
        $function::<u8, u32>($($argument),*);
        $function::<u32, u8>($($argument),*);
        $function::<u16, u64>($($argument),*);
        $function::<u64, u16>($($argument),*);
        $function::<u64, u64>($($argument),*);
        $function::<u128, u8>($($argument),*);
        $function::<U12, U12>($($argument),*);
    };
}

#[allow(unused_imports)]
pub(crate) use {call_test_per_word, call_test_per_word_pair};
