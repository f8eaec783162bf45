mod common;

use bitalgo::{BitCursor, BitValue, Word, find, ones};
use common::*;
use proptest::prelude::*;
use rand::distributions::{Distribution, Standard};
use sorted_iter::SortedIterator;
use sorted_iter::assume::AssumeSortedByItemExt;

fn check_find<W: Word>(seed: u64, word_count: usize, a: usize, b: usize, sparse: bool)
where
    Standard: Distribution<W>,
{
    let mut words = random_words::<W>(word_count, seed);
    if sparse {
        // mostly zeros, so runs span several words
        let mask = random_words::<W>(word_count, !seed);
        for (word, mask) in words.iter_mut().zip(mask) {
            *word &= mask & (mask >> 3);
        }
    }
    let (first, last) = range_in::<W>(word_count, a, b);
    let bits = bits_of(&words);
    let range = &bits[first.bit_index()..last.bit_index()];
    for value in [false, true] {
        let expected = range.iter().position(|bit| *bit == value).unwrap_or(range.len());
        assert_eq!(find(&words, first, last, value.into()), first + expected);
    }
    let expected: Vec<usize> = range.iter().enumerate().filter(|(_, bit)| **bit).map(|(index, _)| index).collect();
    assert_eq!(ones(&words, first, last).collect::<Vec<_>>(), expected);
}

proptest! {
    #[test]
    fn find_and_ones_match_model(
        seed in any::<u64>(),
        word_count in 1..7usize,
        a in any::<usize>(),
        b in any::<usize>(),
        sparse in any::<bool>(),
    ) {
        call_test_per_word!(check_find, seed, word_count, a, b, sparse);
    }
}

#[test]
fn find_in_empty_range_returns_last() {
    let words = [u32::MAX];
    let at = BitCursor::new(0, 7);
    assert_eq!(find(&words, at, at, BitValue::One), at);
}

#[test]
fn ones_is_sorted() {
    let words = [0b1010_0000_0000_0101u16, 0x8001];
    let left: Vec<usize> = ones(&words, BitCursor::new(0, 0), BitCursor::new(2, 0)).collect();
    assert_eq!(left, vec![0, 2, 13, 15, 16, 31]);

    let first = ones(&words, BitCursor::new(0, 0), BitCursor::new(1, 0));
    let second = ones(&words, BitCursor::new(1, 0), BitCursor::new(2, 0))
        .map(|index| index + 16)
        .assume_sorted_by_item();
    let union: Vec<usize> = first.union(second).collect();
    assert_eq!(union, left);
}
