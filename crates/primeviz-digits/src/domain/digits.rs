//! Digit frequency tables
//!
//! This module provides the fixed-size [`DigitTable`] and the three counting
//! passes over a prime sequence: every digit, leading digit and trailing digit.
//! All passes are pure and accept any slice of integers; an empty slice yields
//! an all-zero table.

use crate::constants::{DIGIT_RADIX, NUM_DIGITS};
use std::ops::Index;

/// Occurrence counts for the decimal digits 0-9
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitTable {
    counts: [u64; NUM_DIGITS],
}

impl DigitTable {
    /// Create an all-zero table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from raw counts (index = digit)
    pub fn from_counts(counts: [u64; NUM_DIGITS]) -> Self {
        Self { counts }
    }

    /// Increment the entry for `digit`
    ///
    /// # Panics
    /// Panics if `digit >= 10`.
    #[inline]
    pub fn increment(&mut self, digit: u8) {
        self.counts[digit as usize] += 1;
    }

    /// Count for `digit`, or 0 when `digit` is not a decimal digit
    pub fn get(&self, digit: u8) -> u64 {
        self.counts.get(digit as usize).copied().unwrap_or(0)
    }

    /// Sum of all entries
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single entry
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Raw counts, index = digit
    pub fn as_array(&self) -> &[u64; NUM_DIGITS] {
        &self.counts
    }

    /// Iterate over `(digit, count)` pairs in digit order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(digit, &count)| (digit as u8, count))
    }
}

impl Index<usize> for DigitTable {
    type Output = u64;

    fn index(&self, digit: usize) -> &u64 {
        &self.counts[digit]
    }
}

// =============================================================================
// Digit helpers
// =============================================================================

/// Least-significant decimal digit
#[inline]
pub fn trailing_digit(n: u64) -> u8 {
    (n % DIGIT_RADIX) as u8
}

/// Most-significant decimal digit
///
/// Uses repeated integer division so exact powers of ten are handled exactly.
#[inline]
pub fn leading_digit(mut n: u64) -> u8 {
    while n >= DIGIT_RADIX {
        n /= DIGIT_RADIX;
    }
    n as u8
}

/// Number of decimal digits (0 has one digit)
#[inline]
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Call `f` for each decimal digit of `n`, least-significant first
#[inline]
pub fn for_each_digit(mut n: u64, mut f: impl FnMut(u8)) {
    loop {
        f((n % DIGIT_RADIX) as u8);
        n /= DIGIT_RADIX;
        if n == 0 {
            break;
        }
    }
}

// =============================================================================
// Counting passes
// =============================================================================

/// Count every decimal digit of every prime
///
/// A prime with repeated digits contributes once per occurrence
/// (11 adds 2 to the entry for 1).
pub fn count_all_digits(primes: &[u64]) -> DigitTable {
    let mut table = DigitTable::new();
    for &p in primes {
        for_each_digit(p, |d| table.increment(d));
    }
    table
}

/// Count the most-significant digit of each prime
pub fn count_leading_digits(primes: &[u64]) -> DigitTable {
    let mut table = DigitTable::new();
    for &p in primes {
        table.increment(leading_digit(p));
    }
    table
}

/// Count the least-significant digit of each prime (`p % 10`)
pub fn count_trailing_digits(primes: &[u64]) -> DigitTable {
    let mut table = DigitTable::new();
    for &p in primes {
        table.increment(trailing_digit(p));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_PRIMES: [u64; 5] = [2, 3, 5, 7, 11];

    // =========================================================================
    // DigitTable tests
    // =========================================================================

    #[test]
    fn test_table_new_all_zero() {
        let table = DigitTable::new();
        assert_eq!(table.total(), 0);
        assert_eq!(table.max_count(), 0);
        assert_eq!(table.as_array(), &[0; NUM_DIGITS]);
    }

    #[test]
    fn test_table_increment_and_get() {
        let mut table = DigitTable::new();
        table.increment(3);
        table.increment(3);
        table.increment(9);

        assert_eq!(table.get(3), 2);
        assert_eq!(table.get(9), 1);
        assert_eq!(table[3], 2);
        assert_eq!(table.get(10), 0);
        assert_eq!(table.total(), 3);
        assert_eq!(table.max_count(), 2);
    }

    #[test]
    #[should_panic]
    fn test_table_increment_out_of_range() {
        let mut table = DigitTable::new();
        table.increment(10);
    }

    #[test]
    fn test_table_iter_in_digit_order() {
        let table = DigitTable::from_counts([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let pairs: Vec<(u8, u64)> = table.iter().collect();
        assert_eq!(pairs.len(), NUM_DIGITS);
        for (digit, count) in pairs {
            assert_eq!(digit as u64, count);
        }
    }

    // =========================================================================
    // Digit helper tests
    // =========================================================================

    #[test]
    fn test_leading_digit_single_digit() {
        for n in 0..10 {
            assert_eq!(leading_digit(n), n as u8);
        }
    }

    #[test]
    fn test_leading_digit_powers_of_ten() {
        let mut power = 10u64;
        for _ in 1..=19 {
            assert_eq!(leading_digit(power), 1, "10^k = {}", power);
            assert_eq!(leading_digit(power - 1), 9, "10^k - 1 = {}", power - 1);
            assert_eq!(leading_digit(power + 1), 1, "10^k + 1 = {}", power + 1);
            power = power.saturating_mul(10);
        }
        assert_eq!(leading_digit(u64::MAX), 1); // 18446744073709551615
    }

    #[test]
    fn test_trailing_digit() {
        assert_eq!(trailing_digit(0), 0);
        assert_eq!(trailing_digit(7), 7);
        assert_eq!(trailing_digit(11), 1);
        assert_eq!(trailing_digit(1_000_003), 3);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_for_each_digit_order() {
        let mut digits = Vec::new();
        for_each_digit(1203, |d| digits.push(d));
        assert_eq!(digits, vec![3, 0, 2, 1]);

        let mut zero = Vec::new();
        for_each_digit(0, |d| zero.push(d));
        assert_eq!(zero, vec![0]);
    }

    // =========================================================================
    // Counting pass tests
    // =========================================================================

    #[test]
    fn test_count_all_digits_small_primes() {
        let table = count_all_digits(&SMALL_PRIMES);
        assert_eq!(table.as_array(), &[0, 2, 1, 1, 0, 1, 0, 1, 0, 0]);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_count_leading_digits_small_primes() {
        let table = count_leading_digits(&SMALL_PRIMES);
        assert_eq!(table.as_array(), &[0, 1, 1, 1, 0, 1, 0, 1, 0, 0]);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_count_trailing_digits_small_primes() {
        let table = count_trailing_digits(&SMALL_PRIMES);
        assert_eq!(table.as_array(), &[0, 1, 1, 1, 0, 1, 0, 1, 0, 0]);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_counts_empty_input() {
        assert_eq!(count_all_digits(&[]), DigitTable::new());
        assert_eq!(count_leading_digits(&[]), DigitTable::new());
        assert_eq!(count_trailing_digits(&[]), DigitTable::new());
    }

    #[test]
    fn test_count_all_digits_with_zeros() {
        // 101 and 1009 contain zeros
        let table = count_all_digits(&[101, 1009]);
        assert_eq!(table.get(0), 3);
        assert_eq!(table.get(1), 3);
        assert_eq!(table.get(9), 1);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_counts_order_insensitive() {
        let forward = [2u64, 13, 101, 7919];
        let reversed = [7919u64, 101, 13, 2];
        assert_eq!(count_all_digits(&forward), count_all_digits(&reversed));
        assert_eq!(
            count_leading_digits(&forward),
            count_leading_digits(&reversed)
        );
        assert_eq!(
            count_trailing_digits(&forward),
            count_trailing_digits(&reversed)
        );
    }
}
