//! Immutable ordered set of primes
//!
//! A [`PrimeSet`] is only produced by the sieve, so its contents are always
//! the complete, strictly ascending list of primes in `[2, bound]`.

/// Ordered set of all primes up to an inclusive bound
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeSet {
    /// Inclusive upper limit the set was generated for
    bound: u64,
    /// Primes in ascending order
    primes: Vec<u64>,
}

impl PrimeSet {
    /// Wrap sieve output. Callers must pass ascending primes `<= bound`.
    pub(crate) fn new(bound: u64, primes: Vec<u64>) -> Self {
        debug_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(primes.last().is_none_or(|&p| p <= bound));
        Self { bound, primes }
    }

    /// Empty set for bounds below 2
    pub(crate) fn empty(bound: u64) -> Self {
        Self {
            bound,
            primes: Vec::new(),
        }
    }

    /// Inclusive upper limit used to generate this set
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Number of primes found
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Primes as an ascending slice
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.primes.iter()
    }

    /// Largest prime in the set, if any
    pub fn largest(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    /// Check membership using binary search
    pub fn contains(&self, value: u64) -> bool {
        self.primes.binary_search(&value).is_ok()
    }
}

impl<'a> IntoIterator for &'a PrimeSet {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}
