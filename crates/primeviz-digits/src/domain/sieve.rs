//! Sieve of Eratosthenes
//!
//! This module provides the prime generator that feeds the digit tabulator.
//! Memory usage is one byte per candidate (`bound + 1` bytes).

use crate::domain::prime_set::PrimeSet;
use thiserror::Error;

/// Errors raised by the prime generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    /// The bound was negative
    #[error("Invalid bound: {0} (must be a non-negative integer)")]
    NegativeBound(i64),
    /// The marker array length does not fit in the address space
    #[error("Bound {0} is too large for this platform")]
    BoundTooLarge(u64),
    /// The marker array could not be allocated
    #[error("Out of memory: failed to allocate {bytes} bytes for the sieve")]
    OutOfMemory { bytes: usize },
}

/// Generate all primes `<= bound`
///
/// Rejects negative bounds with [`SieveError::NegativeBound`].
/// Bounds of 0 and 1 yield an empty set.
pub fn generate_primes(bound: i64) -> Result<PrimeSet, SieveError> {
    let bound = u64::try_from(bound).map_err(|_| SieveError::NegativeBound(bound))?;
    sieve_primes(bound)
}

/// Generate all primes `<= bound` for an already validated bound
///
/// # Errors
/// * [`SieveError::BoundTooLarge`] if `bound + 1` exceeds `usize`
/// * [`SieveError::OutOfMemory`] if the marker array cannot be allocated
pub fn sieve_primes(bound: u64) -> Result<PrimeSet, SieveError> {
    if bound < 2 {
        return Ok(PrimeSet::empty(bound));
    }

    let markers = build_markers(bound)?;

    let primes = markers
        .iter()
        .enumerate()
        .skip(2)
        .filter(|&(_, &is_prime)| is_prime)
        .map(|(z, _)| z as u64)
        .collect();

    Ok(PrimeSet::new(bound, primes))
}

/// Build the marker array for `[0, bound]`, `true` meaning "still a prime candidate"
///
/// Indices 0 and 1 are left untouched; callers skip them.
fn build_markers(bound: u64) -> Result<Vec<bool>, SieveError> {
    let len = usize::try_from(bound)
        .ok()
        .and_then(|b| b.checked_add(1))
        .ok_or(SieveError::BoundTooLarge(bound))?;

    let mut markers = Vec::new();
    markers
        .try_reserve_exact(len)
        .map_err(|_| SieveError::OutOfMemory { bytes: len })?;
    markers.resize(len, true);

    let last = len - 1;
    // isqrt(bound) fits in usize because bound itself does
    let limit = bound.isqrt() as usize;

    for x in 2..=limit {
        if !markers[x] {
            continue;
        }
        // Smaller multiples were already crossed out by smaller factors
        for y in (x * x..=last).step_by(x) {
            markers[y] = false;
        }
    }

    Ok(markers)
}

/// Trial-division primality test
///
/// Used to cross-check the sieve; far slower for bulk generation.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n.is_multiple_of(2) || n.is_multiple_of(3) {
        return false;
    }

    let mut d = 5u64;
    while d <= n / d {
        if n.is_multiple_of(d) || n.is_multiple_of(d + 2) {
            return false;
        }
        d += 6;
    }
    true
}
