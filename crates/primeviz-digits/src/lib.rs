//! primeviz-digits - Digit distributions of prime numbers
//!
//! This crate provides functionality to:
//! - Generate all primes up to a bound with the Sieve of Eratosthenes
//! - Tabulate every digit, leading digit and trailing digit of those primes
//! - Render the three tables as terminal or PNG bar charts

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::report::{Analysis, DigitReport, Distribution, ReportOptions, analyze};
pub use constants::*;
pub use domain::digits::{
    DigitTable, count_all_digits, count_leading_digits, count_trailing_digits,
};
pub use domain::prime_set::PrimeSet;
pub use domain::sieve::{SieveError, generate_primes, sieve_primes};
