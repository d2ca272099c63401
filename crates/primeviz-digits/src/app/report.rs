//! Digit report workflow
//!
//! This module runs the sieve and the three counting passes and bundles the
//! results for the renderers.

use crate::domain::digits::{
    DigitTable, count_all_digits, count_leading_digits, count_trailing_digits,
};
use crate::domain::prime_set::PrimeSet;
use crate::domain::sieve::{SieveError, generate_primes};

use crate::constants::{ALL_DIGITS_COLOR, LEADING_DIGIT_COLOR, TRAILING_DIGIT_COLOR};

/// The three digit distributions reported for a prime set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Every digit of every prime
    AllDigits,
    /// Most-significant digit of each prime
    LeadingDigit,
    /// Least-significant digit of each prime
    TrailingDigit,
}

impl Distribution {
    /// All distributions in display order
    pub const ALL: [Distribution; 3] = [
        Distribution::AllDigits,
        Distribution::LeadingDigit,
        Distribution::TrailingDigit,
    ];

    /// Chart title for the given bound
    pub fn title(self, bound: u64) -> String {
        match self {
            Self::AllDigits => {
                format!("Occurrences of the digits in prime numbers up to {}", bound)
            }
            Self::LeadingDigit => format!(
                "Distribution of leading digits in prime numbers up to {}",
                bound
            ),
            Self::TrailingDigit => format!(
                "Distribution of final digits in prime numbers up to {}",
                bound
            ),
        }
    }

    /// Bar colour as RGB
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Self::AllDigits => ALL_DIGITS_COLOR,
            Self::LeadingDigit => LEADING_DIGIT_COLOR,
            Self::TrailingDigit => TRAILING_DIGIT_COLOR,
        }
    }
}

/// Digit tables computed from one prime set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitReport {
    /// Inclusive bound the primes were generated for
    pub bound: u64,
    /// Number of primes found
    pub prime_count: u64,
    pub all_digits: DigitTable,
    pub leading_digits: DigitTable,
    pub trailing_digits: DigitTable,
}

impl DigitReport {
    /// Table for the given distribution
    pub fn table(&self, distribution: Distribution) -> &DigitTable {
        match distribution {
            Distribution::AllDigits => &self.all_digits,
            Distribution::LeadingDigit => &self.leading_digits,
            Distribution::TrailingDigit => &self.trailing_digits,
        }
    }

    /// Figure heading shared by all three charts
    pub fn heading(&self) -> String {
        format!("Data For Prime Numbers Up To {}", self.bound)
    }

    /// Iterate over `(distribution, table)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Distribution, &DigitTable)> + '_ {
        Distribution::ALL.into_iter().map(|d| (d, self.table(d)))
    }
}

/// Options for report building
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    /// Run the three counting passes on the rayon thread pool
    pub parallel: bool,
}

impl ReportOptions {
    /// Enable or disable parallel tabulation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Result of a full analysis run
#[derive(Clone, Debug)]
pub struct Analysis {
    pub primes: PrimeSet,
    pub report: DigitReport,
}

/// Run the three counting passes sequentially
pub fn tabulate(primes: &PrimeSet) -> DigitReport {
    let slice = primes.as_slice();

    DigitReport {
        bound: primes.bound(),
        prime_count: primes.len() as u64,
        all_digits: count_all_digits(slice),
        leading_digits: count_leading_digits(slice),
        trailing_digits: count_trailing_digits(slice),
    }
}

/// Run the three counting passes in parallel
///
/// Each pass only reads the prime set and owns its table, so the result is
/// identical to [`tabulate`].
pub fn tabulate_parallel(primes: &PrimeSet) -> DigitReport {
    let slice = primes.as_slice();

    let (all_digits, (leading_digits, trailing_digits)) = rayon::join(
        || count_all_digits(slice),
        || {
            rayon::join(
                || count_leading_digits(slice),
                || count_trailing_digits(slice),
            )
        },
    );

    DigitReport {
        bound: primes.bound(),
        prime_count: primes.len() as u64,
        all_digits,
        leading_digits,
        trailing_digits,
    }
}

/// Generate primes up to `bound` and tabulate their digits
///
/// # Arguments
/// * `bound` - Inclusive upper limit (negative values are rejected)
/// * `options` - Report options (parallel tabulation)
pub fn analyze(bound: i64, options: ReportOptions) -> Result<Analysis, SieveError> {
    let primes = generate_primes(bound)?;

    let report = if options.parallel {
        tabulate_parallel(&primes)
    } else {
        tabulate(&primes)
    };

    Ok(Analysis { primes, report })
}
