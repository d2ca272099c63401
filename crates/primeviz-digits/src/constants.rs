//! Digit tabulation and chart constants

// =============================================================================
// Digit tables
// =============================================================================

/// Base used for digit extraction
pub const DIGIT_RADIX: u64 = 10;

/// Number of entries in a digit table (digits 0-9)
pub const NUM_DIGITS: usize = 10;

// =============================================================================
// Sieve parameters
// =============================================================================

/// Limits above this value trigger a memory warning in the CLI (1 GiB of markers)
pub const LARGE_BOUND_WARNING: u64 = 1 << 30;

// =============================================================================
// Chart parameters
// =============================================================================

/// PNG image width in pixels
pub const CHART_WIDTH: u32 = 1200;

/// PNG image height in pixels (three charts stacked vertically)
pub const CHART_HEIGHT: u32 = 1500;

/// Maximum width of a terminal bar in characters
pub const TEXT_BAR_WIDTH: usize = 40;

/// Character used to draw terminal bars
pub const TEXT_BAR_CHAR: char = '#';

/// Bar colour of the all-digits chart (pink)
pub const ALL_DIGITS_COLOR: (u8, u8, u8) = (255, 192, 203);

/// Bar colour of the leading-digit chart (tan)
pub const LEADING_DIGIT_COLOR: (u8, u8, u8) = (210, 180, 140);

/// Bar colour of the trailing-digit chart (orange)
pub const TRAILING_DIGIT_COLOR: (u8, u8, u8) = (255, 165, 0);
