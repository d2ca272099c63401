//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod digits;
pub mod prime_set;
pub mod sieve;
