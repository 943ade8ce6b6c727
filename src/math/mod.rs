//! Exact arithmetic and combinatorial enumeration utilities

/// Exact reduced fractions used as mean keys
pub mod fraction;
/// Ordered k-selections without repetition
pub mod permutations;
