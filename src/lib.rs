//! Exact-mean variation search with column-disjoint subset maximization
//!
//! Every ordered k-selection of the input numbers is generated and grouped by
//! its exact rational mean. For each mean, a branch-and-bound search then
//! picks as many variations as possible such that no two of them hold the
//! same value at the same position.

#![forbid(unsafe_code)]

/// Column-disjoint selection: branch-and-bound search, first-fit, solver
pub mod algorithm;
/// Variation enumeration and grouping by exact mean
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Exact fractions and permutation enumeration
pub mod math;

pub use io::error::{Result, SearchError};
