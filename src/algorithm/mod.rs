/// Bitset over dense column value ids
pub mod bitset;
/// Per-column value indexing and the column-cardinality bound
pub mod columns;
/// First-fit selection strategy
pub mod greedy;
/// Branch-and-bound search for a largest column-disjoint subset
pub mod maximizer;
/// Search milestone hooks
pub mod observer;
/// Strategy dispatch over every target mean
pub mod solver;
