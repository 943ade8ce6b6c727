/// Candidate enumeration and grouping by exact mean
pub mod groups;
/// Immutable ordered selections with exact sums and means
pub mod variation;
