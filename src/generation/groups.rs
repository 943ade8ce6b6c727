//! Candidate generation: every ordered k-selection, grouped by exact mean

use crate::generation::variation::Variation;
use crate::io::configuration::MAX_VARIATIONS;
use crate::io::error::{Result, invalid_arity, invalid_parameter};
use crate::math::fraction::Mean;
use crate::math::permutations::{KPermutations, falling_factorial};
use std::collections::BTreeMap;

/// Check `0 < k <= n` and that the variation count stays within limits
///
/// Returns the number of variations that will be generated.
///
/// # Errors
///
/// Returns `InvalidArity` when `k == 0` or `k > n`, and `InvalidParameter`
/// when the count overflows or exceeds [`MAX_VARIATIONS`]
pub fn validate_arity(n: usize, k: usize) -> Result<usize> {
    if k == 0 || k > n {
        return Err(invalid_arity(k, n));
    }

    let count = falling_factorial(n, k)
        .ok_or_else(|| invalid_parameter("k", &k, &"variation count overflows"))?;
    if count > MAX_VARIATIONS {
        return Err(invalid_parameter(
            "k",
            &k,
            &format!("{count} variations exceed the limit of {MAX_VARIATIONS}"),
        ));
    }
    Ok(count)
}

/// Iterate every ordered k-selection of distinct input positions
///
/// Equal values at different input positions are distinct draws, so a
/// multiset input yields repeated value sequences.
///
/// # Errors
///
/// Returns an error if the arity is invalid (see [`validate_arity`])
pub fn variations(numbers: &[i64], k: usize) -> Result<impl Iterator<Item = Result<Variation>> + '_> {
    validate_arity(numbers.len(), k)?;

    Ok(KPermutations::new(numbers.len(), k).map(move |positions| {
        let values = positions
            .iter()
            .filter_map(|&position| numbers.get(position).copied())
            .collect();
        Variation::new(values)
    }))
}

/// Collect every variation in generation order
///
/// # Errors
///
/// Returns an error if the arity is invalid or a sum overflows
pub fn generate_variations(numbers: &[i64], k: usize) -> Result<Vec<Variation>> {
    variations(numbers, k)?.collect()
}

/// Variations grouped by their exact mean
///
/// Keys are exactly the means realized by at least one variation, in
/// ascending order. Each list keeps generation order.
#[derive(Clone, Debug, Default)]
pub struct CandidateGroups {
    arity: usize,
    total: usize,
    groups: BTreeMap<Mean, Vec<Variation>>,
}

impl CandidateGroups {
    /// Enumerate all variations of `numbers` of length `k` and group them
    ///
    /// # Errors
    ///
    /// Returns `InvalidArity` when `k == 0` or `k > numbers.len()`; no groups
    /// are produced in that case
    pub fn generate(numbers: &[i64], k: usize) -> Result<Self> {
        let mut groups = Self::empty(k);
        for variation in variations(numbers, k)? {
            groups.insert(variation?);
        }
        Ok(groups)
    }

    /// Group already generated variations of length `arity`
    ///
    /// Lets a caller that keeps the full variation list group it without
    /// enumerating a second time.
    pub fn from_variations(arity: usize, variations: impl IntoIterator<Item = Variation>) -> Self {
        let mut groups = Self::empty(arity);
        for variation in variations {
            groups.insert(variation);
        }
        groups
    }

    fn empty(arity: usize) -> Self {
        Self {
            arity,
            total: 0,
            groups: BTreeMap::new(),
        }
    }

    fn insert(&mut self, variation: Variation) {
        self.groups.entry(variation.mean()).or_default().push(variation);
        self.total += 1;
    }

    /// Selection length shared by every variation
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Total number of generated variations across all means
    pub const fn total_variations(&self) -> usize {
        self.total
    }

    /// Number of distinct means
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Test whether no variation was generated
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Realized means in ascending order
    pub fn means(&self) -> impl Iterator<Item = Mean> + '_ {
        self.groups.keys().copied()
    }

    /// Candidates for one mean, in generation order
    pub fn get(&self, mean: &Mean) -> Option<&[Variation]> {
        self.groups.get(mean).map(Vec::as_slice)
    }

    /// Iterate `(mean, candidates)` pairs in ascending mean order
    pub fn iter(&self) -> impl Iterator<Item = (&Mean, &[Variation])> {
        self.groups
            .iter()
            .map(|(mean, candidates)| (mean, candidates.as_slice()))
    }
}
