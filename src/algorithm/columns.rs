//! Per-column value indexing for the column-cardinality bound and first-fit

use crate::algorithm::bitset::ValueBitset;
use crate::generation::variation::Variation;
use std::collections::HashMap;

/// Dense value ids for each column of a candidate list
///
/// Any column-disjoint selection uses each value of a column at most once, so
/// the number of distinct values in the emptiest column bounds how many more
/// candidates can be chosen from a subset. Every column is indexed, but only
/// the first `arity` columns present in every candidate feed the bound, which
/// keeps it sound for ragged input.
#[derive(Clone, Debug)]
pub struct ColumnIndex {
    value_ids: Vec<Vec<usize>>,
    cardinalities: Vec<usize>,
    bound_columns: usize,
    scratch: Vec<ValueBitset>,
}

impl ColumnIndex {
    /// Index every column of `candidates`
    pub fn new(candidates: &[Variation], arity: usize) -> Self {
        let shortest = candidates.iter().map(Variation::len).min().unwrap_or(0);
        let longest = candidates.iter().map(Variation::len).max().unwrap_or(0);
        let bound_columns = shortest.min(arity);

        let mut lookups: Vec<HashMap<i64, usize>> = vec![HashMap::new(); longest];
        let value_ids = candidates
            .iter()
            .map(|candidate| {
                lookups
                    .iter_mut()
                    .zip(candidate.values())
                    .map(|(lookup, &value)| {
                        let next_id = lookup.len();
                        *lookup.entry(value).or_insert(next_id)
                    })
                    .collect()
            })
            .collect();

        let cardinalities: Vec<usize> = lookups.iter().map(HashMap::len).collect();
        let scratch = cardinalities
            .iter()
            .take(bound_columns)
            .map(|&cardinality| ValueBitset::new(cardinality))
            .collect();

        Self {
            value_ids,
            cardinalities,
            bound_columns,
            scratch,
        }
    }

    /// Value ids of one candidate, by column
    pub fn ids(&self, candidate: usize) -> Option<&[usize]> {
        self.value_ids.get(candidate).map(Vec::as_slice)
    }

    /// One empty set per indexed column, sized for that column's ids
    pub fn column_sets(&self) -> Vec<ValueBitset> {
        self.cardinalities
            .iter()
            .map(|&cardinality| ValueBitset::new(cardinality))
            .collect()
    }

    /// Upper bound on the size of any column-disjoint selection from `members`
    ///
    /// `members` are indices into the indexed candidate list.
    pub fn distinct_bound(&mut self, members: &[usize]) -> usize {
        if self.bound_columns == 0 {
            return members.len();
        }

        for seen in &mut self.scratch {
            seen.clear();
        }
        for &member in members {
            if let Some(ids) = self.value_ids.get(member) {
                for (seen, &id) in self.scratch.iter_mut().zip(ids) {
                    seen.insert(id);
                }
            }
        }

        self.scratch
            .iter()
            .map(ValueBitset::count)
            .min()
            .unwrap_or(members.len())
            .min(members.len())
    }
}
