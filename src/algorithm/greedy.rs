use crate::algorithm::columns::ColumnIndex;
use crate::generation::variation::Variation;

/// Single-pass first-fit selection
///
/// Takes each candidate in order unless one of its values is already used at
/// the same position by an earlier pick. The result equals the first leaf of
/// the backtracking search, so it is column-disjoint but not necessarily
/// maximum.
pub fn first_fit(candidates: &[Variation], arity: usize) -> Vec<Variation> {
    let index = ColumnIndex::new(candidates, arity);
    let mut used = index.column_sets();
    let mut chosen: Vec<Variation> = Vec::new();

    for (position, candidate) in candidates.iter().enumerate() {
        let Some(ids) = index.ids(position) else {
            continue;
        };
        let is_free = ids
            .iter()
            .zip(&used)
            .all(|(&id, column)| !column.contains(id));

        if is_free {
            for (&id, column) in ids.iter().zip(used.iter_mut()) {
                column.insert(id);
            }
            chosen.push(candidate.clone());
        }
    }

    chosen
}
