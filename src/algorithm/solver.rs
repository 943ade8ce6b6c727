//! Runs a selection strategy over every target mean of a candidate set

use crate::algorithm::columns::ColumnIndex;
use crate::algorithm::greedy::first_fit;
use crate::algorithm::maximizer::{ColumnDisjointMaximizer, SearchBudget, SearchStatus};
use crate::algorithm::observer::SearchObserver;
use crate::generation::groups::CandidateGroups;
use crate::generation::variation::Variation;
use crate::math::fraction::Mean;
use clap::ValueEnum;
use std::collections::BTreeMap;

/// How the column-disjoint subset is selected for each mean
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Branch-and-bound search for a largest subset
    #[default]
    Backtracking,
    /// Single greedy pass in generation order
    FirstFit,
}

/// Solver parameters shared by every target mean
#[derive(Clone, Debug, Default)]
pub struct SolverConfig {
    /// Selection strategy
    pub strategy: Strategy,
    /// Budget applied to each mean's search separately
    pub budget: SearchBudget,
    /// Restrict the run to these means; `None` searches every realized mean
    pub targets: Option<Vec<Mean>>,
}

/// Best selection found for one target mean
#[derive(Clone, Debug)]
pub struct MeanSolution {
    /// Target mean
    pub mean: Mean,
    /// Pairwise column-disjoint variations with this mean
    pub variations: Vec<Variation>,
    /// Whether the search ran to completion
    pub status: SearchStatus,
    /// Number of search nodes expanded
    pub nodes_explored: u64,
    /// Number of candidates realizing this mean
    pub candidate_count: usize,
    /// Column-cardinality bound on any selection for this mean
    pub upper_bound: usize,
}

impl MeanSolution {
    /// Number of selected variations
    pub const fn len(&self) -> usize {
        self.variations.len()
    }

    /// Test whether nothing was selected
    pub const fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Test whether the search ran to completion
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Complete
    }
}

/// Selections for every searched mean that yielded at least one variation
#[derive(Clone, Debug, Default)]
pub struct SolveReport {
    solutions: BTreeMap<Mean, MeanSolution>,
    missing_targets: Vec<Mean>,
}

impl SolveReport {
    /// Solution for one mean, if any variation was selected
    pub fn get(&self, mean: &Mean) -> Option<&MeanSolution> {
        self.solutions.get(mean)
    }

    /// Solutions in ascending mean order
    pub fn iter(&self) -> impl Iterator<Item = &MeanSolution> {
        self.solutions.values()
    }

    /// Number of means with a non-empty selection
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Test whether no mean produced a selection
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Test whether every search ran to completion
    pub fn is_complete(&self) -> bool {
        self.solutions.values().all(MeanSolution::is_complete)
    }

    /// Requested targets that no variation realizes
    pub fn missing_targets(&self) -> &[Mean] {
        &self.missing_targets
    }

    /// Plain mean to selection mapping
    pub fn into_selections(self) -> BTreeMap<Mean, Vec<Variation>> {
        self.solutions
            .into_iter()
            .map(|(mean, solution)| (mean, solution.variations))
            .collect()
    }
}

/// Select a column-disjoint subset for one mean
///
/// Returns `None` when nothing can be selected, which only happens for an
/// empty candidate list.
pub fn solve_mean<O: SearchObserver + ?Sized>(
    mean: Mean,
    candidates: &[Variation],
    arity: usize,
    config: &SolverConfig,
    observer: &mut O,
) -> Option<MeanSolution> {
    observer.mean_started(mean, candidates.len());

    let solution = match config.strategy {
        Strategy::Backtracking => {
            let outcome = ColumnDisjointMaximizer::new(candidates, arity)
                .with_budget(config.budget)
                .run(observer);
            MeanSolution {
                mean,
                variations: outcome.chosen,
                status: outcome.status,
                nodes_explored: outcome.nodes_explored,
                candidate_count: candidates.len(),
                upper_bound: outcome.upper_bound,
            }
        }
        Strategy::FirstFit => {
            let all: Vec<usize> = (0..candidates.len()).collect();
            let upper_bound = ColumnIndex::new(candidates, arity).distinct_bound(&all);
            let variations = first_fit(candidates, arity);
            observer.improved(variations.len());
            MeanSolution {
                mean,
                variations,
                status: SearchStatus::Complete,
                nodes_explored: candidates.len() as u64,
                candidate_count: candidates.len(),
                upper_bound,
            }
        }
    };

    let solution = (!solution.is_empty()).then_some(solution);
    observer.mean_finished(mean, solution.as_ref());
    solution
}

/// Select a column-disjoint subset for every target mean
pub fn solve<O: SearchObserver + ?Sized>(
    groups: &CandidateGroups,
    config: &SolverConfig,
    observer: &mut O,
) -> SolveReport {
    let mut report = SolveReport::default();

    let targets: Vec<Mean> = match &config.targets {
        Some(requested) => {
            let mut targets = requested.clone();
            targets.sort_unstable();
            targets.dedup();
            targets
        }
        None => groups.means().collect(),
    };

    let mut searched = Vec::with_capacity(targets.len());
    for mean in targets {
        match groups.get(&mean) {
            Some(candidates) => searched.push((mean, candidates)),
            None => report.missing_targets.push(mean),
        }
    }

    observer.search_started(searched.len());
    for (mean, candidates) in searched {
        if let Some(solution) = solve_mean(mean, candidates, groups.arity(), config, observer) {
            report.solutions.insert(mean, solution);
        }
    }

    report
}
