//! Column-disjoint maximization by depth-first branch and bound
//!
//! The search walks an explicit stack of frames. Each frame holds the
//! candidates still compatible with every chosen variation, in the original
//! scan order, and a cursor to the next candidate to branch on. Choosing a
//! candidate pushes a frame containing only the candidates after it that are
//! column-disjoint with it, so every subset is visited in exactly one order.

use crate::algorithm::columns::ColumnIndex;
use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::generation::variation::Variation;
use crate::io::configuration::BUDGET_CHECK_INTERVAL;
use std::time::{Duration, Instant};

/// Limits on how much of the search tree may be explored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum number of search nodes (chosen candidates) to expand
    pub max_nodes: Option<u64>,
    /// Maximum wall-clock time per search
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    /// Budget that never runs out
    pub const fn unlimited() -> Self {
        Self {
            max_nodes: None,
            time_limit: None,
        }
    }

    /// Limit the number of expanded nodes
    #[must_use]
    pub const fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Limit the elapsed time
    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    fn is_exhausted(&self, nodes: u64, started: Instant) -> bool {
        if self.max_nodes.is_some_and(|max_nodes| nodes >= max_nodes) {
            return true;
        }
        self.time_limit.is_some_and(|limit| {
            nodes % BUDGET_CHECK_INTERVAL == 0 && started.elapsed() >= limit
        })
    }
}

/// How a search ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The tree was exhausted or the selection reached the upper bound
    Complete,
    /// The budget ran out; the selection is the best found so far
    BudgetExhausted,
}

/// Result of one column-disjoint search
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Selected variations, in the order they were chosen
    pub chosen: Vec<Variation>,
    /// Indices of the selected variations in the candidate list
    pub positions: Vec<usize>,
    /// Whether the search ran to completion
    pub status: SearchStatus,
    /// Number of nodes expanded
    pub nodes_explored: u64,
    /// Column-cardinality bound on any selection from the candidates
    pub upper_bound: usize,
}

impl SearchOutcome {
    /// Test whether the search finished without exhausting its budget
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Complete
    }

    /// Test whether the selection provably has maximum size
    pub fn is_proven_optimal(&self) -> bool {
        self.is_complete() || self.chosen.len() == self.upper_bound
    }
}

struct Frame {
    remaining: Vec<usize>,
    cursor: usize,
}

impl Frame {
    const fn new(remaining: Vec<usize>) -> Self {
        Self {
            remaining,
            cursor: 0,
        }
    }
}

/// Branch-and-bound search for a largest column-disjoint subset
///
/// Ties between equally large selections go to the one reached first in
/// depth-first, left-to-right order, so identical input yields identical
/// output.
pub struct ColumnDisjointMaximizer<'a> {
    candidates: &'a [Variation],
    columns: ColumnIndex,
    budget: SearchBudget,
}

impl<'a> ColumnDisjointMaximizer<'a> {
    /// Prepare a search over `candidates`, all of length `arity`
    pub fn new(candidates: &'a [Variation], arity: usize) -> Self {
        Self {
            candidates,
            columns: ColumnIndex::new(candidates, arity),
            budget: SearchBudget::unlimited(),
        }
    }

    /// Replace the search budget
    #[must_use]
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Run the search, reporting milestones to `observer`
    pub fn run<O: SearchObserver + ?Sized>(&mut self, observer: &mut O) -> SearchOutcome {
        let started = Instant::now();
        let root: Vec<usize> = (0..self.candidates.len()).collect();
        let upper_bound = self.columns.distinct_bound(&root);
        let branches = root.len();

        let mut chosen: Vec<usize> = Vec::new();
        let mut best: Vec<usize> = Vec::new();
        let mut nodes = 0_u64;
        let mut status = SearchStatus::Complete;
        let mut stack = vec![Frame::new(root)];

        while best.len() < upper_bound {
            let depth = stack.len();
            let Some(frame) = stack.last_mut() else {
                break;
            };

            let Some(&candidate) = frame.remaining.get(frame.cursor) else {
                stack.pop();
                chosen.pop();
                continue;
            };

            // Abandon the frame once its unexplored suffix cannot beat the best
            let suffix = frame.remaining.get(frame.cursor..).unwrap_or_default();
            if chosen.len() + suffix.len() <= best.len()
                || chosen.len() + self.columns.distinct_bound(suffix) <= best.len()
            {
                frame.cursor = frame.remaining.len();
                continue;
            }

            let branch = frame.cursor;
            frame.cursor += 1;

            if chosen.iter().any(|&other| self.conflicts(candidate, other)) {
                continue;
            }
            if depth == 1 {
                observer.branch_started(branch, branches);
            }

            let next: Vec<usize> = frame
                .remaining
                .get(frame.cursor..)
                .unwrap_or_default()
                .iter()
                .copied()
                .filter(|&other| !self.conflicts(candidate, other))
                .collect();

            nodes += 1;
            chosen.push(candidate);
            if chosen.len() > best.len() {
                best.clone_from(&chosen);
                observer.improved(best.len());
            }

            if best.len() < upper_bound && self.budget.is_exhausted(nodes, started) {
                status = SearchStatus::BudgetExhausted;
                break;
            }

            if next.is_empty() {
                chosen.pop();
            } else {
                stack.push(Frame::new(next));
            }
        }

        SearchOutcome {
            chosen: best
                .iter()
                .filter_map(|&position| self.candidates.get(position).cloned())
                .collect(),
            positions: best,
            status,
            nodes_explored: nodes,
            upper_bound,
        }
    }

    fn conflicts(&self, a: usize, b: usize) -> bool {
        match (self.candidates.get(a), self.candidates.get(b)) {
            (Some(first), Some(second)) => first.conflicts_with(second),
            _ => true,
        }
    }
}

/// Find a largest column-disjoint subset of `candidates` within `budget`
///
/// Returns an empty selection for an empty candidate list.
pub fn maximize_column_disjoint(
    candidates: &[Variation],
    arity: usize,
    budget: SearchBudget,
) -> SearchOutcome {
    ColumnDisjointMaximizer::new(candidates, arity)
        .with_budget(budget)
        .run(&mut NoopObserver)
}
