//! Progress hooks invoked at search milestones

use crate::algorithm::solver::MeanSolution;
use crate::math::fraction::Mean;

/// Receives search milestones; implementations must not affect results
///
/// Every method has an empty default so observers only override what they
/// display.
pub trait SearchObserver {
    /// A run over `means` target means, each realized by at least one
    /// variation, is about to start
    fn search_started(&mut self, _means: usize) {}

    /// A target mean is about to be searched
    fn mean_started(&mut self, _mean: Mean, _candidates: usize) {}

    /// A depth-one branch (the first chosen candidate) is being explored
    fn branch_started(&mut self, _branch: usize, _branches: usize) {}

    /// A strictly larger selection was found
    fn improved(&mut self, _size: usize) {}

    /// A target mean finished; `None` when nothing was selected
    fn mean_finished(&mut self, _mean: Mean, _solution: Option<&MeanSolution>) {}
}

/// Observer that ignores every milestone
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn search_started(&mut self, means: usize) {
        (**self).search_started(means);
    }

    fn mean_started(&mut self, mean: Mean, candidates: usize) {
        (**self).mean_started(mean, candidates);
    }

    fn branch_started(&mut self, branch: usize, branches: usize) {
        (**self).branch_started(branch, branches);
    }

    fn improved(&mut self, size: usize) {
        (**self).improved(size);
    }

    fn mean_finished(&mut self, mean: Mean, solution: Option<&MeanSolution>) {
        (**self).mean_finished(mean, solution);
    }
}
