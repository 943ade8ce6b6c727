//! Progress display for multi-mean searches

use crate::algorithm::observer::SearchObserver;
use crate::algorithm::solver::MeanSolution;
use crate::io::configuration::{MIN_CANDIDATES_FOR_BRANCH_BAR, PROGRESS_BAR_WIDTH};
use crate::math::fraction::Mean;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BRANCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "average {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Averages: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display while target means are searched
///
/// Shows one bar over all target means and, for larger candidate lists, one
/// bar over the depth-one branches of the mean being searched.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    branch_bar: Option<ProgressBar>,
    best_size: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            branch_bar: None,
            best_size: 0,
        }
    }

    /// Create the batch bar for `mean_count` target means
    ///
    /// An existing batch bar is resized and rewound instead.
    pub fn initialize(&mut self, mean_count: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.set_length(mean_count as u64);
            batch_bar.set_position(0);
            return;
        }
        let batch_bar = ProgressBar::new(mean_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));
    }

    /// Length of the batch bar, once initialized
    pub fn batch_length(&self) -> Option<u64> {
        self.batch_bar.as_ref().and_then(ProgressBar::length)
    }

    /// Number of target means finished so far
    pub fn batch_position(&self) -> u64 {
        self.batch_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Size of the best selection reported for the current mean
    pub const fn best_size(&self) -> usize {
        self.best_size
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(branch_bar) = self.branch_bar.take() {
            branch_bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All averages searched");
        }
        let _ = self.multi_progress.clear();
    }
}

impl SearchObserver for ProgressManager {
    fn search_started(&mut self, means: usize) {
        self.initialize(means);
    }

    fn mean_started(&mut self, mean: Mean, candidates: usize) {
        self.best_size = 0;
        if let Some(previous) = self.branch_bar.take() {
            previous.finish_and_clear();
        }

        if candidates >= MIN_CANDIDATES_FOR_BRANCH_BAR {
            let bar = ProgressBar::new(candidates as u64);
            bar.set_style(BRANCH_STYLE.clone());
            bar.set_prefix(mean.to_string());
            self.branch_bar = Some(self.multi_progress.add(bar));
        }
    }

    fn branch_started(&mut self, branch: usize, branches: usize) {
        if let Some(ref bar) = self.branch_bar {
            bar.set_length(branches as u64);
            bar.set_position(branch as u64 + 1);
        }
    }

    fn improved(&mut self, size: usize) {
        self.best_size = size;
        if let Some(ref bar) = self.branch_bar {
            bar.set_message(format!("best {size}"));
        }
    }

    fn mean_finished(&mut self, _mean: Mean, _solution: Option<&MeanSolution>) {
        if let Some(bar) = self.branch_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }
}
