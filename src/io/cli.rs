//! Command-line interface: generate, search each target mean, write results

use crate::algorithm::maximizer::SearchBudget;
use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::algorithm::solver::{SolveReport, SolverConfig, Strategy, solve};
use crate::generation::groups::{CandidateGroups, generate_variations, validate_arity};
use crate::io::configuration::{
    DEFAULT_K, DEFAULT_NUMBERS, DEFAULT_TIME_LIMIT_MS, FIRST_FIT_OUTPUT_PREFIX,
    MAXIMIZED_OUTPUT_PREFIX,
};
use crate::io::error::{Result, WithPath};
use crate::io::input::read_numbers;
use crate::io::output::{write_all_variations, write_solution};
use crate::io::progress::ProgressManager;
use crate::math::fraction::Mean;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "disjoint-variations")]
#[command(
    author,
    version,
    about = "Find large column-disjoint sets of equal-average variations"
)]
/// Command-line arguments for the variation search tool
// CLI tools commonly need multiple boolean flags for output control
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input numbers (defaults to 1..=9 when neither numbers nor --input is given)
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true, value_delimiter = ',')]
    pub numbers: Vec<i64>,

    /// Read input numbers from a file instead of the command line
    #[arg(short, long, value_name = "FILE", conflicts_with = "numbers")]
    pub input: Option<PathBuf>,

    /// Length of each variation
    #[arg(short, default_value_t = DEFAULT_K)]
    pub k: usize,

    /// Only search these averages (integer, fraction like 31/6, or decimal)
    #[arg(short, long = "target", value_name = "AVERAGE")]
    pub targets: Vec<Mean>,

    /// Selection strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Backtracking)]
    pub strategy: Strategy,

    /// Stop each search after this many nodes and keep the best found
    #[arg(long)]
    pub max_nodes: Option<u64>,

    /// Stop each search after this many milliseconds and keep the best found (0 for no limit)
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_MS)]
    pub time_limit_ms: u64,

    /// Directory receiving the result files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write every generated variation to variations.txt
    #[arg(long)]
    pub dump_all: bool,

    /// Search without writing result files
    #[arg(long)]
    pub no_write: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if result files should be written
    pub const fn should_write(&self) -> bool {
        !self.no_write
    }

    /// Search budget assembled from the limit flags
    pub fn budget(&self) -> SearchBudget {
        let mut budget = SearchBudget::unlimited();
        if let Some(max_nodes) = self.max_nodes {
            budget = budget.with_max_nodes(max_nodes);
        }
        if self.time_limit_ms > 0 {
            budget = budget.with_time_limit(Duration::from_millis(self.time_limit_ms));
        }
        budget
    }

    /// Solver configuration assembled from the arguments
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            strategy: self.strategy,
            budget: self.budget(),
            targets: (!self.targets.is_empty()).then(|| self.targets.clone()),
        }
    }

    /// Output file prefix for the selected strategy
    pub const fn output_prefix(&self) -> &'static str {
        match self.strategy {
            Strategy::Backtracking => MAXIMIZED_OUTPUT_PREFIX,
            Strategy::FirstFit => FIRST_FIT_OUTPUT_PREFIX,
        }
    }

    /// Input numbers from the file, the arguments, or the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be read or parsed
    pub fn resolve_numbers(&self) -> Result<Vec<i64>> {
        if let Some(ref path) = self.input {
            return read_numbers(path);
        }
        if self.numbers.is_empty() {
            return Ok(DEFAULT_NUMBERS.to_vec());
        }
        Ok(self.numbers.clone())
    }
}

/// Orchestrates generation, search and output for one invocation
pub struct Runner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate candidates, search every target mean and write the results
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid, `k` is out of range, or an
    /// output file cannot be written
    // Allow print for user-facing summaries and warnings
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn process(&mut self) -> Result<SolveReport> {
        let numbers = self.cli.resolve_numbers()?;
        validate_arity(numbers.len(), self.cli.k)?;

        if self.cli.should_write() {
            std::fs::create_dir_all(&self.cli.output_dir)
                .with_path(&self.cli.output_dir, "create output directory")?;
        }

        let groups = if self.cli.dump_all && self.cli.should_write() {
            let variations = generate_variations(&numbers, self.cli.k)?;
            let path = write_all_variations(&self.cli.output_dir, &variations)?;
            println!(
                "{} variations written to {}",
                variations.len(),
                path.display()
            );
            CandidateGroups::from_variations(self.cli.k, variations)
        } else {
            CandidateGroups::generate(&numbers, self.cli.k)?
        };

        let config = self.cli.solver_config();
        let report = self.progress_manager.as_mut().map_or_else(
            || solve(&groups, &config, &mut NoopObserver),
            |pm| {
                let report = solve(&groups, &config, pm);
                pm.finish();
                report
            },
        );

        for mean in report.missing_targets() {
            eprintln!("No variations of length {} average {mean}", self.cli.k);
        }

        for solution in report.iter() {
            let label = match self.cli.strategy {
                Strategy::Backtracking => "max unique variations",
                Strategy::FirstFit => "unique variations",
            };

            if self.cli.should_write() {
                let path = write_solution(&self.cli.output_dir, self.cli.output_prefix(), solution)?;
                println!(
                    "Found {} {label} (average = {}) written to {}",
                    solution.len(),
                    solution.mean,
                    path.display()
                );
            } else {
                println!(
                    "Found {} {label} (average = {})",
                    solution.len(),
                    solution.mean
                );
            }

            if !solution.is_complete() {
                eprintln!(
                    "Search budget exhausted for average {} after {} nodes (best {} of at most {})",
                    solution.mean,
                    solution.nodes_explored,
                    solution.len(),
                    solution.upper_bound
                );
            }
        }

        Ok(report)
    }

    /// Run with a custom observer instead of the progress display
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid or `k` is out of range
    pub fn search_with<O: SearchObserver + ?Sized>(&self, observer: &mut O) -> Result<SolveReport> {
        let numbers = self.cli.resolve_numbers()?;
        let groups = CandidateGroups::generate(&numbers, self.cli.k)?;
        Ok(solve(&groups, &self.cli.solver_config(), observer))
    }
}
