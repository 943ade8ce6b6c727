//! Search constants and runtime configuration defaults

/// Input numbers used when none are supplied
pub const DEFAULT_NUMBERS: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Selection length used when none is supplied
pub const DEFAULT_K: usize = 6;

// Safety limit to prevent excessive memory allocation
/// Maximum number of variations generated in one run
pub const MAX_VARIATIONS: usize = 20_000_000;

// The search is exponential, so unattended runs stop after this long per average
/// Default wall-clock limit per target mean in milliseconds (0 disables)
pub const DEFAULT_TIME_LIMIT_MS: u64 = 10_000;

// Elapsed time is only sampled this often to keep the search loop cheap
/// Number of search nodes between time budget checks
pub const BUDGET_CHECK_INTERVAL: u64 = 1024;

// Output settings
/// File prefix for backtracking results
pub const MAXIMIZED_OUTPUT_PREFIX: &str = "max_unique_variations_avg_";
/// File prefix for first-fit results
pub const FIRST_FIT_OUTPUT_PREFIX: &str = "unique_variations_avg_";
/// File receiving every generated variation when dumping is requested
pub const ALL_VARIATIONS_FILE: &str = "variations.txt";
/// Extension of every output file
pub const OUTPUT_EXTENSION: &str = "txt";
/// Separator between values of one variation
pub const FIELD_DELIMITER: char = '\t';

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Minimum candidate count before a per-mean progress bar is shown
pub const MIN_CANDIDATES_FOR_BRANCH_BAR: usize = 64;
