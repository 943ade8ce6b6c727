/// Command-line interface and run orchestration
pub mod cli;
/// Search constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Input number parsing
pub mod input;
/// Delimited result files
pub mod output;
/// Progress bars driven by search milestones
pub mod progress;
