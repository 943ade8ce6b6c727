//! CLI entry point for the column-disjoint variation search

use clap::Parser;
use disjoint_variations::io::cli::{Cli, Runner};

fn main() -> disjoint_variations::Result<()> {
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.process().map(|_report| ())
}
