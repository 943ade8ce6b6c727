//! Delimited text output: one file per target mean

use crate::algorithm::solver::MeanSolution;
use crate::generation::variation::Variation;
use crate::io::configuration::{ALL_VARIATIONS_FILE, OUTPUT_EXTENSION};
use crate::io::error::{Result, WithPath};
use crate::math::fraction::Mean;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Filesystem-safe rendering of a mean (`31/6` becomes `31_6`)
pub fn mean_file_token(mean: &Mean) -> String {
    mean.to_string().replace('/', "_")
}

/// Output file for one mean inside `directory`
pub fn output_path(directory: &Path, prefix: &str, mean: &Mean) -> PathBuf {
    directory.join(format!(
        "{prefix}{}.{OUTPUT_EXTENSION}",
        mean_file_token(mean)
    ))
}

/// Write variations one per line, values separated by tabs
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be created or written
pub fn write_variations<'v>(
    path: &Path,
    variations: impl IntoIterator<Item = &'v Variation>,
) -> Result<()> {
    let file = File::create(path).with_path(path, "create output")?;
    let mut writer = BufWriter::new(file);
    for variation in variations {
        writeln!(writer, "{variation}").with_path(path, "write output")?;
    }
    writer.flush().with_path(path, "flush output")
}

/// Write one mean's selection and return the file it went to
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be created or written
pub fn write_solution(directory: &Path, prefix: &str, solution: &MeanSolution) -> Result<PathBuf> {
    let path = output_path(directory, prefix, &solution.mean);
    write_variations(&path, &solution.variations)?;
    Ok(path)
}

/// Write every generated variation to a single file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be created or written
pub fn write_all_variations(directory: &Path, variations: &[Variation]) -> Result<PathBuf> {
    let path = directory.join(ALL_VARIATIONS_FILE);
    write_variations(&path, variations)?;
    Ok(path)
}
