//! Parsing of input number lists from arguments and files

use crate::io::error::{Result, SearchError, WithPath};
use std::path::Path;

/// Parse numbers separated by commas and/or whitespace
///
/// # Errors
///
/// Returns `InvalidInput` naming `origin` if a token is not an integer
pub fn parse_numbers(text: &str, origin: &str) -> Result<Vec<i64>> {
    parse_line(text, origin, None)
}

/// Read numbers from a file, one or more per line
///
/// Text after `#` on a line is ignored.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `InvalidInput` with the
/// line number if a token is not an integer
pub fn read_numbers(path: &Path) -> Result<Vec<i64>> {
    let content = std::fs::read_to_string(path).with_path(path, "read numbers")?;
    let origin = path.display().to_string();

    let mut numbers = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let data = line.split_once('#').map_or(line, |(before, _comment)| before);
        numbers.extend(parse_line(data, &origin, Some(index + 1))?);
    }
    Ok(numbers)
}

fn parse_line(text: &str, origin: &str, line: Option<usize>) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|parse_error| SearchError::InvalidInput {
                    origin: origin.to_string(),
                    line,
                    reason: format!("'{token}' is not an integer ({parse_error})"),
                })
        })
        .collect()
}
