//! Tests for parsing input numbers from text and files

#[cfg(test)]
mod tests {
    use disjoint_variations::SearchError;
    use disjoint_variations::io::input::{parse_numbers, read_numbers};
    use std::fs;
    use tempfile::TempDir;

    // Tests commas and whitespace both separate numbers
    // Verified by splitting on commas only
    #[test]
    fn test_parse_mixed_separators() {
        let numbers = parse_numbers("1, 2,3\t4\n-5", "<arguments>").unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 4, -5]);
        assert!(parse_numbers("  ", "<arguments>").unwrap().is_empty());
    }

    // Tests non-integers are reported with their origin
    // Verified by skipping unparsable tokens
    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_numbers("1,two,3", "<arguments>").unwrap_err();
        match err {
            SearchError::InvalidInput { origin, line, reason } => {
                assert_eq!(origin, "<arguments>");
                assert_eq!(line, None);
                assert!(reason.contains("two"));
            }
            other => unreachable!("Expected InvalidInput, got {other}"),
        }
    }

    // Tests files are read line by line with comments stripped
    // Verified by keeping comment text
    #[test]
    fn test_read_numbers_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("numbers.txt");
        fs::write(&path, "# input set\n2 3 4\n5,6 # middle\n\n7\n8\n").unwrap();

        let numbers = read_numbers(&path).unwrap();
        assert_eq!(numbers, vec![2, 3, 4, 5, 6, 7, 8]);
    }

    // Tests file errors carry the line number
    // Verified by numbering lines from zero
    #[test]
    fn test_read_numbers_bad_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("numbers.txt");
        fs::write(&path, "1 2\n3 4.5\n").unwrap();

        let err = read_numbers(&path).unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput { line: Some(2), .. }));
    }

    // Tests missing files are file system errors
    // Verified by returning an empty list for missing files
    #[test]
    fn test_read_numbers_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_numbers(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(
            err,
            SearchError::FileSystem {
                operation: "read numbers",
                ..
            }
        ));
    }
}
