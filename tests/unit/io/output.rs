//! Tests for writing delimited result files

#[cfg(test)]
mod tests {
    use disjoint_variations::algorithm::maximizer::SearchStatus;
    use disjoint_variations::algorithm::solver::MeanSolution;
    use disjoint_variations::generation::variation::Variation;
    use disjoint_variations::io::configuration::{ALL_VARIATIONS_FILE, MAXIMIZED_OUTPUT_PREFIX};
    use disjoint_variations::io::output::{
        mean_file_token, output_path, write_all_variations, write_solution, write_variations,
    };
    use disjoint_variations::math::fraction::Mean;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn variations(rows: &[&[i64]]) -> Vec<Variation> {
        rows.iter()
            .map(|row| Variation::new(row.to_vec()).unwrap())
            .collect()
    }

    // Tests fractional means become filesystem-safe tokens
    // Verified by leaving the slash in place
    #[test]
    fn test_mean_file_token() {
        assert_eq!(mean_file_token(&Mean::from_integer(5)), "5");
        assert_eq!(mean_file_token(&Mean::new(31, 6).unwrap()), "31_6");
    }

    // Tests output paths combine directory, prefix and token
    // Verified by omitting the extension
    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("out"), "avg_", &Mean::new(10, 3).unwrap());
        assert_eq!(path, Path::new("out").join("avg_10_3.txt"));
    }

    // Tests one tab-delimited line per variation
    // Verified by joining values with commas
    #[test]
    fn test_write_variations() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.txt");
        write_variations(&path, &variations(&[&[1, 2, 3], &[3, 1, 2]])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1\t2\t3\n3\t1\t2\n");
    }

    // Tests a solution lands in its mean's file
    // Verified by naming files after the candidate count
    #[test]
    fn test_write_solution() {
        let dir = TempDir::new().unwrap();
        let solution = MeanSolution {
            mean: Mean::from_integer(2),
            variations: variations(&[&[1, 3], &[3, 1]]),
            status: SearchStatus::Complete,
            nodes_explored: 2,
            candidate_count: 3,
            upper_bound: 2,
        };

        let path = write_solution(dir.path(), MAXIMIZED_OUTPUT_PREFIX, &solution).unwrap();
        assert_eq!(
            path,
            dir.path().join(format!("{MAXIMIZED_OUTPUT_PREFIX}2.txt"))
        );
        assert_eq!(fs::read_to_string(path).unwrap(), "1\t3\n3\t1\n");
    }

    // Tests the full dump file
    // Verified by writing only the first variation
    #[test]
    fn test_write_all_variations() {
        let dir = TempDir::new().unwrap();
        let all = variations(&[&[1, 2], &[2, 1]]);
        let path = write_all_variations(dir.path(), &all).unwrap();

        assert_eq!(path, dir.path().join(ALL_VARIATIONS_FILE));
        assert_eq!(fs::read_to_string(path).unwrap().lines().count(), 2);
    }

    // Tests unwritable targets are reported
    // Verified by ignoring create errors
    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("rows.txt");
        assert!(write_variations(&path, &variations(&[&[1]])).is_err());
    }
}
