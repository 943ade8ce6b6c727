//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use disjoint_variations::SearchError;
    use disjoint_variations::io::error::{
        WithPath, computation_error, invalid_arity, invalid_parameter,
    };
    use std::error::Error;
    use std::path::Path;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SearchError::FileSystem {
            path: "/tmp/numbers.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_arity(0, 3).source().is_none());
    }

    // Tests InvalidArity names both k and n
    // Verified by omitting n from message
    #[test]
    fn test_invalid_arity_error() {
        let message = invalid_arity(7, 4).to_string();
        assert!(message.contains("Invalid k value: 7"));
        assert!(message.contains("<= 4"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("mean", &"1/0", &"denominator is zero").to_string();
        assert!(message.contains("mean"));
        assert!(message.contains("1/0"));
        assert!(message.contains("denominator is zero"));
    }

    // Tests InvalidInput formatting with and without a line number
    // Verified by always printing the line
    #[test]
    fn test_invalid_input_error() {
        let with_line = SearchError::InvalidInput {
            origin: "numbers.txt".to_string(),
            line: Some(3),
            reason: "'x' is not an integer".to_string(),
        };
        assert_eq!(
            with_line.to_string(),
            "Invalid input in numbers.txt at line 3: 'x' is not an integer"
        );

        let without_line = SearchError::InvalidInput {
            origin: "<arguments>".to_string(),
            line: None,
            reason: "empty".to_string(),
        };
        assert_eq!(without_line.to_string(), "Invalid input in <arguments>: empty");
    }

    // Tests Computation error formatting
    // Verified by omitting reason from message
    #[test]
    fn test_computation_error() {
        let message = computation_error("variation sum", &"sum overflows i64").to_string();
        assert!(message.contains("variation sum"));
        assert!(message.contains("sum overflows i64"));
    }

    // Tests I/O conversion and path context
    // Verified by dropping the path in with_path
    #[test]
    fn test_io_conversion() {
        let converted: SearchError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(converted.to_string().contains("<unknown>"));

        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let message = result
            .with_path(Path::new("/restricted/out.txt"), "create output")
            .unwrap_err()
            .to_string();
        assert!(message.contains("/restricted/out.txt"));
        assert!(message.contains("create output"));
        assert!(message.contains("denied"));
    }
}
