//! Tests for variations: exact sums and means, conflicts, formatting

#[cfg(test)]
mod tests {
    use disjoint_variations::SearchError;
    use disjoint_variations::generation::variation::Variation;
    use disjoint_variations::math::fraction::Mean;

    // Tests sum and mean are exact
    // Verified by computing the mean with float division
    #[test]
    fn test_sum_and_mean() {
        let variation = Variation::new(vec![5, 6, 8, 3, 4, 5]).unwrap();
        assert_eq!(variation.sum(), 31);
        assert_eq!(variation.mean(), Mean::new(31, 6).unwrap());
        assert_eq!(variation.len(), 6);
        assert!(!variation.is_empty());
        assert_eq!(variation.values(), &[5, 6, 8, 3, 4, 5]);
    }

    // Tests conflicts are detected at equal positions only
    // Verified by comparing values regardless of position
    #[test]
    fn test_conflicts_with() {
        let a = Variation::new(vec![1, 2, 3]).unwrap();
        let b = Variation::new(vec![3, 1, 2]).unwrap();
        let c = Variation::new(vec![4, 2, 9]).unwrap();

        assert!(!a.conflicts_with(&b));
        assert!(a.is_column_disjoint_with(&b));
        assert!(a.conflicts_with(&c));
        assert!(c.conflicts_with(&a));
        assert!(a.conflicts_with(&a));
    }

    // Tests empty input is rejected as an invalid parameter
    // Verified by allowing empty variations
    #[test]
    fn test_empty_rejected() {
        let err = Variation::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidParameter {
                parameter: "values",
                ..
            }
        ));
    }

    // Tests a sum of exactly i64::MIN still yields an exact mean
    // Verified by negating the numerator in i64 during reduction
    #[test]
    fn test_minimum_sum_mean() {
        let variation = Variation::new(vec![i64::MIN, 0]).unwrap();
        assert_eq!(variation.sum(), i64::MIN);
        assert_eq!(variation.mean(), Mean::from_integer(i64::MIN / 2));

        let single = Variation::new(vec![i64::MIN]).unwrap();
        assert_eq!(single.mean(), Mean::from_integer(i64::MIN));
    }

    // Tests overflowing sums are reported instead of wrapping
    // Verified by using wrapping addition
    #[test]
    fn test_sum_overflow() {
        let err = Variation::new(vec![i64::MAX, 1]).unwrap_err();
        assert!(matches!(err, SearchError::Computation { .. }));
    }

    // Tests tab-delimited display
    // Verified by joining with spaces
    #[test]
    fn test_display() {
        let variation = Variation::new(vec![2, -5, 8]).unwrap();
        assert_eq!(variation.to_string(), "2\t-5\t8");
    }
}
