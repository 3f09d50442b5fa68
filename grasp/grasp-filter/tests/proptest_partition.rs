//! Property-based tests for the range partitioner.
//!
//! The feasibility filter's correctness rests on `split_ranges` covering
//! every input index exactly once with near-equal contiguous ranges.

use grasp_filter::split_ranges;
use proptest::prelude::*;

proptest! {
    /// Every index in 0..len lands in exactly one range.
    #[test]
    fn ranges_cover_input_exactly_once(len in 0usize..500, workers in 1usize..16) {
        let ranges = split_ranges(len, workers);
        prop_assert_eq!(ranges.len(), workers);

        let mut covered = vec![0usize; len];
        for range in &ranges {
            for index in range.clone() {
                covered[index] += 1;
            }
        }
        prop_assert!(covered.iter().all(|&count| count == 1));
    }

    /// Ranges are contiguous and ordered: each starts where the
    /// previous ended.
    #[test]
    fn ranges_are_contiguous(len in 0usize..500, workers in 1usize..16) {
        let ranges = split_ranges(len, workers);
        let mut expected_start = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, expected_start);
            prop_assert!(range.end >= range.start);
            expected_start = range.end;
        }
        prop_assert_eq!(expected_start, len);
    }

    /// Range sizes differ by at most one, larger ranges first.
    #[test]
    fn ranges_are_balanced(len in 0usize..500, workers in 1usize..16) {
        let ranges = split_ranges(len, workers);
        let sizes: Vec<usize> = ranges.iter().map(|range| range.len()).collect();

        let max = sizes.iter().copied().max().unwrap_or(0);
        let min = sizes.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);

        // Remainder goes to the first ranges, so sizes never increase.
        prop_assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}
