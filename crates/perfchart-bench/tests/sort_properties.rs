//! Property tests: every benchmarked sort agrees with the standard library.

use perfchart_bench::sort_fn;
use perfchart_common::Algorithm;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_sorts_match_std(input in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut expected = input.clone();
        expected.sort_unstable();

        for algorithm in Algorithm::ALL {
            let mut data = input.clone();
            sort_fn(algorithm)(&mut data);
            prop_assert_eq!(&data, &expected, "{}", algorithm);
        }
    }

    #[test]
    fn prop_sorts_handle_heavy_duplicates(input in prop::collection::vec(0i32..4, 0..300)) {
        let mut expected = input.clone();
        expected.sort_unstable();

        for algorithm in Algorithm::ALL {
            let mut data = input.clone();
            sort_fn(algorithm)(&mut data);
            prop_assert_eq!(&data, &expected);
        }
    }
}
