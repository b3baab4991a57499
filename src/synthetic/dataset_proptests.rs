pub(crate) use super::*;
use proptest::prelude::*;

proptest! {
    /// Generated shape always matches the requested dimensions.
    #[test]
    fn prop_shape_matches(rows in 1_usize..32, cols in 1_usize..16, seed in any::<u64>()) {
        let data = DatasetGenerator::new(rows, cols)
            .with_random_state(seed)
            .generate()
            .unwrap();
        prop_assert_eq!(data.shape(), (rows, cols));
    }

    /// Every value lies in [0.1, 9.8] regardless of seed.
    #[test]
    fn prop_values_in_range(rows in 1_usize..32, cols in 1_usize..16, seed in any::<u64>()) {
        let data = DatasetGenerator::new(rows, cols)
            .with_random_state(seed)
            .generate()
            .unwrap();
        prop_assert!(data.as_slice().iter().all(|&v| (0.1..=9.8).contains(&v)));
    }

    /// Same seed should produce the same dataset.
    #[test]
    fn prop_same_seed_same_data(seed in any::<u64>()) {
        let a = DatasetGenerator::new(8, 4).with_random_state(seed).generate().unwrap();
        let b = DatasetGenerator::new(8, 4).with_random_state(seed).generate().unwrap();
        prop_assert_eq!(a, b);
    }
}
