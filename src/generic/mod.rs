//! Generic structures with no dependence on other elements of the library.

pub mod pcg;
pub mod swap_set;

/// `count` distinct values drawn uniformly from `1..=upper`, by a partial Fisher-Yates shuffle.
///
/// Used to seed a try at a fixed hamming distance from a known assignment and to pick the variables of a
/// generated clause.
pub fn sample_distinct(upper: u32, count: usize, rng: &mut impl rand::Rng) -> Vec<u32> {
    debug_assert!(count <= upper as usize);

    let mut pool: Vec<u32> = (1..=upper).collect();
    for index in 0..count {
        let swap = rng.random_range(index..pool.len());
        pool.swap(index, swap);
    }
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod sample_tests {
    use super::*;
    use crate::generic::pcg::Pcg32;

    #[test]
    fn distinct_and_in_range() {
        let mut rng = Pcg32::new(11);
        for _ in 0..32 {
            let sample = sample_distinct(40, 7, &mut rng);
            assert_eq!(sample.len(), 7);
            for &value in &sample {
                assert!((1..=40).contains(&value));
            }
            let mut sorted = sample.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 7);
        }
    }

    #[test]
    fn exhaustive_sample_is_a_permutation() {
        let mut rng = Pcg32::new(3);
        let mut sample = sample_distinct(12, 12, &mut rng);
        sample.sort_unstable();
        assert_eq!(sample, (1..=12).collect::<Vec<_>>());
    }
}
