/*!
A simple pseudorandom number generator.

A PCG32 (XSH-RR output function, see <https://www.pcg-random.org/>) implemented against [rand_core], with
the output stream selected by the seed so that distinct seeds yield independent sequences.

Every randomized decision in the library --- try seeding, heuristic sampling, formula generation ---
draws from a caller-supplied [rand::Rng], and nothing fixes the generator to this one.
It exists so that reproducible runs need no further dependencies: given a fixed seed, a solve is fully
deterministic.
*/

use rand_core::{impls, RngCore, SeedableRng};

/// State and stream increment.
#[derive(Clone, Debug)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    const MULTIPLIER: u64 = 6364136223846793005;

    /// A generator from a bare integer seed.
    pub fn new(seed: u64) -> Self {
        <Self as SeedableRng>::seed_from_u64(seed)
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.state = state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(self.increment);

        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rotation = (state >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let state_seed = u64::from_le_bytes(seed[..8].try_into().expect("eight bytes"));
        let stream_seed = u64::from_le_bytes(seed[8..].try_into().expect("eight bytes"));

        // The increment must be odd.
        let increment = (stream_seed << 1) | 1;
        let mut pcg = Pcg32 {
            state: increment.wrapping_add(state_seed),
            increment,
        };
        pcg.next_u32();
        pcg
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut left = Pcg32::new(73);
        let mut right = Pcg32::new(73);

        for _ in 0..64 {
            assert_eq!(left.next_u32(), right.next_u32());
        }
    }

    #[test]
    fn distinct_seeds_distinct_sequences() {
        let mut left = Pcg32::new(2);
        let mut right = Pcg32::new(3);

        let left_draws: Vec<u32> = (0..8).map(|_| left.next_u32()).collect();
        let right_draws: Vec<u32> = (0..8).map(|_| right.next_u32()).collect();
        assert_ne!(left_draws, right_draws);
    }

    #[test]
    fn unit_interval_draws() {
        use rand::Rng;

        let mut rng = Pcg32::new(5);
        for _ in 0..1_000 {
            let draw: f64 = rng.random();
            assert!((0.0..1.0).contains(&draw));
        }
    }
}
