// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Implementation of the bounded generators under comparison.
//! All implement the BoundedRng interface, the two hand-rolled ones
//! additionally implement SequenceSampling.

use rand::{seq::SliceRandom, Rng, RngCore, SeedableRng};

/// Exclusive upper bound of every bounded draw (2**20).
pub const UPPER_BOUND: u64 = 1 << 20;

/// General trait for generators producing values in 0..UPPER_BOUND.
pub trait BoundedRng {
    /// Initialize with specified seed.
    fn new(seed: u64) -> Self
    where
        Self: Sized;
    /// Reset to initial state, equivalent to replacing with ::new(seed).
    fn reseed(&mut self, seed: u64);
    /// Advance the state one step and return a value in 0..UPPER_BOUND.
    fn next_bounded(&mut self) -> u64;
    /// Collect `n` consecutive bounded draws in order.
    fn draw_vector(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.next_bounded()).collect()
    }
}

/// Operations on existing sequences.
pub trait SequenceSampling: BoundedRng {
    /// Permute `sequence` in place.
    /// Randomness comes from `permuter`, never from this generator's state,
    /// so the result is not reproducible from the seed alone.
    fn shuffle<R: Rng + ?Sized>(&self, sequence: &mut [u64], permuter: &mut R) {
        sequence.shuffle(permuter);
    }

    /// Pick an element using one bounded draw.
    /// Returns 0 for an empty sequence without advancing the state.
    fn pick_element(&mut self, sequence: &[u64]) -> u64 {
        if sequence.is_empty() {
            return 0;
        }
        let index = self.next_bounded() % sequence.len() as u64;
        sequence[index as usize]
    }
}

/// Yardstick generator, the rand crate's StdRng behind the bounded interface.
pub struct ReferenceRand {
    rng: rand::rngs::StdRng,
}

impl BoundedRng for ReferenceRand {
    fn new(seed: u64) -> Self {
        ReferenceRand {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = rand::rngs::StdRng::seed_from_u64(seed);
    }

    fn next_bounded(&mut self) -> u64 {
        self.rng.next_u32() as u64 % UPPER_BOUND
    }
}

// Linear congruential generators
pub mod lcg {
    use super::{BoundedRng, SequenceSampling, UPPER_BOUND};

    pub const MULTIPLIER: u64 = 48271;
    pub const INCREMENT: u64 = 0;
    /// 2**30, not the Mersenne prime 2**31 - 1 usually paired with 48271.
    /// The power of two shortens the period. Changing it changes every
    /// recorded sequence of both hand-rolled generators.
    pub const MODULUS: u64 = 1 << 30;
    const DOWNSCALE: u64 = MODULUS / UPPER_BOUND;

    /// Multiplicative congruential generator with a 2**30 modulus.
    /// The unseeded state is 0, which is a fixed point of the recurrence.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
    pub struct Lcg48271 {
        seed: u64,
    }

    impl BoundedRng for Lcg48271 {
        fn new(seed: u64) -> Self {
            Lcg48271 { seed }
        }

        fn reseed(&mut self, seed: u64) {
            self.seed = seed;
        }

        fn next_bounded(&mut self) -> u64 {
            self.step();
            self.seed / DOWNSCALE
        }
    }

    impl SequenceSampling for Lcg48271 {}

    impl Lcg48271 {
        /// Advance one step and return the full state in 0..MODULUS.
        pub fn next_raw(&mut self) -> u64 {
            self.step();
            self.seed
        }

        // Wrapping is exact here since MODULUS divides 2**64.
        fn step(&mut self) {
            self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) % MODULUS;
        }
    }
}

/// Lagged subtractive generator over a fixed history ring.
pub mod lagged {
    use super::{lcg::Lcg48271, BoundedRng, SequenceSampling, UPPER_BOUND};

    /// Long lag, also the history capacity.
    pub const LAG_LONG: usize = 97;
    pub const LAG_SHORT: usize = 33;
    pub const MODULUS: u64 = (1 << 32) - 1;

    #[derive(Debug, Copy, Clone)]
    pub struct LaggedSubtractive {
        history: [u64; LAG_LONG],
        // Slot of the most recent entry; older entries follow it modulo LAG_LONG.
        head: usize,
        seeder: Lcg48271,
    }

    impl Default for LaggedSubtractive {
        fn default() -> Self {
            LaggedSubtractive {
                history: [0; LAG_LONG],
                head: 0,
                seeder: Lcg48271::default(),
            }
        }
    }

    impl BoundedRng for LaggedSubtractive {
        fn new(seed: u64) -> Self {
            let mut rng = LaggedSubtractive::default();
            rng.reseed(seed);
            rng
        }

        fn reseed(&mut self, seed: u64) {
            self.seeder.reseed(seed);
            self.history = [0; LAG_LONG];
            self.head = 0;
            for _ in 0..LAG_LONG {
                let value = self.seeder.next_raw() % MODULUS;
                self.push_front(value);
            }
        }

        fn next_bounded(&mut self) -> u64 {
            let long = self.lag(LAG_LONG);
            let short = self.lag(LAG_SHORT);
            let diff = if long > short {
                (long - short) % MODULUS
            } else {
                (short - long + 1) % MODULUS
            };
            self.push_front(diff);
            diff % UPPER_BOUND
        }
    }

    impl SequenceSampling for LaggedSubtractive {}

    impl LaggedSubtractive {
        /// Entries most recent first. Always LAG_LONG long.
        pub fn history(&self) -> impl Iterator<Item = u64> + '_ {
            (1..=LAG_LONG).map(move |i| self.lag(i))
        }

        /// The i-th most recent entry, 1-indexed.
        fn lag(&self, i: usize) -> u64 {
            self.history[(self.head + i - 1) % LAG_LONG]
        }

        /// Writing into the slot before head evicts the oldest entry.
        fn push_front(&mut self, value: u64) {
            self.head = (self.head + LAG_LONG - 1) % LAG_LONG;
            self.history[self.head] = value;
        }
    }
}
