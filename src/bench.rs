// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Quality and throughput benchmarking of the bounded generators.

use std::{hint::black_box, time::Instant};

use tracing::{debug, info};

use crate::{
    rngs::{lagged::LaggedSubtractive, lcg::Lcg48271, BoundedRng, ReferenceRand},
    stats::{self, SampleStatistics, SAMPLE_SIZE},
    strings, utils,
};

/// Quality samples drawn per generator.
pub const ROUNDS: usize = 10;
/// Throughput batches, run in this order.
pub const BATCH_SIZES: [usize; 6] = [1_000, 5_000, 10_000, 50_000, 100_000, 1_000_000];

/// Monotonic time source used to bracket the draw loops.
pub trait Clock {
    type Instant: Copy;
    fn now(&self) -> Self::Instant;
    fn elapsed_micros(&self, start: Self::Instant, end: Self::Instant) -> u64;
}

/// `std::time::Instant`, immune to wall clock adjustments.
#[derive(Debug, Default, Copy, Clone)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_micros(&self, start: Instant, end: Instant) -> u64 {
        end.saturating_duration_since(start).as_micros() as u64
    }
}

/// Where each generator's initial seed comes from.
pub trait SeedSource {
    fn current_time_as_integer(&mut self) -> u64;
}

/// Seconds since the unix epoch, different on every run.
#[derive(Debug, Default, Copy, Clone)]
pub struct TimeSeed;

impl SeedSource for TimeSeed {
    fn current_time_as_integer(&mut self) -> u64 {
        utils::time_seed()
    }
}

/// Same seed for every generator, for reproducible runs.
#[derive(Debug, Copy, Clone)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn current_time_as_integer(&mut self) -> u64 {
        self.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub batch_size: usize,
    pub elapsed_micros: u64,
}

/// Everything measured for one generator, quality rounds first.
#[derive(Debug, Clone)]
pub struct GeneratorReport {
    pub name: &'static str,
    pub seed: u64,
    pub rounds: Vec<SampleStatistics>,
    pub batches: Vec<BatchResult>,
}

pub struct Harness<C: Clock, S: SeedSource> {
    clock: C,
    seeds: S,
}

impl<C: Clock, S: SeedSource> Harness<C, S> {
    pub fn new(clock: C, seeds: S) -> Self {
        Harness { clock, seeds }
    }

    /// Draw ROUNDS samples of SAMPLE_SIZE and summarize each.
    pub fn quality_phase(&self, test_rng: &mut impl BoundedRng) -> Vec<SampleStatistics> {
        (0..ROUNDS)
            .map(|round| {
                let sample = test_rng.draw_vector(SAMPLE_SIZE);
                let summary = stats::summarize(&sample);
                debug!(round, chi_square = summary.chi_square, "quality round");
                summary
            })
            .collect()
    }

    /// Time a single batch of discarded draws.
    pub fn time_batch(&self, test_rng: &mut impl BoundedRng, batch_size: usize) -> BatchResult {
        let start = self.clock.now();
        for _ in 0..batch_size {
            black_box(test_rng.next_bounded());
        }
        let end = self.clock.now();
        BatchResult {
            batch_size,
            elapsed_micros: self.clock.elapsed_micros(start, end),
        }
    }

    /// Time every batch in BATCH_SIZES, in order, continuing the generator's state.
    pub fn throughput_phase(&self, test_rng: &mut impl BoundedRng) -> Vec<BatchResult> {
        BATCH_SIZES
            .iter()
            .map(|&batch_size| {
                let rslt = self.time_batch(test_rng, batch_size);
                debug!(batch_size, micros = rslt.elapsed_micros, "batch timed");
                rslt
            })
            .collect()
    }

    /// Seed a fresh `R` and run both phases on it.
    pub fn evaluate<R: BoundedRng>(&mut self, name: &'static str) -> GeneratorReport {
        let seed = self.seeds.current_time_as_integer();
        info!(generator = name, seed, "evaluating");
        let mut test_rng = R::new(seed);
        let rounds = self.quality_phase(&mut test_rng);
        let batches = self.throughput_phase(&mut test_rng);
        GeneratorReport {
            name,
            seed,
            rounds,
            batches,
        }
    }

    /// Evaluate the LCG, the lagged generator and the reference, in that order.
    pub fn run(&mut self) -> Vec<GeneratorReport> {
        vec![
            self.evaluate::<Lcg48271>(strings::LCG_NAME),
            self.evaluate::<LaggedSubtractive>(strings::LAGGED_NAME),
            self.evaluate::<ReferenceRand>(strings::REFERENCE_NAME),
        ]
    }
}
