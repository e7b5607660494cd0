// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Collection of methods for statistical analysis of bounded samples.
//! Degenerate inputs give IEEE special values instead of panicking:
//! an empty sample has a NaN mean and chi-square, a zero mean gives a NaN
//! or infinite coefficient of variation.

use crate::conditioning;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Length of every quality sample.
pub const SAMPLE_SIZE: usize = 101;

/// Summary of one sample, as reported per quality round.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleStatistics {
    pub mean: f64,
    pub deviation: f64,
    pub variation_coefficient: f64,
    pub chi_square: f64,
    /// Upper tail probability of `chi_square`, NaN with a single bin.
    pub p_value: f64,
    pub bins: usize,
}

/// Arithmetic mean.
pub fn mean(sample: &[u64]) -> f64 {
    let sum: u64 = sample.iter().sum();
    sum as f64 / sample.len() as f64
}

/// Population standard deviation around `mean`.
pub fn deviation(mean: f64, sample: &[u64]) -> f64 {
    let sum: f64 = sample
        .iter()
        .fold(0.0, |acc, &x| acc + (x as f64 - mean).powi(2));
    (sum / sample.len() as f64).sqrt()
}

/// Deviation relative to the mean. NaN for 0 / 0, infinite for x / 0.
pub fn variation_coefficient(deviation: f64, mean: f64) -> f64 {
    deviation / mean
}

/// Sturges' rule, floor(1 + 3.322 * ln(n)), never below one bin.
pub fn bin_count(sample_size: usize) -> usize {
    let k = (1.0 + 3.322 * (sample_size as f64).ln()).floor();
    if k < 1.0 {
        1
    } else {
        k as usize
    }
}

/// Chi-square goodness of fit against the uniform distribution on 0..1.
/// Values are normalized by UPPER_BOUND - 1 and sorted into `bin_count(n)` bins.
pub fn chi_square(sample: &[u64]) -> f64 {
    let bins = bin_count(sample.len());
    let mut counts = vec![0usize; bins];
    for &x in sample {
        counts[conditioning::bin_index(conditioning::bounded_to_unit(x), bins)] += 1;
    }
    let expected: f64 = sample.len() as f64 / bins as f64;
    let mut chi_squared: f64 = 0.0;
    for observed in counts {
        chi_squared += (observed as f64 - expected).powi(2) / expected;
    }
    chi_squared
}

/// Get p value for the statistic over `bins` bins (bins - 1 degrees of freedom).
pub fn chi_square_p_value(chi_squared: f64, bins: usize) -> f64 {
    if bins < 2 || !chi_squared.is_finite() {
        return f64::NAN;
    }
    ChiSquared::new((bins - 1) as f64)
        .map(|dist| 1.0 - dist.cdf(chi_squared))
        .unwrap_or(f64::NAN)
}

/// All reported statistics of one sample.
pub fn summarize(sample: &[u64]) -> SampleStatistics {
    let m = mean(sample);
    let d = deviation(m, sample);
    let chi = chi_square(sample);
    let bins = bin_count(sample.len());
    SampleStatistics {
        mean: m,
        deviation: d,
        variation_coefficient: variation_coefficient(d, m),
        chi_square: chi,
        p_value: chi_square_p_value(chi, bins),
        bins,
    }
}
