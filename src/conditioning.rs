// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Methods to turn bounded draws into more constrained data types.

use crate::rngs::UPPER_BOUND;

/// Maps a bounded draw onto 0..=1 in f64.
/// UPPER_BOUND - 1 maps to exactly 1.0.
pub fn bounded_to_unit(int: u64) -> f64 {
    int as f64 / (UPPER_BOUND - 1) as f64
}

/// Index of the equal-width bin of 0..1 that contains `u`.
/// Bins are closed at their lower edge, so a value on an edge belongs to the upper bin.
/// 1.0 (and anything above) is clamped into the last bin.
pub fn bin_index(u: f64, bins: usize) -> usize {
    let bins = bins.max(1);
    ((u * bins as f64).floor() as usize).min(bins - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_mapping_endpoints() {
        assert_eq!(bounded_to_unit(0), 0.0);
        assert_eq!(bounded_to_unit(UPPER_BOUND - 1), 1.0);
        assert!(bounded_to_unit(UPPER_BOUND / 2) > 0.5);
    }

    #[test]
    fn bin_edges_go_up() {
        assert_eq!(bin_index(0.0, 4), 0);
        assert_eq!(bin_index(0.25, 4), 1);
        assert_eq!(bin_index(0.2499, 4), 0);
        assert_eq!(bin_index(0.75, 4), 3);
    }

    #[test]
    fn top_of_range_is_clamped() {
        assert_eq!(bin_index(1.0, 16), 15);
        assert_eq!(bin_index(bounded_to_unit(UPPER_BOUND - 1), 16), 15);
        assert_eq!(bin_index(0.9999, 1), 0);
        assert_eq!(bin_index(0.5, 0), 0);
    }
}
