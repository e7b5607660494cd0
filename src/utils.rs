// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Misc utility functions.

use std::time::Duration;

/// Seed derived from the current time, whole seconds since the unix epoch.
pub fn time_seed() -> u64 {
    chrono::Utc::now().timestamp().unsigned_abs()
}

/// Average cost of one draw in nanoseconds.
pub fn nanos_per_value(elapsed_micros: u64, values: usize) -> f64 {
    elapsed_micros as f64 * 1000.0 / values as f64
}

/// Speed of a batch relative to the reference batch of the same size, in percent.
/// None when either batch was too fast to register.
pub fn relative_speed(elapsed_micros: u64, reference_micros: u64) -> Option<f64> {
    if elapsed_micros == 0 || reference_micros == 0 {
        return None;
    }
    Some(reference_micros as f64 / elapsed_micros as f64 * 100.0)
}

/// Format a duration into a pretty String.
/// e.g. 1500 ms is 1.50 s
pub fn format_elapsed_time(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros >= 1_000_000 {
        format!("{:.2} s", elapsed.as_secs_f64())
    } else if micros >= 1_000 {
        format!("{:.2} ms", micros as f64 / 1000.0)
    } else {
        format!("{} µs", micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_seed_is_recent() {
        // 2023-11-14
        assert!(time_seed() > 1_700_000_000);
    }

    #[test]
    fn per_value_cost() {
        assert_eq!(nanos_per_value(1000, 1_000_000), 1.0);
        assert_eq!(nanos_per_value(0, 1000), 0.0);
    }

    #[test]
    fn relative_speed_guards_zero() {
        assert_eq!(relative_speed(0, 10), None);
        assert_eq!(relative_speed(10, 0), None);
        assert_eq!(relative_speed(200, 100), Some(50.0));
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed_time(Duration::from_micros(15)), "15 µs");
        assert_eq!(format_elapsed_time(Duration::from_micros(2500)), "2.50 ms");
        assert_eq!(format_elapsed_time(Duration::from_millis(1500)), "1.50 s");
    }
}
