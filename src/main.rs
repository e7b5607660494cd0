// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Quality and speed comparison of two hand-rolled bounded PRNGs
//! against a reference generator.

pub mod bench;
pub mod conditioning;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod rngs;
pub mod stats;
mod strings;
pub mod utils;

use bench::{Clock, FixedSeed, Harness, MonotonicClock, SeedSource, TimeSeed};
use config::BenchConfig;
use error::BenchError;
use report::{FileSink, ReportSink};
use tracing::info;

/// Open the report file, run every generator, then write and flush the report.
/// The file is opened before the harness runs, so a bad path fails before any generator is seeded.
fn run_to_file<C: Clock, S: SeedSource>(
    config: &BenchConfig,
    mut harness: Harness<C, S>,
) -> Result<(), BenchError> {
    let mut sink = FileSink::create(&config.output_path, config.echo_stdout)?;
    let started_at = chrono::Local::now();
    let reports = harness.run();
    report::write_report(&mut sink, started_at, &reports, strings::REFERENCE_NAME)?;
    sink.finish()?;
    Ok(())
}

fn main() -> Result<(), BenchError> {
    let start = std::time::Instant::now();
    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::load(&path)?,
        None => BenchConfig::default(),
    };
    logging::init_logging(&config.log_level)?;

    match config.seed {
        Some(seed) => run_to_file(&config, Harness::new(MonotonicClock, FixedSeed(seed)))?,
        None => run_to_file(&config, Harness::new(MonotonicClock, TimeSeed))?,
    }

    info!(
        path = %config.output_path,
        runtime = %utils::format_elapsed_time(start.elapsed()),
        "report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fails the test if the harness ever asks for a seed.
    struct UnreachableSeed;

    impl SeedSource for UnreachableSeed {
        fn current_time_as_integer(&mut self) -> u64 {
            panic!("harness ran before the report file was opened");
        }
    }

    #[test]
    fn bad_output_path_fails_before_any_generator_runs() {
        let config = BenchConfig {
            output_path: "/nonexistent/lagbench/output.txt".to_string(),
            echo_stdout: false,
            ..BenchConfig::default()
        };
        let err = run_to_file(&config, Harness::new(MonotonicClock, UnreachableSeed)).unwrap_err();
        assert!(matches!(err, BenchError::Io(_)));
    }

    #[test]
    fn report_file_has_every_section() {
        let path = std::env::temp_dir().join(format!("lagbench-run-{}.txt", std::process::id()));
        let config = BenchConfig {
            output_path: path.to_str().unwrap().to_string(),
            echo_stdout: false,
            seed: Some(42),
            ..BenchConfig::default()
        };
        run_to_file(&config, Harness::new(MonotonicClock, FixedSeed(42))).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lcg = content.find(strings::LCG_NAME).unwrap();
        let lagged = content.find(strings::LAGGED_NAME).unwrap();
        let reference = content.find(strings::REFERENCE_NAME).unwrap();
        assert!(lcg < lagged && lagged < reference);
        assert_eq!(content.matches("Generating 1000000 values").count(), 3);
        std::fs::remove_file(&path).unwrap();
    }
}
