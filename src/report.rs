// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Rendering of generator reports to a line sink.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use chrono::{DateTime, Local};

use crate::{
    bench::{BatchResult, GeneratorReport},
    stats::{SampleStatistics, SAMPLE_SIZE},
    strings,
    utils::{nanos_per_value, relative_speed},
};

/// Append-only destination for report text.
pub trait ReportSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    /// Flush buffered lines. Call once after the last line.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Buffered report file, optionally echoed to stdout.
/// Dropping it flushes too, but only `finish` reports a failed flush.
pub struct FileSink {
    writer: BufWriter<File>,
    echo: bool,
}

impl FileSink {
    pub fn create(file_path: &str, echo: bool) -> io::Result<Self> {
        let file = File::create(file_path)?;
        Ok(FileSink {
            writer: BufWriter::new(file),
            echo,
        })
    }
}

impl ReportSink for FileSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.echo {
            println!("{}", line);
        }
        writeln!(self.writer, "{}", line)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl ReportSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

fn format_statistics(stats: &SampleStatistics) -> [String; 4] {
    [
        format!("{}: {:.4}", strings::MEAN_LABEL, stats.mean),
        format!("{}: {:.4}", strings::DEVIATION_LABEL, stats.deviation),
        format!(
            "{}: {:.6}",
            strings::VARIATION_LABEL,
            stats.variation_coefficient
        ),
        format!(
            "{}: {:.4} ({} bins, p: {:.6})",
            strings::CHI_SQUARE_LABEL,
            stats.chi_square,
            stats.bins,
            stats.p_value
        ),
    ]
}

fn format_batch(batch: &BatchResult, reference: Option<&BatchResult>) -> String {
    let mut line = format!(
        "Generating {} values took: {} [µs] ({:.2} ns/value",
        batch.batch_size,
        batch.elapsed_micros,
        nanos_per_value(batch.elapsed_micros, batch.batch_size)
    );
    if let Some(pct) =
        reference.and_then(|r| relative_speed(batch.elapsed_micros, r.elapsed_micros))
    {
        line.push_str(&format!(", {:.2}% of reference", pct));
    }
    line.push(')');
    line
}

/// Write every report in order: quality rounds, then batch timings.
/// Batches are compared with the same-sized batch of `reference_name`, when present.
pub fn write_report<W: ReportSink>(
    sink: &mut W,
    started_at: DateTime<Local>,
    reports: &[GeneratorReport],
    reference_name: &str,
) -> io::Result<()> {
    sink.write_line(&format!(
        "{}, {}",
        strings::REPORT_TITLE,
        started_at.format("%Y-%m-%d %H:%M:%S")
    ))?;
    let reference = reports.iter().find(|r| r.name == reference_name);
    for report in reports {
        sink.write_line("")?;
        sink.write_line(&format!("{}:", report.name))?;
        sink.write_line(&format!("Seed: {}", report.seed))?;
        sink.write_line("")?;
        sink.write_line(&format!(
            "{} {} values:",
            strings::QUALITY_HEADER,
            SAMPLE_SIZE
        ))?;
        for stats in &report.rounds {
            for line in format_statistics(stats) {
                sink.write_line(&line)?;
            }
            sink.write_line("")?;
        }
        sink.write_line(strings::THROUGHPUT_HEADER)?;
        for batch in &report.batches {
            let same_size = reference.and_then(|r| {
                r.batches
                    .iter()
                    .find(|b| b.batch_size == batch.batch_size)
            });
            sink.write_line(&format_batch(batch, same_size))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{BATCH_SIZES, ROUNDS};
    use crate::stats;

    fn report(name: &'static str, micros: u64, sample: &[u64]) -> GeneratorReport {
        GeneratorReport {
            name,
            seed: 42,
            rounds: vec![stats::summarize(sample); ROUNDS],
            batches: BATCH_SIZES
                .iter()
                .map(|&batch_size| BatchResult {
                    batch_size,
                    elapsed_micros: micros,
                })
                .collect(),
        }
    }

    #[test]
    fn sections_in_order() {
        let sample: Vec<u64> = (1..=SAMPLE_SIZE as u64).collect();
        let reports = vec![
            report(strings::LCG_NAME, 200, &sample),
            report(strings::LAGGED_NAME, 400, &sample),
            report(strings::REFERENCE_NAME, 100, &sample),
        ];
        let mut sink = MemorySink::default();
        write_report(&mut sink, Local::now(), &reports, strings::REFERENCE_NAME).unwrap();

        let lines = &sink.lines;
        assert!(lines[0].starts_with(strings::REPORT_TITLE));
        let title_positions: Vec<usize> = reports
            .iter()
            .map(|r| {
                lines
                    .iter()
                    .position(|l| l == &format!("{}:", r.name))
                    .unwrap()
            })
            .collect();
        assert!(title_positions.windows(2).all(|w| w[0] < w[1]));

        let means = lines.iter().filter(|l| l.starts_with(strings::MEAN_LABEL));
        assert_eq!(means.count(), 3 * ROUNDS);
        let timings: Vec<&String> = lines
            .iter()
            .filter(|l| l.starts_with("Generating"))
            .collect();
        assert_eq!(timings.len(), 3 * BATCH_SIZES.len());
        assert_eq!(
            timings[0].as_str(),
            "Generating 1000 values took: 200 [µs] (200.00 ns/value, 50.00% of reference)"
        );
        assert!(timings[6].contains("25.00% of reference"));
        assert!(timings[17].contains("100.00% of reference"));
    }

    #[test]
    fn degenerate_statistics_render() {
        let zeros = vec![0u64; SAMPLE_SIZE];
        let mut sink = MemorySink::default();
        let reports = vec![report(strings::LCG_NAME, 0, &zeros)];
        write_report(&mut sink, Local::now(), &reports, strings::REFERENCE_NAME).unwrap();
        assert!(sink
            .lines
            .iter()
            .any(|l| l == &format!("{}: NaN", strings::VARIATION_LABEL)));
        // No reference and no measurable time: no relative column.
        assert!(sink
            .lines
            .iter()
            .any(|l| l == "Generating 1000 values took: 0 [µs] (0.00 ns/value)"));
    }

    #[test]
    fn file_sink_flushes() {
        let path = std::env::temp_dir().join(format!("lagbench-{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();
        let mut sink = FileSink::create(path_str, false).unwrap();
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();
        sink.finish().unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        std::fs::remove_file(&path).unwrap();
    }
}
