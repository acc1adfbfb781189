use crate::flatten::FlattenStats;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Serialize, Debug)]
pub struct RunSummary {
    pub fastaflat_version: String,
    pub command: String,
    pub input: String,
    pub output: String,
    pub run_date: String,
    pub elapsed: f64,
    #[serde(flatten)]
    pub stats: FlattenStats,
    pub avg_len: f64,
}

impl RunSummary {
    pub fn new(command: &str, input: &str, output: &str, stats: FlattenStats, elapsed: f64) -> Self {
        let avg_len = if stats.records_written == 0 {
            0.0
        } else {
            stats.bases_written as f64 / stats.records_written as f64
        };

        RunSummary {
            fastaflat_version: crate::cli::VERSION.to_string(),
            command: command.to_string(),
            input: input.to_string(),
            output: output.to_string(),
            run_date: format!("{:?}", chrono::offset::Local::now()),
            elapsed,
            stats,
            avg_len,
        }
    }

    /// Writes the summary as pretty-printed JSON to `path`.
    pub fn write_to(&self, path: &str) -> Result<()> {
        info!("Writing run summary to {path}");
        let file = File::create(path).with_context(|| format!("Unable to create summary file {path}"))?;
        let mut wtr = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut wtr, self).context("Could not serialize summary")?;
        writeln!(wtr)?;
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_flattened_into_the_summary() {
        let stats = FlattenStats {
            records_read: 3,
            records_written: 2,
            filtered: 1,
            bases_written: 10,
            sequence_lines: 5,
        };
        let summary = RunSummary::new("size-filter", "in.fa", "-", stats, 0.5);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["command"], "size-filter");
        assert_eq!(value["records_written"], 2);
        assert_eq!(value["filtered"], 1);
        assert_eq!(value["avg_len"], 5.0);
        assert!(value.get("stats").is_none());
    }

    #[test]
    fn no_records_means_zero_average() {
        let summary = RunSummary::new("flatten", "in.fa", "out.fa", FlattenStats::default(), 0.0);
        assert_eq!(summary.avg_len, 0.0);
    }
}
