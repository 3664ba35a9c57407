//! Run coordinator: drives one sort job end to end
//!
//! A job is discover -> aggregate -> sort -> write. The timed span covers
//! aggregation plus the sort itself; discovery and the final write sit
//! outside it, so sequential and threaded ingestion are compared on the work
//! that actually differs.

use log::info;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::bucket_sort;
use crate::config::{IngestStrategy, JobConfig, JobConfigBuilder};
use crate::error::{SortContext, SortError, SortResult};
use crate::ingest;
use crate::output;
use crate::policy::SortMode;

/// Outcome of one completed job
#[derive(Debug)]
pub struct JobReport {
    pub records: usize,
    pub elapsed: Duration,
    pub output_path: PathBuf,
}

/// Run one sort job under the configured mode and ingestion strategy
pub fn run_job(config: &JobConfig) -> SortResult<JobReport> {
    let sources = ingest::discover_sources(&config.input_dir)?;
    std::fs::create_dir_all(&config.output_dir)
        .with_path_context(&config.output_dir.display().to_string())?;

    let started = Instant::now();
    let merged = match config.strategy {
        IngestStrategy::Sequential => ingest::aggregate_sequential(&sources),
        IngestStrategy::Threaded => ingest::aggregate_threaded(&sources),
    };
    let sorted = bucket_sort::sort(merged, config.mode);
    let elapsed = started.elapsed();

    if config.verify {
        if let Some(index) = first_disorder(&sorted, config.mode) {
            return Err(SortError::not_sorted(index));
        }
    }

    let output_path = config.output_dir.join(config.output_file_name());
    output::write_records(&output_path, &sorted)?;

    let report = JobReport {
        records: sorted.len(),
        elapsed,
        output_path,
    };
    info!(
        "{} - {} records, elapsed: {:.3?}",
        report.output_path.display(),
        report.records,
        report.elapsed
    );
    Ok(report)
}

/// Run the full benchmark matrix: every mode under both ingestion
/// strategies, writing `SingleAscending.txt` through `MultiLastLetter.txt`
pub fn run_benchmark(input_dir: &Path, output_dir: &Path, verify: bool) -> SortResult<Vec<JobReport>> {
    info!("benchmark matrix starting on {} cpus", num_cpus::get());

    let mut reports = Vec::new();
    for strategy in [IngestStrategy::Sequential, IngestStrategy::Threaded] {
        for mode in [
            SortMode::AscendingLexicographic,
            SortMode::DescendingLexicographic,
            SortMode::LastLetterAscending,
        ] {
            let config = JobConfigBuilder::new(input_dir)
                .output_dir(output_dir)
                .mode(mode)
                .strategy(strategy)
                .verify(verify)
                .build()?;
            reports.push(run_job(&config)?);
        }
    }
    Ok(reports)
}

/// Index of the first record out of order under `mode`, if any
pub fn first_disorder(records: &[String], mode: SortMode) -> Option<usize> {
    (1..records.len())
        .find(|&i| mode.compare(&records[i - 1], &records[i]) == std::cmp::Ordering::Greater)
}
