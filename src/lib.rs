//! Line bucket-sort benchmarking harness
//!
//! Ingests a directory of text files, merges their lines into one in-memory
//! collection, and sorts it with a stable bucket (radix) sort under one of
//! three orderings, timing sequential against threaded ingestion feeding the
//! same single-threaded sort stage.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Core sort and ordering policy
pub mod policy;
pub mod bucket_sort;

// Ingestion, output, and job coordination
pub mod ingest;
pub mod output;
pub mod runner;

// Re-export commonly used types
pub use config::{IngestStrategy, JobConfig, JobConfigBuilder};
pub use error::{SortError, SortResult};
pub use policy::SortMode;
pub use runner::{run_benchmark, run_job, JobReport};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;
