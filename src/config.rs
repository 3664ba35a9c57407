//! Job configuration for sort runs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{SortError, SortResult};
use crate::policy::SortMode;

/// How sources are aggregated before sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStrategy {
    /// One source at a time, cross-source order preserved
    Sequential,
    /// One worker thread per source, cross-source order unspecified
    Threaded,
}

impl IngestStrategy {
    /// Prefix used for default output file names
    pub fn label(self) -> &'static str {
        match self {
            IngestStrategy::Sequential => "Single",
            IngestStrategy::Threaded => "Multi",
        }
    }
}

impl FromStr for IngestStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" | "seq" => Ok(IngestStrategy::Sequential),
            "threaded" | "concurrent" => Ok(IngestStrategy::Threaded),
            other => Err(SortError::invalid_strategy(other)),
        }
    }
}

/// Configuration for one end-to-end sort job
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Directory whose non-directory entries are the input sources
    pub input_dir: PathBuf,
    /// Directory receiving the output artifact
    pub output_dir: PathBuf,
    pub mode: SortMode,
    pub strategy: IngestStrategy,
    /// Output file stem; derived from strategy and mode when absent
    pub output_name: Option<String>,
    /// Verify the produced ordering after sorting
    pub verify: bool,
}

impl JobConfig {
    /// Output file name for this job, e.g. `SingleAscending.txt`
    pub fn output_file_name(&self) -> String {
        match &self.output_name {
            Some(name) => format!("{name}.txt"),
            None => format!("{}{}.txt", self.strategy.label(), self.mode.label()),
        }
    }

    /// Validate the configuration against the filesystem
    pub fn validate(&self) -> SortResult<()> {
        let display = self.input_dir.display().to_string();
        let metadata =
            std::fs::metadata(&self.input_dir).map_err(|_| SortError::not_found(&display))?;
        if !metadata.is_dir() {
            return Err(SortError::not_a_directory(&display));
        }
        Ok(())
    }
}

/// Builder for [`JobConfig`]
#[derive(Debug)]
pub struct JobConfigBuilder {
    input_dir: PathBuf,
    output_dir: PathBuf,
    mode: SortMode,
    strategy: IngestStrategy,
    output_name: Option<String>,
    verify: bool,
}

impl JobConfigBuilder {
    pub fn new(input_dir: &Path) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            output_dir: PathBuf::from("."),
            mode: SortMode::AscendingLexicographic,
            strategy: IngestStrategy::Sequential,
            output_name: None,
            verify: false,
        }
    }

    pub fn output_dir(mut self, dir: &Path) -> Self {
        self.output_dir = dir.to_path_buf();
        self
    }

    pub fn mode(mut self, mode: SortMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn strategy(mut self, strategy: IngestStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn output_name(mut self, name: &str) -> Self {
        self.output_name = Some(name.to_string());
        self
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> SortResult<JobConfig> {
        let config = JobConfig {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            mode: self.mode,
            strategy: self.strategy,
            output_name: self.output_name,
            verify: self.verify,
        };
        config.validate()?;
        Ok(config)
    }
}
