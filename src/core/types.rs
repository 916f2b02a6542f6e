//! Core types for conversion jobs and their results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// One batch conversion request.
///
/// Built once by the caller and moved into the worker for the duration of the
/// run. Input paths are kept in order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionJob {
    /// Source images, converted in this order
    pub files: Vec<PathBuf>,
    /// Directory the converted images are written to (created if absent)
    #[serde(rename = "outputDir")]
    pub output_dir: PathBuf,
    /// Encoder quality (0-100), passed through to the codec
    pub quality: u8,
}

impl ConversionJob {
    pub fn new(files: Vec<PathBuf>, output_dir: impl Into<PathBuf>, quality: u8) -> Self {
        Self {
            files,
            output_dir: output_dir.into(),
            quality,
        }
    }

    /// Number of files the job was started with
    pub fn total(&self) -> usize {
        self.files.len()
    }
}

/// Result of attempting one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "detail")]
pub enum OutcomeStatus {
    /// Written to the contained output path
    Converted(PathBuf),
    /// Conversion failed with the contained error description
    Failed(String),
}

/// Per-file outcome, produced as the loop advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// Path of the source image as given in the job
    pub source: PathBuf,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl ConversionOutcome {
    pub fn converted(source: PathBuf, output: PathBuf) -> Self {
        Self { source, status: OutcomeStatus::Converted(output) }
    }

    pub fn failed(source: PathBuf, error: impl Into<String>) -> Self {
        Self { source, status: OutcomeStatus::Failed(error.into()) }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self.status, OutcomeStatus::Converted(_))
    }
}

/// Totals for a finished job, returned when the worker is joined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Files in the job
    pub total: usize,
    /// Files written successfully
    pub converted: usize,
    /// Files that failed to convert
    pub failed: usize,
    /// Whether the loop stopped early on a cancel request
    pub cancelled: bool,
    /// Job-level failure that stopped the run before any file, if any
    pub fatal: Option<String>,
}

impl ConversionSummary {
    /// Files actually attempted
    pub fn attempted(&self) -> usize {
        self.converted + self.failed
    }

    pub(crate) fn record(&mut self, outcome: &ConversionOutcome) {
        if outcome.is_converted() {
            self.converted += 1;
        } else {
            self.failed += 1;
        }
    }
}
