use std::path::Path;
use serde::Serialize;
use crate::core::ConversionOutcome;

/// Event emitted by the worker while a job runs.
///
/// For every attempted file the observer sees, in order: a `Converting` status,
/// an optional error status, the outcome, then the progress value. `Finished`
/// is always last and is sent exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "payload")]
pub enum ConversionEvent {
    /// Overall progress percentage (0-100)
    Progress(u8),
    /// Human-readable status line
    Status(String),
    /// Result for one input file
    Outcome(ConversionOutcome),
    /// Terminal event
    Finished,
}

/// `floor(100 * completed / total)`, or 0 for an empty batch.
pub fn progress_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    ((completed * 100) / total) as u8
}

pub fn converting_message(name: &str) -> String {
    format!("Converting: {name}")
}

pub fn error_message(name: &str, detail: &str) -> String {
    format!("Error converting {name}: {detail}")
}

pub fn output_dir_error_message(dir: &Path, detail: &str) -> String {
    format!("Error creating output directory {}: {detail}", dir.display())
}
