//! Core conversion types and settings.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`ConversionJob`]: One batch conversion request
//! - [`ConversionOutcome`]: Per-file result of a conversion attempt
//! - [`ConversionEvent`]: Progress and status events emitted by the worker
//! - [`ConverterConfig`]: Settings shared by every job

mod config;
mod progress;
mod types;

pub use config::{ConverterConfig, DEFAULT_AVIF_SPEED, DEFAULT_QUALITY};
pub use progress::{
    ConversionEvent, converting_message, error_message, output_dir_error_message,
    progress_percentage,
};
pub use types::{ConversionJob, ConversionOutcome, ConversionSummary, OutcomeStatus};
