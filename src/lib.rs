// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;
pub mod worker;

// Public exports for external consumers
pub use crate::core::{
    ConversionEvent, ConversionJob, ConversionOutcome, ConversionSummary, ConverterConfig,
    OutcomeStatus,
};
pub use crate::processing::{ImageCodec, ImageRsCodec};
pub use crate::utils::{ConverterError, ConverterResult, TargetFormat, validate_request};
pub use crate::worker::{
    BatchConverter, CancellationFlag, ConversionHandle, ConversionObserver, WorkerError,
    dispatch_events,
};

// The command-line front end lives in main.rs.
