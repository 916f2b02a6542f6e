//! Background batch converter.
//!
//! A job runs on tokio's blocking thread pool and converts its files one at a
//! time. Events go back to the caller over an unbounded channel in strict
//! input order, and `Finished` is sent exactly once on every exit path,
//! including a panic that escapes the loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{
    ConversionEvent, ConversionJob, ConversionOutcome, ConversionSummary, ConverterConfig,
    converting_message, error_message, output_dir_error_message, progress_percentage,
};
use crate::processing::{ImageCodec, ImageRsCodec};
use crate::utils::{display_name, ensure_output_dir};

use super::cancel::CancellationFlag;
use super::error::{WorkerError, WorkerResult};
use super::task::convert_isolated;

/// Runs conversion jobs, one at a time, against a shared codec.
#[derive(Clone)]
pub struct BatchConverter {
    codec: Arc<dyn ImageCodec>,
    active: Arc<AtomicBool>,
}

impl BatchConverter {
    pub fn new(codec: impl ImageCodec + 'static) -> Self {
        Self {
            codec: Arc::new(codec),
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Converter using the `image` crate codec configured by `config`.
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(ImageRsCodec::from_config(config))
    }

    /// Whether a job started on this converter has not finished yet.
    pub fn is_busy(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Starts `job` on a blocking worker thread and returns immediately.
    ///
    /// Fails with [`WorkerError::JobActive`] while a previous job is still
    /// running; jobs are never queued. Must be called from within a tokio
    /// runtime.
    pub fn start(
        &self,
        job: ConversionJob,
    ) -> WorkerResult<(ConversionHandle, UnboundedReceiver<ConversionEvent>)> {
        let runtime = tokio::runtime::Handle::try_current()?;

        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejected job: a conversion is already running");
            return Err(WorkerError::JobActive);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationFlag::new();
        let codec = Arc::clone(&self.codec);
        let mut emitter = EventEmitter::new(tx, Arc::clone(&self.active));
        let worker_cancel = cancel.clone();

        let join = runtime.spawn_blocking(move || {
            let summary = run_job(job, codec.as_ref(), &worker_cancel, &emitter);
            emitter.finish();
            summary
        });

        Ok((ConversionHandle { cancel, join }, rx))
    }
}

/// Caller's side of a running job.
#[derive(Debug)]
pub struct ConversionHandle {
    cancel: CancellationFlag,
    join: JoinHandle<ConversionSummary>,
}

impl ConversionHandle {
    /// Asks the worker to stop before the next file.
    ///
    /// Returns `false` if cancellation had already been requested.
    pub fn cancel(&self) -> bool {
        let first = self.cancel.cancel();
        if first {
            info!("Cancellation requested");
        }
        first
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A clone of the job's flag, for wiring into signal handlers.
    pub fn cancellation_flag(&self) -> CancellationFlag {
        self.cancel.clone()
    }

    /// Waits for the worker thread and returns the job totals.
    pub async fn wait(self) -> WorkerResult<ConversionSummary> {
        Ok(self.join.await?)
    }
}

/// Worker-side event sender.
///
/// Releases the converter's active marker and sends `Finished` once, either
/// through [`EventEmitter::finish`] or on drop.
pub(crate) struct EventEmitter {
    tx: UnboundedSender<ConversionEvent>,
    active: Arc<AtomicBool>,
    finished: bool,
}

impl EventEmitter {
    pub(crate) fn new(tx: UnboundedSender<ConversionEvent>, active: Arc<AtomicBool>) -> Self {
        Self { tx, active, finished: false }
    }

    fn send(&self, event: ConversionEvent) {
        if self.tx.send(event).is_err() {
            debug!("No observer for conversion event");
        }
    }

    fn status(&self, message: String) {
        self.send(ConversionEvent::Status(message));
    }

    fn outcome(&self, outcome: ConversionOutcome) {
        self.send(ConversionEvent::Outcome(outcome));
    }

    fn progress(&self, percent: u8) {
        self.send(ConversionEvent::Progress(percent));
    }

    pub(crate) fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        // Free the converter first so an observer reacting to `Finished` can start again
        self.active.store(false, Ordering::Release);
        self.send(ConversionEvent::Finished);
    }
}

impl Drop for EventEmitter {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Converts every file of `job` in order, stopping early on cancellation.
///
/// Does not send `Finished`; the caller owns the emitter's lifecycle.
pub(crate) fn run_job(
    job: ConversionJob,
    codec: &dyn ImageCodec,
    cancel: &CancellationFlag,
    emitter: &EventEmitter,
) -> ConversionSummary {
    let total = job.total();
    let mut summary = ConversionSummary { total, ..Default::default() };

    if total == 0 {
        debug!("Empty batch, nothing to convert");
        return summary;
    }

    info!(
        "Converting {} files to {} in {} (quality {})",
        total,
        codec.target_format(),
        job.output_dir.display(),
        job.quality
    );

    if let Err(e) = ensure_output_dir(&job.output_dir) {
        let detail = e.to_string();
        warn!("Cannot prepare output directory {}: {}", job.output_dir.display(), detail);
        emitter.status(output_dir_error_message(&job.output_dir, &detail));
        summary.fatal = Some(detail);
        return summary;
    }

    for (index, file) in job.files.iter().enumerate() {
        if cancel.is_cancelled() {
            info!("Conversion cancelled after {}/{} files", index, total);
            summary.cancelled = true;
            break;
        }

        let name = display_name(file);
        emitter.status(converting_message(&name));

        let outcome = match convert_isolated(codec, file, &job.output_dir, job.quality) {
            Ok(output) => {
                debug!("Converted '{}' -> {}", name, output.display());
                ConversionOutcome::converted(file.clone(), output)
            }
            Err(detail) => {
                warn!("Conversion failed for {}: {}", file.display(), detail);
                emitter.status(error_message(&name, &detail));
                ConversionOutcome::failed(file.clone(), detail)
            }
        };

        summary.record(&outcome);
        emitter.outcome(outcome);
        emitter.progress(progress_percentage(index + 1, total));
    }

    if summary.failed > 0 {
        warn!(
            "Batch finished with {} failed files out of {}",
            summary.failed, total
        );
    } else {
        info!("Batch finished: {} files converted", summary.converted);
    }

    summary
}
