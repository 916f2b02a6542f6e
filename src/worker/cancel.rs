use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set-once stop request shared between the caller and the worker loop.
///
/// The loop polls it before starting each file; a request made while a file is
/// being converted takes effect at the next file boundary.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Returns `true` only for the call that set the flag.
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
