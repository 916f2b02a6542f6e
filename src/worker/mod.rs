mod cancel;
mod converter;
mod error;
mod observer;
mod task;

pub use cancel::CancellationFlag;
pub use converter::{BatchConverter, ConversionHandle};
pub use error::{WorkerError, WorkerResult};
pub use observer::{ConversionObserver, dispatch_events};
pub use task::{convert_file, convert_isolated};
