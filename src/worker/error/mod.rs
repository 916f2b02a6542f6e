#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("A conversion job is already running on this converter")]
    JobActive,

    #[error("No async runtime available to host the worker: {0}")]
    NoRuntime(String),

    #[error("Worker thread failed: {0}")]
    Join(String),
}

pub type WorkerResult<T> = Result<T, WorkerError>;

impl From<tokio::task::JoinError> for WorkerError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            WorkerError::Join("conversion worker panicked".to_string())
        } else {
            WorkerError::Join(err.to_string())
        }
    }
}

impl From<tokio::runtime::TryCurrentError> for WorkerError {
    fn from(err: tokio::runtime::TryCurrentError) -> Self {
        WorkerError::NoRuntime(err.to_string())
    }
}
