///
/// Pipeline error types.
///
/// All errors that can surface from a run: invalid configuration,
/// malformed input tokens, thread spawn failures, and worker panics.
/// Capacity violations never appear here; blocking admission prevents
/// them by construction.
///

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Malformed token '{token}' at position {position}")]
    BadToken { token: String, position: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Worker thread {worker} panicked")]
    WorkerPanicked { worker: usize },
}
