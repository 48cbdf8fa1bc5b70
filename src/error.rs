use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure taxonomy for the pipeline. Every failure is a deterministic
/// function of the input, so nothing here is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Bad job description, non-positive worker count or fragment size, or
    /// an input file that cannot be stat'd at partition time. Fatal before
    /// any work is dispatched.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// I/O failure while reading a fragment. Propagated to the orchestrator
    /// and aborts the whole run; never absorbed into an empty result.
    #[error("map task failed for '{}' at offset {byte_offset}: {source}", file_path.display())]
    MapTask {
        file_path: PathBuf,
        byte_offset: u64,
        source: std::io::Error,
    },

    /// A reduce task received a map result for a different file. Given the
    /// grouping invariants this is an internal-invariant violation.
    #[error("reduce task for '{}' received a result for '{}'", file_path.display(), foreign_path.display())]
    ReduceTask {
        file_path: PathBuf,
        foreign_path: PathBuf,
    },

    /// A worker panicked or was cancelled by the runtime.
    #[error("worker {worker_id} terminated abnormally: {source}")]
    WorkerPanic {
        worker_id: usize,
        source: tokio::task::JoinError,
    },

    /// A stage barrier did not complete within the configured timeout.
    #[error("phase did not complete within {0:?}")]
    PhaseTimeout(Duration),

    /// Failure writing the final report.
    #[error("failed to write report '{}': {source}", path.display())]
    Report {
        path: PathBuf,
        source: std::io::Error,
    },
}
