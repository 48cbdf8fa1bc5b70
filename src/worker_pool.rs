use crate::error::PipelineError;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tokio::time;

/// Splits an ordered task list into `num_workers` sublists: task `i` goes to
/// sublist `i mod num_workers`, keeping order inside each sublist. The
/// assignment is static so repeated runs distribute work identically.
pub fn split_round_robin<T>(tasks: Vec<T>, num_workers: usize) -> Vec<Vec<T>> {
    let mut sublists: Vec<Vec<T>> = (0..num_workers).map(|_| Vec::new()).collect();
    for (index, task) in tasks.into_iter().enumerate() {
        sublists[index % num_workers].push(task);
    }
    sublists
}

/// A pool worker that runs its pre-assigned task slice to completion and
/// returns its private result list. Workers share no mutable state; the only
/// synchronization is the join barrier the orchestrator holds over a whole
/// stage.
pub struct Worker<R> {
    id: usize,
    handle: JoinHandle<Result<Vec<R>, PipelineError>>,
}

impl<R: Send + 'static> Worker<R> {
    /// Spawns a blocking task over the worker's slice. The first failing
    /// task aborts the slice and carries its error to the barrier.
    pub fn spawn<T, F>(id: usize, tasks: Vec<T>, run: F) -> Self
    where
        T: Send + 'static,
        F: Fn(T) -> Result<R, PipelineError> + Send + 'static,
    {
        let handle = task::spawn_blocking(move || {
            tasks
                .into_iter()
                .map(&run)
                .collect::<Result<Vec<R>, PipelineError>>()
        });
        Self { id, handle }
    }

    /// Waits for the worker to finish, optionally bounding the wait.
    pub async fn wait(self, timeout: Option<Duration>) -> Result<Vec<R>, PipelineError> {
        let joined = match timeout {
            Some(limit) => time::timeout(limit, self.handle)
                .await
                .map_err(|_| PipelineError::PhaseTimeout(limit))?,
            None => self.handle.await,
        };
        joined.map_err(|source| PipelineError::WorkerPanic {
            worker_id: self.id,
            source,
        })?
    }
}
