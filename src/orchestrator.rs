use crate::error::PipelineError;
use crate::job::JobDescription;
use crate::mapper::{self, MapResult};
use crate::partitioner;
use crate::reducer::{self, ReduceResult, ReduceTask};
use crate::worker_pool::{split_round_robin, Worker};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Drives the two-phase pipeline: partition the job into map tasks, run the
/// map stage behind a full barrier, group results by file, run the reduce
/// stage behind a second barrier, sort by descending rank.
pub struct Orchestrator {
    num_workers: usize,
    phase_timeout: Option<Duration>,
}

impl Orchestrator {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            phase_timeout: None,
        }
    }

    /// Bounds each stage's barrier wait. Unbounded by default.
    pub fn with_phase_timeout(mut self, timeout: Duration) -> Self {
        self.phase_timeout = Some(timeout);
        self
    }

    pub async fn run(&self, job: &JobDescription) -> Result<Vec<ReduceResult>, PipelineError> {
        if self.num_workers == 0 {
            return Err(PipelineError::Configuration(
                "worker count must be positive".to_string(),
            ));
        }
        if job.fragment_size == 0 {
            return Err(PipelineError::Configuration(
                "fragment size must be positive".to_string(),
            ));
        }
        if job.files.is_empty() {
            return Err(PipelineError::Configuration(
                "job description lists no input files".to_string(),
            ));
        }

        let map_tasks = partitioner::partition(job)?;
        info!(
            tasks = map_tasks.len(),
            workers = self.num_workers,
            "map phase dispatched"
        );
        let map_results = self
            .run_phase(map_tasks, |task| mapper::run_map_task(&task))
            .await?;
        info!(results = map_results.len(), "map phase complete");

        let reduce_tasks = group_by_file(&job.files, map_results);
        info!(tasks = reduce_tasks.len(), "reduce phase dispatched");
        let mut reduce_results = self
            .run_phase(reduce_tasks, reducer::run_reduce_task)
            .await?;
        info!(results = reduce_results.len(), "reduce phase complete");

        sort_by_rank(&mut reduce_results, &job.files);
        Ok(reduce_results)
    }

    /// Runs one stage: spawn a worker per non-empty round-robin slice, then
    /// wait for every worker before reading any result. A worker failure is
    /// surfaced only after the whole stage has been joined, so no partial
    /// progress is ever observed downstream.
    async fn run_phase<T, R, F>(&self, tasks: Vec<T>, run: F) -> Result<Vec<R>, PipelineError>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Result<R, PipelineError> + Clone + Send + 'static,
    {
        let workers: Vec<Worker<R>> = split_round_robin(tasks, self.num_workers)
            .into_iter()
            .enumerate()
            .filter(|(_, slice)| !slice.is_empty())
            .map(|(id, slice)| Worker::spawn(id, slice, run.clone()))
            .collect();

        let mut collected = Vec::new();
        let mut first_error = None;
        for worker in workers {
            match worker.wait(self.phase_timeout).await {
                Ok(results) => collected.extend(results),
                Err(error) => {
                    if first_error.is_none() {
                        first_error = Some(error);
                    }
                }
            }
        }
        match first_error {
            Some(error) => Err(error),
            None => Ok(collected),
        }
    }
}

/// Groups map results into one reduce task per distinct file, in
/// job-description order. A file with no map results (zero-length input)
/// still gets a task so every input file appears in the report.
fn group_by_file(files: &[PathBuf], map_results: Vec<MapResult>) -> Vec<ReduceTask> {
    let mut by_file: HashMap<PathBuf, Vec<MapResult>> = HashMap::new();
    for result in map_results {
        by_file
            .entry(result.file_path.clone())
            .or_default()
            .push(result);
    }

    let mut tasks: Vec<ReduceTask> = Vec::new();
    for file_path in files {
        if let Some(map_results) = by_file.remove(file_path) {
            tasks.push(ReduceTask {
                file_path: file_path.clone(),
                map_results,
            });
        } else if !tasks.iter().any(|task| &task.file_path == file_path) {
            tasks.push(ReduceTask {
                file_path: file_path.clone(),
                map_results: Vec::new(),
            });
        }
    }
    tasks
}

/// Sorts by descending rank; ties keep the file's first position in the job
/// description so repeated runs produce identical reports.
fn sort_by_rank(results: &mut [ReduceResult], files: &[PathBuf]) {
    let order: HashMap<&Path, usize> = files
        .iter()
        .enumerate()
        .rev()
        .map(|(index, path)| (path.as_path(), index))
        .collect();

    results.sort_by(|a, b| {
        b.rank.total_cmp(&a.rank).then_with(|| {
            let a_position = order.get(a.file_path.as_path()).copied().unwrap_or(usize::MAX);
            let b_position = order.get(b.file_path.as_path()).copied().unwrap_or(usize::MAX);
            a_position.cmp(&b_position)
        })
    });
}
