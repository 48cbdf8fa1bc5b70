use crate::error::PipelineError;
use crate::job::JobDescription;
use crate::mapper::MapTask;
use std::fs;

/// Splits every input file into consecutive fixed-size byte fragments, one
/// map task each, in job-description order.
///
/// The final fragment covers exactly the bytes left after the last full one,
/// so a file of an exact multiple of the fragment size yields
/// `file_size / fragment_size` tasks and any other file
/// `ceil(file_size / fragment_size)`. A file smaller than the fragment size
/// yields a single task covering the whole file; a zero-length file yields
/// none (its report row comes from the per-file grouping in the
/// orchestrator).
pub fn partition(job: &JobDescription) -> Result<Vec<MapTask>, PipelineError> {
    let fragment_size = job.fragment_size as u64;
    let mut tasks = Vec::new();

    for file_path in &job.files {
        let file_size = fs::metadata(file_path)
            .map_err(|err| {
                PipelineError::Configuration(format!(
                    "cannot stat input file '{}': {}",
                    file_path.display(),
                    err
                ))
            })?
            .len();

        let mut offset = 0;
        while offset + fragment_size < file_size {
            tasks.push(MapTask {
                file_path: file_path.clone(),
                byte_offset: offset,
                requested_len: job.fragment_size,
            });
            offset += fragment_size;
        }
        if offset < file_size {
            tasks.push(MapTask {
                file_path: file_path.clone(),
                byte_offset: offset,
                requested_len: (file_size - offset) as usize,
            });
        }
    }

    Ok(tasks)
}
