use crate::error::PipelineError;
use crate::mapper::MapResult;
use crate::weight::weight;
use std::collections::HashMap;
use std::path::PathBuf;

/// One unit of reduce work: every map result produced for one file.
#[derive(Debug)]
pub struct ReduceTask {
    pub file_path: PathBuf,
    pub map_results: Vec<MapResult>,
}

/// Final per-file statistics. `longest_word_count` counts duplicates across
/// fragments, it does not deduplicate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReduceResult {
    pub file_path: PathBuf,
    pub rank: f64,
    pub longest_word_length: usize,
    pub longest_word_count: u64,
}

/// Aggregates a file's fragment statistics into its ranked result.
///
/// The rank is the Fibonacci-weighted average word length: the histograms
/// are merged by summing counts per length into a fresh map, each length
/// contributes `weight(length) * count`, and the sum is divided by the total
/// word count. A file with no words ranks 0.
pub fn run_reduce_task(task: ReduceTask) -> Result<ReduceResult, PipelineError> {
    if let Some(foreign) = task
        .map_results
        .iter()
        .find(|result| result.file_path != task.file_path)
    {
        return Err(PipelineError::ReduceTask {
            file_path: task.file_path,
            foreign_path: foreign.file_path.clone(),
        });
    }

    let longest_word_length = task
        .map_results
        .iter()
        .flat_map(|result| result.longest_words.iter())
        .map(|word| word.len())
        .max()
        .unwrap_or(0);
    let longest_word_count = task
        .map_results
        .iter()
        .flat_map(|result| result.longest_words.iter())
        .filter(|word| word.len() == longest_word_length)
        .count() as u64;

    let mut aggregated: HashMap<usize, u64> = HashMap::new();
    for result in &task.map_results {
        for (length, count) in &result.histogram {
            *aggregated.entry(*length).or_insert(0) += count;
        }
    }

    let weighted_sum: u64 = aggregated
        .iter()
        .map(|(length, count)| weight(*length) * count)
        .sum();
    let total_words: u64 = aggregated.values().sum();
    let rank = if total_words == 0 {
        0.0
    } else {
        weighted_sum as f64 / total_words as f64
    };

    Ok(ReduceResult {
        file_path: task.file_path,
        rank,
        longest_word_length,
        longest_word_count,
    })
}
