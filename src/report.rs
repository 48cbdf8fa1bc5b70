use crate::error::PipelineError;
use crate::reducer::ReduceResult;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Renders one line per file, in the order given:
/// `<base name>,<rank to 2 decimals>,<longest word length>,<longest word count>`.
pub fn render(results: &[ReduceResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format!(
            "{},{:.2},{},{}\n",
            base_name(&result.file_path),
            result.rank,
            result.longest_word_length,
            result.longest_word_count
        ));
    }
    out
}

/// Writes the report in a single shot, so a failed run never leaves a
/// partial report behind.
pub fn write(path: &Path, results: &[ReduceResult]) -> Result<(), PipelineError> {
    fs::write(path, render(results)).map_err(|source| PipelineError::Report {
        path: path.to_path_buf(),
        source,
    })
}

fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
}
