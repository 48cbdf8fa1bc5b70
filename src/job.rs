use crate::error::PipelineError;
use std::fs;
use std::path::{Path, PathBuf};

/// Job description: fragment size in bytes plus the ordered list of input
/// files. Read once, immutable thereafter.
#[derive(Debug, Clone)]
pub struct JobDescription {
    pub fragment_size: usize,
    pub files: Vec<PathBuf>,
}

impl JobDescription {
    /// Loads the line-oriented job description file: fragment size, file
    /// count, then one file path per line.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            PipelineError::Configuration(format!(
                "cannot read job description '{}': {}",
                path.display(),
                err
            ))
        })?;
        Self::parse(&contents).map_err(|message| {
            PipelineError::Configuration(format!(
                "invalid job description '{}': {}",
                path.display(),
                message
            ))
        })
    }

    fn parse(contents: &str) -> Result<Self, String> {
        let mut lines = contents.lines();

        let fragment_size: usize = lines
            .next()
            .ok_or_else(|| "missing fragment size line".to_string())?
            .trim()
            .parse()
            .map_err(|_| "fragment size is not an integer".to_string())?;
        if fragment_size == 0 {
            return Err("fragment size must be positive".to_string());
        }

        let file_count: usize = lines
            .next()
            .ok_or_else(|| "missing file count line".to_string())?
            .trim()
            .parse()
            .map_err(|_| "file count is not an integer".to_string())?;

        let mut files = Vec::with_capacity(file_count);
        for index in 0..file_count {
            let line = lines
                .next()
                .ok_or_else(|| format!("expected {file_count} file paths, found {index}"))?;
            files.push(PathBuf::from(line.trim()));
        }

        Ok(Self {
            fragment_size,
            files,
        })
    }
}
