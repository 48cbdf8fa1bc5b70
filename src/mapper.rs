use crate::error::PipelineError;
use crate::separator::{is_separator, tokenize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::PathBuf;

/// One unit of map work: a raw byte range of one input file. Created by the
/// partitioner, consumed exactly once by a worker.
#[derive(Debug, Clone)]
pub struct MapTask {
    pub file_path: PathBuf,
    pub byte_offset: u64,
    pub requested_len: usize,
}

/// Word statistics for one boundary-corrected fragment.
///
/// Every histogram count is positive, and when `longest_words` is non-empty
/// its entries all have the maximal length seen in this fragment.
#[derive(Debug, Clone)]
pub struct MapResult {
    pub file_path: PathBuf,
    pub longest_words: Vec<String>,
    pub histogram: HashMap<usize, u64>,
}

/// Reads the task's fragment, corrects both ends to word boundaries and
/// tokenizes it.
///
/// Each call opens its own file handle and seeks independently, so
/// concurrent tasks over the same file never share file-position state.
pub fn run_map_task(task: &MapTask) -> Result<MapResult, PipelineError> {
    let file = File::open(&task.file_path).map_err(|err| io_error(task, err))?;
    let mut reader = BufReader::new(file);

    // Start correction: a fragment that does not begin the file starts one
    // byte early and skips forward past the first separator. The word
    // straddling the previous raw boundary stays with the previous fragment,
    // and every byte consumed past the raw offset shortens this fragment.
    let mut remaining = task.requested_len as i64;
    if task.byte_offset > 0 {
        reader
            .seek(SeekFrom::Start(task.byte_offset - 1))
            .map_err(|err| io_error(task, err))?;
        if let Some(mut byte) = read_byte(&mut reader).map_err(|err| io_error(task, err))? {
            while !is_separator(byte) {
                match read_byte(&mut reader).map_err(|err| io_error(task, err))? {
                    Some(next) => {
                        byte = next;
                        remaining -= 1;
                    }
                    None => break,
                }
            }
        }
    }

    // A straddling word can consume the whole fragment; the fragment is then
    // empty, not an error.
    let mut fragment = Vec::new();
    if remaining > 0 {
        fragment = vec![0u8; remaining as usize];
        let filled = read_up_to(&mut reader, &mut fragment).map_err(|err| io_error(task, err))?;
        fragment.truncate(filled);

        // End correction: extend past the raw end until a separator or EOF
        // so the last word is never truncated.
        while fragment.last().is_some_and(|byte| !is_separator(*byte)) {
            match read_byte(&mut reader).map_err(|err| io_error(task, err))? {
                Some(next) => fragment.push(next),
                None => break,
            }
        }
    }

    Ok(fragment_stats(task.file_path.clone(), &fragment))
}

fn fragment_stats(file_path: PathBuf, fragment: &[u8]) -> MapResult {
    let words = tokenize(fragment);

    let mut histogram: HashMap<usize, u64> = HashMap::new();
    for word in &words {
        *histogram.entry(word.len()).or_insert(0) += 1;
    }

    let longest_length = words.iter().map(|word| word.len()).max().unwrap_or(0);
    let longest_words = words
        .into_iter()
        .filter(|word| word.len() == longest_length)
        .collect();

    MapResult {
        file_path,
        longest_words,
        histogram,
    }
}

fn read_byte(reader: &mut impl Read) -> std::io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match reader.read(&mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(buf[0])),
    }
}

/// Fills as much of `buf` as the file has left; returns the byte count.
fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let count = reader.read(&mut buf[filled..])?;
        if count == 0 {
            break;
        }
        filled += count;
    }
    Ok(filled)
}

fn io_error(task: &MapTask, source: std::io::Error) -> PipelineError {
    PipelineError::MapTask {
        file_path: task.file_path.clone(),
        byte_offset: task.byte_offset,
        source,
    }
}
