// File: crates/trace-chart/src/reader.rs
// Summary: Line-oriented integer sample reader for simulator trace files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure reading a sample file. No recovery is attempted: the first bad
/// line (or io error) aborts the read and nothing is returned.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: not an integer: {text:?}")]
    Parse {
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        text: String,
    },
}

/// Read one signed integer per line from `path`, preserving line order.
///
/// A trailing `\r` (CRLF input) is stripped before parsing. A zero-line file
/// yields an empty vector; a blank or non-numeric line is a `Parse` error.
/// The file handle is scoped to this call and released on every exit path.
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<i64>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.strip_suffix('\r').unwrap_or(&line);
        let value = text.parse::<i64>().map_err(|_| ReadError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            text: text.to_string(),
        })?;
        samples.push(value);
    }
    Ok(samples)
}

/// The two series labels for an occupancy run. The simulator names its
/// outputs `<bench1>_<bench2>_<slice>_<set>_<overlap>`; the first two
/// components are the co-running benchmark names.
pub fn benchmark_labels(stem: &str) -> (String, String) {
    let mut parts = stem.split('_');
    let a = parts.next().unwrap_or("trace 1").to_string();
    let b = parts.next().unwrap_or("trace 2").to_string();
    let a = if a.is_empty() { "trace 1".to_string() } else { a };
    let b = if b.is_empty() { "trace 2".to_string() } else { b };
    (a, b)
}

/// Derive the two occupancy trace paths the simulator writes for one run:
/// `<stem>_1` and `<stem>_2`.
pub fn occupancy_pair(stem: impl AsRef<Path>) -> (PathBuf, PathBuf) {
    let stem = stem.as_ref();
    let with_suffix = |n: u8| -> PathBuf {
        let mut os = stem.as_os_str().to_os_string();
        os.push(format!("_{n}"));
        PathBuf::from(os)
    };
    (with_suffix(1), with_suffix(2))
}
