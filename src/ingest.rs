//! Source discovery and line ingestion
//!
//! Two aggregation strategies feed the sort stage: a sequential loop that
//! preserves cross-source order, and a worker-per-source threaded variant
//! where each worker reads its file in isolation and hands the finished
//! vector to the collector over a channel. Cross-source order is unspecified
//! under the threaded strategy; every line still appears exactly once.

use crossbeam_channel::bounded;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::thread;

use crate::error::{SortError, SortResult};

/// Enumerate the non-directory entries of `dir`, sorted by path so the
/// sequential strategy has a deterministic source order
pub fn discover_sources(dir: &Path) -> SortResult<Vec<PathBuf>> {
    let metadata = std::fs::metadata(dir)
        .map_err(|_| SortError::not_found(&dir.display().to_string()))?;
    if !metadata.is_dir() {
        return Err(SortError::not_a_directory(&dir.display().to_string()));
    }

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            sources.push(entry.path());
        }
    }
    sources.sort();
    Ok(sources)
}

/// Read every line of one source, failing soft: an unreadable source is
/// reported and contributes zero records.
///
/// Lines are split on `\n` with a trailing `\r` stripped (CRLF input is
/// tolerated); no synthetic characters are ever appended.
pub fn read_lines(path: &Path) -> Vec<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("source unavailable, skipping {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        match line {
            Ok(mut line) => {
                if line.ends_with('\r') {
                    line.pop();
                }
                records.push(line);
            }
            Err(err) => {
                warn!("read error, truncating {}: {}", path.display(), err);
                break;
            }
        }
    }
    debug!("{}: {} lines", path.display(), records.len());
    records
}

/// Read each source fully, in order, appending into one collection
pub fn aggregate_sequential(sources: &[PathBuf]) -> Vec<String> {
    let mut merged = Vec::new();
    for source in sources {
        merged.extend(read_lines(source));
    }
    merged
}

/// Read all sources concurrently, one worker thread per source.
///
/// Workers share nothing while reading; each sends its completed vector
/// through the channel and the collector drains until every sender has
/// dropped. Sorting therefore never starts on a partially aggregated
/// collection.
pub fn aggregate_threaded(sources: &[PathBuf]) -> Vec<String> {
    let (sender, receiver) = bounded::<Vec<String>>(sources.len().max(1));

    let mut workers = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.clone();
        let sender = sender.clone();
        workers.push(thread::spawn(move || {
            let _ = sender.send(read_lines(&source));
        }));
    }
    drop(sender);

    let mut merged = Vec::new();
    while let Ok(records) = receiver.recv() {
        merged.extend(records);
    }

    for worker in workers {
        if worker.join().is_err() {
            warn!("ingestion worker panicked; its source was dropped");
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_discover_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path(), "b.txt", "x\n");
        write_source(dir.path(), "a.txt", "y\n");
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let sources = discover_sources(dir.path()).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_discover_rejects_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_source(dir.path(), "plain.txt", "x\n");
        assert!(matches!(
            discover_sources(&file),
            Err(SortError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_discover_missing_directory() {
        assert!(matches!(
            discover_sources(Path::new("/nonexistent/really/not/here")),
            Err(SortError::NotFound { .. })
        ));
    }

    #[test]
    fn test_read_lines_strips_terminators_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(dir.path(), "crlf.txt", "one\r\ntwo\nthree");
        // no trailing newline on the last line and no synthetic marker added
        assert_eq!(read_lines(&path), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_read_lines_fails_soft() {
        assert!(read_lines(Path::new("/nonexistent/source.txt")).is_empty());
    }

    #[test]
    fn test_aggregation_completeness_across_strategies() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_source(dir.path(), "a.txt", "banana\nApple\ncherry\n");
        let b = write_source(dir.path(), "b.txt", "apple\nBanana\n");
        let c = write_source(dir.path(), "c.txt", "");
        let sources = vec![a, b, c];

        let sequential = aggregate_sequential(&sources);
        assert_eq!(
            sequential,
            vec!["banana", "Apple", "cherry", "apple", "Banana"]
        );

        let mut threaded = aggregate_threaded(&sources);
        assert_eq!(threaded.len(), sequential.len());
        let mut expected = sequential.clone();
        threaded.sort();
        expected.sort();
        assert_eq!(threaded, expected);
    }

    #[test]
    fn test_threaded_aggregation_tolerates_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_source(dir.path(), "a.txt", "alpha\nbeta\n");
        let gone = dir.path().join("missing.txt");

        let merged = aggregate_threaded(&[a, gone]);
        assert_eq!(merged.len(), 2);
    }
}
