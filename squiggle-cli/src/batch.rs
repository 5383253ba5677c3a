//! Directory fan-out and outcome aggregation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::process::{process_file, FileOutcome};
use crate::Result;

/// Default worker count for directory processing.
pub const DEFAULT_JOBS: usize = 8;

/// Aggregate counts for one directory run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rendered: usize,
    pub missing_signal: usize,
    pub failed: usize,
    /// Read ids emitted by more than one input file, with the number of
    /// inputs that wrote them. Last writer wins on disk.
    pub collisions: Vec<(String, usize)>,
}

/// Enumerates `*.fast5` entries directly inside `dir`, non-recursively.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn collect_fast5_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "fast5") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Processes every file on a bounded worker pool and returns the per-file
/// outcomes. Blocks until the whole batch has completed; outcomes carry no
/// ordering guarantee beyond pairing each path with its result.
///
/// # Errors
/// Returns an error only if the worker pool itself cannot be built;
/// per-file failures are folded into the outcomes.
pub fn run_batch(
    files: &[PathBuf],
    out_dir: &Path,
    jobs: usize,
) -> Result<Vec<(PathBuf, FileOutcome)>> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    let outcomes = pool.install(|| {
        files
            .par_iter()
            .map(|path| (path.clone(), process_file(path, out_dir)))
            .collect()
    });
    Ok(outcomes)
}

/// Folds per-file outcomes into counts and detects output-name collisions.
#[must_use]
pub fn summarize(outcomes: &[(PathBuf, FileOutcome)]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    let mut emitted: HashMap<&str, usize> = HashMap::new();

    for (_, outcome) in outcomes {
        match outcome {
            FileOutcome::Rendered { read_id, .. } => {
                summary.rendered += 1;
                *emitted.entry(read_id.as_str()).or_insert(0) += 1;
            }
            FileOutcome::MissingSignal { .. } => summary.missing_signal += 1,
            FileOutcome::Failed(_) => summary.failed += 1,
        }
    }

    summary.collisions = emitted
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(read_id, count)| (read_id.to_string(), count))
        .collect();
    summary.collisions.sort();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_fast5;
    use crate::CliError;
    use std::io;
    use tempfile::TempDir;

    fn failed() -> FileOutcome {
        FileOutcome::Failed(CliError::Io(io::Error::other("boom")))
    }

    #[test]
    fn test_collect_filters_on_extension() {
        let dir = TempDir::new().unwrap();
        create_fast5(dir.path(), "a_ch1_read1.fast5", "1", Some("id-1"), None);
        create_fast5(dir.path(), "b_ch1_read2.fast5", "2", Some("id-2"), None);
        std::fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
        std::fs::write(dir.path().join("c_ch1_read3.pod5"), "skip me").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let files = collect_fast5_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a_ch1_read1.fast5", "b_ch1_read2.fast5"]);
    }

    #[test]
    fn test_collect_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        create_fast5(&nested, "a_ch1_read1.fast5", "1", Some("id-1"), None);

        assert!(collect_fast5_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_batch_counts_every_outcome() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        create_fast5(
            input.path(),
            "a_ch1_read1.fast5",
            "1",
            Some("id-1"),
            Some(&[1, 2, 3]),
        );
        create_fast5(input.path(), "b_ch1_read2.fast5", "2", Some("id-2"), None);
        // No read_id group at all: fatal for this item only.
        create_fast5(input.path(), "c_ch1_read3.fast5", "3", None, Some(&[4, 5]));

        let files = collect_fast5_files(input.path()).unwrap();
        assert_eq!(files.len(), 3);

        let outcomes = run_batch(&files, output.path(), 2).unwrap();
        assert_eq!(outcomes.len(), 3);

        let summary = summarize(&outcomes);
        assert_eq!(summary.rendered, 1);
        assert_eq!(summary.missing_signal, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.collisions.is_empty());

        assert!(output.path().join("id-1.raw.png").exists());
    }

    #[test]
    fn test_batch_detects_output_collisions() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        // Two different inputs decode to the same read id.
        create_fast5(
            input.path(),
            "a_ch1_read1.fast5",
            "1",
            Some("dup-id"),
            Some(&[1, 2]),
        );
        create_fast5(
            input.path(),
            "b_ch2_read1.fast5",
            "1",
            Some("dup-id"),
            Some(&[3, 4]),
        );

        let files = collect_fast5_files(input.path()).unwrap();
        let outcomes = run_batch(&files, output.path(), 2).unwrap();
        let summary = summarize(&outcomes);

        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.collisions, vec![("dup-id".to_string(), 2)]);
        assert!(output.path().join("dup-id.raw.png").exists());
    }

    #[test]
    fn test_summarize_pure_counts() {
        let outcomes = vec![
            (
                PathBuf::from("a.fast5"),
                FileOutcome::Rendered {
                    read_id: "x".to_string(),
                    output: PathBuf::from("x.raw.png"),
                },
            ),
            (
                PathBuf::from("b.fast5"),
                FileOutcome::MissingSignal {
                    read_id: "y".to_string(),
                },
            ),
            (PathBuf::from("c.fast5"), failed()),
            (PathBuf::from("d.fast5"), failed()),
        ];

        let summary = summarize(&outcomes);
        assert_eq!(summary.rendered, 1);
        assert_eq!(summary.missing_signal, 1);
        assert_eq!(summary.failed, 2);
        assert!(summary.collisions.is_empty());
    }
}
