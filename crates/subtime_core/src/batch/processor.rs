//! Parallel batch processor.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rayon::prelude::*;
use serde::Serialize;

use super::{retime_file, BatchJob, FileReport};
use crate::subtitles::SubtitleError;

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// The file, as given.
    pub file: String,
    /// Why it failed.
    pub reason: String,
}

/// Aggregate result of a batch.
///
/// This is the whole result surface of a batch run: presentation is left to
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Failures in input order.
    pub failures: Vec<FileFailure>,
    /// Timing lines left unchanged across all successful files.
    pub diagnostics: usize,
}

impl BatchSummary {
    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn from_outcomes(outcomes: Vec<(usize, PathBuf, Result<FileReport, SubtitleError>)>) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Default::default()
        };

        for (_, path, outcome) in outcomes {
            match outcome {
                Ok(report) => {
                    summary.succeeded += 1;
                    summary.diagnostics += report.diagnostics.len();
                }
                Err(e) => {
                    summary.failed += 1;
                    summary.failures.push(FileFailure {
                        file: path.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        summary
    }
}

/// Runs a [`BatchJob`] over many files, one file per work item.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchProcessor {
    workers: usize,
}

impl BatchProcessor {
    /// Create a processor with `workers` threads (0 = one per CPU).
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Process every file and summarize.
    ///
    /// A file listed more than once (by any spelling of its path) is
    /// processed once, at its first position. Returns only after every file
    /// has been handled.
    pub fn run(&self, paths: &[PathBuf], job: &BatchJob) -> BatchSummary {
        let paths = unique_paths(paths);
        tracing::info!(
            "Processing {} files: {} ({} layers)",
            paths.len(),
            job.mode.name(),
            job.layers
        );

        let outcomes = Mutex::new(Vec::with_capacity(paths.len()));
        let work = || {
            paths.par_iter().enumerate().for_each(|(index, path)| {
                let outcome = retime_file(path, job);
                if let Err(e) = &outcome {
                    tracing::warn!("Failed: {}", e);
                }
                outcomes.lock().push((index, path.to_path_buf(), outcome));
            });
        };

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|idx| format!("subtime-{}", idx))
            .build()
        {
            Ok(pool) => pool.install(work),
            Err(e) => {
                tracing::warn!("Could not build worker pool ({}), using global pool", e);
                work();
            }
        }

        let mut outcomes = outcomes.into_inner();
        outcomes.sort_by_key(|(index, _, _)| *index);
        let summary = BatchSummary::from_outcomes(outcomes);

        tracing::info!(
            "Processed {} files: {} succeeded, {} failed",
            summary.total,
            summary.succeeded,
            summary.failed
        );
        summary
    }
}

/// Drop repeated files, keeping first occurrences in order.
fn unique_paths(paths: &[PathBuf]) -> Vec<&Path> {
    let mut seen = HashSet::new();
    paths
        .iter()
        .filter(|path| {
            let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            let first = seen.insert(key);
            if !first {
                tracing::debug!("Skipping repeated {}", path.display());
            }
            first
        })
        .map(PathBuf::as_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::scan_directory;
    use crate::subtitles::{LayerSet, RetimeMode, ShiftDirection, ShiftSpec};
    use std::fs;
    use tempfile::tempdir;

    fn delay_job(delta_ms: i64) -> BatchJob {
        BatchJob::new(
            RetimeMode::Shift(ShiftSpec::new(delta_ms, ShiftDirection::Delay)),
            LayerSet::All,
        )
    }

    #[test]
    fn empty_batch_is_all_zero() {
        let summary = BatchProcessor::new(2).run(&[], &delay_job(1000));
        assert_eq!(summary, BatchSummary::default());
        assert!(summary.is_success());
    }

    #[test]
    fn processes_directory() {
        let dir = tempdir().unwrap();
        for i in 0..8 {
            fs::write(
                dir.path().join(format!("{:02}.srt", i)),
                "1\n00:00:01,000 --> 00:00:02,000\nHi\n",
            )
            .unwrap();
        }
        fs::write(
            dir.path().join("show.ass"),
            "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,Hi\n",
        )
        .unwrap();

        let files = scan_directory(dir.path()).unwrap();
        let summary = BatchProcessor::new(4).run(&files, &delay_job(1000));

        assert_eq!(summary.total, 9);
        assert_eq!(summary.succeeded, 9);
        assert!(summary.is_success());
        assert_eq!(
            fs::read_to_string(dir.path().join("03.srt")).unwrap(),
            "1\n00:00:02,000 --> 00:00:03,000\nHi\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("show.ass")).unwrap(),
            "Dialogue: 0,0:00:02.00,0:00:03.00,Default,,0,0,0,,Hi\n"
        );
    }

    #[test]
    fn failures_do_not_stop_batch() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.srt");
        fs::write(&good, "1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();
        let missing = dir.path().join("missing.srt");
        let bad_line = dir.path().join("bad.srt");
        fs::write(&bad_line, "1\n00:00:01.000 --> 00:00:02,000\nHi\n").unwrap();
        let unknown = dir.path().join("notes.txt");
        fs::write(&unknown, "").unwrap();

        let paths = vec![missing.clone(), good.clone(), unknown.clone(), bad_line];
        let summary = BatchProcessor::new(0).run(&paths, &delay_job(500));

        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 2);
        assert!(!summary.is_success());
        assert_eq!(summary.diagnostics, 1);

        // Input order
        assert_eq!(summary.failures[0].file, missing.display().to_string());
        assert!(summary.failures[0].reason.starts_with("Failed to read file"));
        assert_eq!(summary.failures[1].file, unknown.display().to_string());
        assert!(summary.failures[1].reason.contains("Unknown subtitle format"));

        assert_eq!(
            fs::read_to_string(&good).unwrap(),
            "1\n00:00:01,500 --> 00:00:02,500\nHi\n"
        );
    }

    #[test]
    fn repeated_paths_processed_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.srt");
        fs::write(&path, "1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();
        let other = dir.path().join("b.srt");
        fs::write(&other, "1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();
        let dotted = dir.path().join(".").join("a.srt");

        let paths = vec![
            path.clone(),
            path.clone(),
            other.clone(),
            path.clone(),
            dotted,
        ];
        for _ in 0..20 {
            fs::write(&path, "1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();
            fs::write(&other, "1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();

            let summary = BatchProcessor::new(4).run(&paths, &delay_job(1000));

            assert_eq!(summary.total, 2);
            assert_eq!(summary.succeeded, 2);
            assert!(summary.is_success(), "{:?}", summary.failures);
            assert_eq!(
                fs::read_to_string(&path).unwrap(),
                "1\n00:00:02,000 --> 00:00:03,000\nHi\n"
            );
        }
    }

    #[test]
    fn repeated_missing_path_fails_once() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.srt");
        let summary =
            BatchProcessor::new(2).run(&[missing.clone(), missing.clone()], &delay_job(1000));
        assert_eq!(summary.total, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failures[0].file, missing.display().to_string());
    }

    #[test]
    fn summary_serializes() {
        let summary = BatchSummary {
            total: 2,
            succeeded: 1,
            failed: 1,
            failures: vec![FileFailure {
                file: "a.srt".to_string(),
                reason: "boom".to_string(),
            }],
            diagnostics: 0,
        };
        let json = summary.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["failures"][0]["file"], "a.srt");
        assert_eq!(value["failures"][0]["reason"], "boom");
    }
}
