//! Batch retiming of subtitle files.
//!
//! A batch is a list of files plus one [`BatchJob`]. Each file is read,
//! rewritten and written back on its own; a file that cannot be read or
//! written fails alone and the batch moves on.
//!
//! # Example
//!
//! ```no_run
//! use subtime_core::batch::{scan_directory, BatchJob, BatchProcessor};
//! use subtime_core::subtitles::{LayerSet, RetimeMode, ShiftDirection, ShiftSpec};
//!
//! let files = scan_directory("subs").unwrap();
//! let job = BatchJob::new(
//!     RetimeMode::Shift(ShiftSpec::new(1500, ShiftDirection::Delay)),
//!     LayerSet::All,
//! );
//!
//! let summary = BatchProcessor::new(0).run(&files, &job);
//! println!("{} succeeded, {} failed", summary.succeeded, summary.failed);
//! ```

mod processor;

pub use processor::{BatchProcessor, BatchSummary, FileFailure};

use std::fs;
use std::path::{Path, PathBuf};

use crate::subtitles::{
    create_retime, read_file, rewrite_document, write_file, LayerSet, LineDiagnostic, RetimeMode,
    SubtitleError, SubtitleFormat,
};

/// File extensions picked up by a directory scan.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["ass", "ssa", "srt"];

/// One retime operation applied to every file of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    pub mode: RetimeMode,
    pub layers: LayerSet,
}

impl BatchJob {
    pub fn new(mode: RetimeMode, layers: LayerSet) -> Self {
        Self { mode, layers }
    }
}

/// Outcome of a successfully processed file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The input file.
    pub path: PathBuf,
    /// Where the rewritten document was written.
    pub output: PathBuf,
    /// Number of timing lines rewritten.
    pub lines_rewritten: usize,
    /// Lines left unchanged because they failed to parse.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// List subtitle files in a directory.
///
/// Non-recursive. Returns regular files with an `ass`, `ssa` or `srt`
/// extension (any case), sorted by path.
pub fn scan_directory(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, SubtitleError> {
    scan_directory_with(dir, &DEFAULT_EXTENSIONS)
}

/// List files in a directory whose extension is in `extensions`.
pub fn scan_directory_with<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    extensions: &[S],
) -> Result<Vec<PathBuf>, SubtitleError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| SubtitleError::read(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SubtitleError::read(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        if extensions
            .iter()
            .any(|want| want.as_ref().eq_ignore_ascii_case(ext))
        {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!("Found {} subtitle files in {}", files.len(), dir.display());
    Ok(files)
}

/// Where a job writes its result for `path`.
///
/// Shifts overwrite the source. Frame-rate conversions write
/// `<file name>.<target>-converted.<ext>` next to it, e.g.
/// `movie.srt.25.0-converted.srt`.
pub fn output_path(path: &Path, mode: &RetimeMode) -> PathBuf {
    match mode {
        RetimeMode::Shift(_) => path.to_path_buf(),
        RetimeMode::Framerate(spec) => {
            let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
            name.push(format!(".{}-converted", spec.target_label()));
            if let Some(ext) = path.extension() {
                name.push(".");
                name.push(ext);
            }
            path.with_file_name(name)
        }
    }
}

/// Retime a single file.
///
/// Unparsable timing lines are kept as-is and reported in the returned
/// diagnostics; only I/O problems and unknown formats fail the file.
pub fn retime_file(path: &Path, job: &BatchJob) -> Result<FileReport, SubtitleError> {
    let format = SubtitleFormat::from_extension(path)
        .ok_or_else(|| SubtitleError::UnknownFormat(path.to_path_buf()))?;

    let content = read_file(path)?;
    let retime = create_retime(job.mode);
    let output = rewrite_document(&content, Some(format), &*retime, &job.layers);

    for diagnostic in &output.diagnostics {
        tracing::warn!(
            "{}:{}: {}",
            path.display(),
            diagnostic.line,
            diagnostic.error
        );
    }

    let destination = output_path(path, &job.mode);
    write_file(&destination, &output.content)?;

    tracing::info!(
        "{}: {} ({} lines rewritten) -> {}",
        path.display(),
        retime.describe(),
        output.lines_rewritten,
        destination.display()
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        output: destination,
        lines_rewritten: output.lines_rewritten,
        diagnostics: output.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitles::{FramerateSpec, LineError, ShiftDirection, ShiftSpec};
    use tempfile::tempdir;

    fn shift_job(delta_ms: i64, direction: ShiftDirection) -> BatchJob {
        BatchJob::new(
            RetimeMode::Shift(ShiftSpec::new(delta_ms, direction)),
            LayerSet::All,
        )
    }

    #[test]
    fn scan_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.srt", "a.ASS", "c.ssa", "notes.txt", "video.mkv"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.srt")).unwrap();

        let files = scan_directory(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ASS", "b.srt", "c.ssa"]);
    }

    #[test]
    fn scan_missing_dir_fails() {
        let err = scan_directory("/nonexistent/subtitle/dir").unwrap_err();
        assert!(matches!(err, SubtitleError::ReadError { .. }));
    }

    #[test]
    fn output_path_by_mode() {
        let path = Path::new("/subs/movie.srt");
        let shift = RetimeMode::Shift(ShiftSpec::new(100, ShiftDirection::Delay));
        assert_eq!(output_path(path, &shift), path);

        let framerate = RetimeMode::Framerate(FramerateSpec::new(24.0, 25.0).unwrap());
        assert_eq!(
            output_path(path, &framerate),
            Path::new("/subs/movie.srt.25.0-converted.srt")
        );

        let framerate = RetimeMode::Framerate(FramerateSpec::new(25.0, 23.976).unwrap());
        assert_eq!(
            output_path(Path::new("ep01.ass"), &framerate),
            Path::new("ep01.ass.23.976-converted.ass")
        );
    }

    #[test]
    fn retime_file_overwrites_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("movie.srt");
        fs::write(&path, "1\n00:00:05,000 --> 00:00:07,000\nHello\n").unwrap();

        let report = retime_file(&path, &shift_job(1500, ShiftDirection::Delay)).unwrap();
        assert_eq!(report.output, path);
        assert_eq!(report.lines_rewritten, 1);
        assert!(report.diagnostics.is_empty());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1\n00:00:06,500 --> 00:00:08,500\nHello\n"
        );
    }

    #[test]
    fn retime_file_framerate_keeps_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ep.ass");
        let source = "Dialogue: 0,0:00:10.00,0:00:20.00,Default,,0,0,0,,x\n";
        fs::write(&path, source).unwrap();

        let job = BatchJob::new(
            RetimeMode::Framerate(FramerateSpec::new(24.0, 25.0).unwrap()),
            LayerSet::All,
        );
        let report = retime_file(&path, &job).unwrap();

        assert_eq!(report.output, dir.path().join("ep.ass.25.0-converted.ass"));
        assert_eq!(fs::read_to_string(&path).unwrap(), source);
        assert_eq!(
            fs::read_to_string(&report.output).unwrap(),
            "Dialogue: 0,0:00:09.60,0:00:19.20,Default,,0,0,0,,x\n"
        );
    }

    #[test]
    fn retime_file_reports_bad_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.srt");
        fs::write(&path, "1\n00:00:xx,000 --> 00:00:07,000\nHello\n").unwrap();

        let report = retime_file(&path, &shift_job(1000, ShiftDirection::Delay)).unwrap();
        assert_eq!(report.lines_rewritten, 0);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].line, 2);
        assert!(matches!(report.diagnostics[0].error, LineError::TimeParse(_)));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1\n00:00:xx,000 --> 00:00:07,000\nHello\n"
        );
    }

    #[test]
    fn retime_file_unknown_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "00:00:01,000 --> 00:00:02,000\n").unwrap();

        let err = retime_file(&path, &shift_job(1000, ShiftDirection::Delay)).unwrap_err();
        assert!(matches!(err, SubtitleError::UnknownFormat(_)));
    }
}
