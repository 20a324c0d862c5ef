//! Subtitle timestamp engine.
//!
//! Rewrites the timestamps of SRT and ASS/SSA documents in place, leaving
//! every other byte of the document untouched.
//!
//! # Architecture
//!
//! - **Pure functions** in submodules for parsing, rendering and classifying
//! - **Pluggable strategies** for retime modes
//! - **Clean public API** via re-exports
//!
//! # Components
//!
//! - **types**: Core value types (formats, encodings, shift and frame-rate specs)
//! - **parsers**: Timestamp parsers (`H:MM:SS.CC`, `HH:MM:SS,mmm`)
//! - **writers**: Timestamp renderers
//! - **classify**: Timing-line recognition
//! - **layers**: Dialogue layer filter
//! - **retime**: Retime modes (shift, frame-rate)
//! - **rewrite**: Whole-document rewrite
//!
//! # Usage
//!
//! ```ignore
//! use subtime_core::subtitles::{
//!     create_retime, read_file, rewrite_document, write_file,
//!     LayerSet, RetimeMode, ShiftDirection, ShiftSpec, SubtitleFormat,
//! };
//!
//! let content = read_file("episode.ass")?;
//! let retime = create_retime(RetimeMode::Shift(ShiftSpec::new(1500, ShiftDirection::Delay)));
//! let layers = LayerSet::parse("0")?;
//!
//! let output = rewrite_document(&content, Some(SubtitleFormat::Ass), &*retime, &layers);
//! write_file("episode.ass", &output.content)?;
//! ```

mod classify;
mod error;
mod layers;
pub mod parsers;
pub mod retime;
mod rewrite;
mod types;
pub mod writers;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

// Re-export core types
pub use types::{
    FramerateSpec, ShiftDirection, ShiftSpec, SubtitleFormat, TimestampEncoding, TimestampValue,
    COMMON_FRAMERATES,
};

// Re-export errors
pub use error::{ConfigError, FormatError, LineError, SubtitleError};

// Re-export parsers and writers
pub use parsers::{parse_ass_time, parse_srt_time};
pub use writers::{format_ass_time, format_ass_time_rounded, format_srt_time, format_time};

// Re-export line handling
pub use classify::{classify, classify_for, DialogueLine, LineKind};
pub use layers::LayerSet;
pub use retime::{create_retime, FramerateRetime, Retime, RetimeMode, ShiftRetime};
pub use rewrite::{rewrite_document, rewrite_line, LineDiagnostic, RewriteOutput};

/// Read a subtitle document from disk.
///
/// Documents are expected to be UTF-8; anything else is a read error.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, SubtitleError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| SubtitleError::read(path, e))
}

/// Write a subtitle document atomically.
///
/// Content goes to a uniquely named temp file next to `path` first and is
/// then renamed over it, so a failed write never leaves a truncated document
/// behind. An existing file keeps its permissions, and a symlink is written
/// through to the file it points at.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<(), SubtitleError> {
    let path = path.as_ref();
    let target = resolve_symlink(path);

    let result = (|| -> io::Result<()> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    })();

    result.map_err(|e| SubtitleError::write(path, e))
}

fn resolve_symlink(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
