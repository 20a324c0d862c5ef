//! subtime core - subtitle timestamp engine
//!
//! Shifts and frame-rate retimes the timestamps of SubRip (.srt) and
//! SubStation Alpha (.ass/.ssa) documents line by line, leaving every
//! other byte of the document untouched.
//!
//! This crate has zero UI dependencies. The `subtime` binary is one front end;
//! a GUI could drive the same `batch` API.

pub mod batch;
pub mod config;
pub mod logging;
pub mod subtitles;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
