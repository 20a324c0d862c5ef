//! Document rewriter.
//!
//! Walks a document line by line, retimes every selected timing line and
//! copies everything else through untouched. Lines that fail to parse are
//! emitted unchanged and reported as diagnostics.

use super::classify::{classify, classify_for, LineKind};
use super::error::LineError;
use super::layers::LayerSet;
use super::parsers::{parse_ass_time, parse_srt_time, TIMING_SEPARATOR};
use super::retime::Retime;
use super::types::SubtitleFormat;

/// A line that was recognized as timing but left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line: usize,
    pub error: LineError,
}

/// Result of rewriting one document.
#[derive(Debug, Clone, Default)]
pub struct RewriteOutput {
    /// The rewritten document, same line count and terminators as the input.
    pub content: String,
    /// Number of timing lines whose timestamps were rewritten.
    pub lines_rewritten: usize,
    /// Per-line parse failures, in document order.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// Rewrite every timing line of a document.
///
/// With a known `format` only that family's timing lines are recognized;
/// with `None` a line is tried as SRT timing first, then as Dialogue.
pub fn rewrite_document(
    content: &str,
    format: Option<SubtitleFormat>,
    retime: &dyn Retime,
    layers: &LayerSet,
) -> RewriteOutput {
    let mut output = RewriteOutput {
        content: String::with_capacity(content.len()),
        ..Default::default()
    };

    for (index, raw) in content.split_inclusive('\n').enumerate() {
        let (body, terminator) = split_terminator(raw);

        match rewrite_line(body, format, retime, layers) {
            Ok(Some(rewritten)) => {
                output.content.push_str(&rewritten);
                output.content.push_str(terminator);
                output.lines_rewritten += 1;
            }
            Ok(None) => output.content.push_str(raw),
            Err(error) => {
                tracing::debug!("Line {} left unchanged: {}", index + 1, error);
                output.content.push_str(raw);
                output.diagnostics.push(LineDiagnostic {
                    line: index + 1,
                    error,
                });
            }
        }
    }

    output
}

/// Rewrite a single line without its terminator.
///
/// Returns `Ok(None)` for lines that pass through untouched: non-timing
/// lines and Dialogue lines on an excluded layer.
pub fn rewrite_line(
    line: &str,
    format: Option<SubtitleFormat>,
    retime: &dyn Retime,
    layers: &LayerSet,
) -> Result<Option<String>, LineError> {
    let kind = match format {
        Some(format) => classify_for(line, format)?,
        None => classify(line)?,
    };

    match kind {
        LineKind::Passthrough => Ok(None),
        LineKind::SrtTiming { start, end } => {
            let start = parse_srt_time(start)?;
            let end = parse_srt_time(end)?;
            let encoding = SubtitleFormat::Srt.encoding();
            Ok(Some(format!(
                "{}{}{}",
                retime.retime(start, encoding),
                TIMING_SEPARATOR,
                retime.retime(end, encoding)
            )))
        }
        LineKind::DialogueTiming(dialogue) => {
            if !layers.includes(dialogue.layer) {
                return Ok(None);
            }
            let start = parse_ass_time(dialogue.start())?;
            let end = parse_ass_time(dialogue.end())?;
            let encoding = SubtitleFormat::Ass.encoding();
            Ok(Some(dialogue.rebuild(
                &retime.retime(start, encoding),
                &retime.retime(end, encoding),
            )))
        }
    }
}

/// Split a line into its body and its `\n` / `\r\n` terminator (if any).
fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}
