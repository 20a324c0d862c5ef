//! Line classification.
//!
//! Decides whether a line carries timestamps and, for ASS/SSA Dialogue lines,
//! which layer it belongs to. Classification is pure and per line.

use super::error::LineError;
use super::parsers::{parse_layer, split_dialogue, split_timing, DIALOGUE_PREFIX, TIMING_SEPARATOR};
use super::types::SubtitleFormat;

/// An ASS/SSA Dialogue line split into its fields.
///
/// Field 0 holds the layer descriptor, fields 1 and 2 the timestamps, and
/// everything after is payload that must survive byte-for-byte. Only
/// [`classify`] and [`classify_for`] build one, and they guarantee at least
/// three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine<'a> {
    /// Parsed layer number.
    pub layer: i64,
    fields: Vec<&'a str>,
}

impl<'a> DialogueLine<'a> {
    /// All fields (3 to 10), in order.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    pub fn start(&self) -> &'a str {
        self.fields[1]
    }

    pub fn end(&self) -> &'a str {
        self.fields[2]
    }

    /// Rejoin the fields with new start/end timestamps.
    pub fn rebuild(&self, start: &str, end: &str) -> String {
        let mut fields = self.fields.clone();
        fields[1] = start;
        fields[2] = end;
        fields.join(",")
    }
}

/// What a single line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `start --> end` SRT timing line.
    SrtTiming { start: &'a str, end: &'a str },
    /// `Dialogue: ` line with a parsed layer.
    DialogueTiming(DialogueLine<'a>),
    /// Anything else, copied verbatim.
    Passthrough,
}

/// Classify a line without knowing the document format.
///
/// A line containing ` --> ` is an SRT timing line; otherwise a line starting
/// with `Dialogue: ` is a Dialogue line; anything else passes through.
pub fn classify(line: &str) -> Result<LineKind<'_>, LineError> {
    if line.contains(TIMING_SEPARATOR) {
        return Ok(classify_srt(line));
    }
    if line.starts_with(DIALOGUE_PREFIX) {
        return classify_dialogue(line);
    }
    Ok(LineKind::Passthrough)
}

/// Classify a line of a document whose format is known.
///
/// ASS/SSA documents only have Dialogue timing lines and SRT documents only
/// have ` --> ` timing lines, so Dialogue text containing an arrow is never
/// mistaken for SRT timing.
pub fn classify_for(line: &str, format: SubtitleFormat) -> Result<LineKind<'_>, LineError> {
    match format {
        SubtitleFormat::Ass if line.starts_with(DIALOGUE_PREFIX) => classify_dialogue(line),
        SubtitleFormat::Srt if line.contains(TIMING_SEPARATOR) => Ok(classify_srt(line)),
        _ => Ok(LineKind::Passthrough),
    }
}

fn classify_srt(line: &str) -> LineKind<'_> {
    match split_timing(line) {
        Some((start, end)) => LineKind::SrtTiming { start, end },
        None => LineKind::Passthrough,
    }
}

fn classify_dialogue(line: &str) -> Result<LineKind<'_>, LineError> {
    let fields = split_dialogue(line);
    let layer =
        parse_layer(fields[0]).ok_or_else(|| LineError::LayerParse(fields[0].to_string()))?;
    if fields.len() < 3 {
        return Err(LineError::MalformedDialogue(fields.len()));
    }
    Ok(LineKind::DialogueTiming(DialogueLine { layer, fields }))
}
