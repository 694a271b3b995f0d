// File: src/parser/temporal.rs
use crate::error::{ParseError, ParseResult};
use chrono::{DateTime, Duration, FixedOffset};
use std::ops::Range;

/// One date/time expression found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalMatch {
    /// Byte range of the expression in the scanned text.
    pub span: Range<usize>,
    pub text: String,
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
}

/// Finds date/time expressions in free text.
///
/// Implementations return every expression they understand, in the order
/// they appear, resolved against `reference` for relative phrases like
/// "tomorrow" or "next Monday".
pub trait TemporalRecognizer: Send + Sync {
    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Vec<TemporalMatch>;
}

/// Start and end of the event, plus where in the text they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTime {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub span: Range<usize>,
    pub explicit_end: bool,
}

/// Shortest event `resolve_time` will produce.
pub const MIN_DURATION_MINS: i64 = 1;

/// Picks the first expression in the text. An explicit end is kept as is,
/// otherwise the event lasts `default_duration`, but never less than
/// `MIN_DURATION_MINS`.
pub fn resolve_time(
    recognizer: &dyn TemporalRecognizer,
    text: &str,
    reference: DateTime<FixedOffset>,
    default_duration: Duration,
) -> ParseResult<ResolvedTime> {
    let matches = recognizer.recognize(text, reference);
    let first = matches
        .into_iter()
        .next()
        .ok_or(ParseError::NoTemporalExpression)?;

    let (end, explicit_end) = match first.end {
        Some(end) if end > first.start => (end, true),
        _ => {
            let duration = default_duration.max(Duration::minutes(MIN_DURATION_MINS));
            let end = first
                .start
                .checked_add_signed(duration)
                .ok_or(ParseError::NoTemporalExpression)?;
            (end, false)
        }
    };

    Ok(ResolvedTime {
        start: first.start,
        end,
        span: first.span,
        explicit_end,
    })
}
