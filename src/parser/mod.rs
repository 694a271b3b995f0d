// File: src/parser/mod.rs
//! Natural-language schedule parsing.
//!
//! The pipeline runs four stages over one request:
//!
//! 1. temporal resolution on the raw text (the only stage that can fail),
//! 2. participant extraction on the raw text,
//! 3. location extraction on the text left once participant phrases and the
//!    chosen date/time phrase are cut out,
//! 4. title synthesis on the raw text plus the participants.
//!
//! Nothing is kept between calls; a `ScheduleParser` can be shared freely.
pub mod location;
pub mod participants;
pub mod ranks;
pub mod recognizer;
pub mod residual;
pub mod temporal;
pub mod title;
pub mod words;

pub use location::extract_location;
pub use participants::extract_participants;
pub use recognizer::EnglishRecognizer;
pub use temporal::{ResolvedTime, TemporalMatch, TemporalRecognizer, resolve_time};
pub use title::synthesize_title;

use crate::error::{ParseError, ParseResult};
use crate::model::ParsedSchedule;
use chrono::{DateTime, Duration, FixedOffset, Local};
use residual::strip_spans;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Length given to events whose text names no end time. Anything
    /// shorter than a minute is treated as one minute.
    pub default_duration: Duration,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            default_duration: Duration::hours(1),
        }
    }
}

impl ParserOptions {
    /// Durations below one minute are raised to one minute so that an
    /// event always ends after it starts.
    pub fn with_default_duration_mins(mins: u32) -> Self {
        Self {
            default_duration: Duration::minutes(i64::from(mins.max(1))),
        }
    }
}

pub struct ScheduleParser {
    recognizer: Box<dyn TemporalRecognizer>,
    options: ParserOptions,
}

impl Default for ScheduleParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl ScheduleParser {
    pub fn new(options: ParserOptions) -> Self {
        Self::with_recognizer(EnglishRecognizer::new(), options)
    }

    pub fn with_recognizer<R: TemporalRecognizer + 'static>(
        recognizer: R,
        options: ParserOptions,
    ) -> Self {
        Self {
            recognizer: Box::new(recognizer),
            options,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `text`, resolving relative dates against `reference`.
    pub fn parse(&self, text: &str, reference: DateTime<FixedOffset>) -> ParseResult<ParsedSchedule> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let time = resolve_time(
            self.recognizer.as_ref(),
            text,
            reference,
            self.options.default_duration,
        )?;

        let participants = extract_participants(text);

        let mut cut = participants.spans.clone();
        cut.push(time.span.clone());
        let location = extract_location(&strip_spans(text, &cut));

        let title = synthesize_title(text, &participants.value);

        log::debug!(
            "Parsed '{}' -> '{}' {} .. {} ({} participants, location {:?})",
            text,
            title,
            time.start,
            time.end,
            participants.value.len(),
            location.value
        );

        Ok(ParsedSchedule {
            title,
            start_time: time.start,
            end_time: time.end,
            participants: participants.value,
            location: location.value,
        })
    }
}

/// Parses `text` against the current wall-clock time.
pub fn parse(text: &str) -> ParseResult<ParsedSchedule> {
    parse_at(text, Local::now().fixed_offset())
}

/// Parses `text` against a fixed reference instant.
pub fn parse_at(text: &str, reference: DateTime<FixedOffset>) -> ParseResult<ParsedSchedule> {
    ScheduleParser::default().parse(text, reference)
}
