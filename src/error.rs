// File: src/error.rs
// Failure modes of the schedule pipeline.
use thiserror::Error;

/// Reasons a piece of text could not be turned into a schedule.
///
/// Only the temporal stage can fail. Participant, location and title
/// extraction always produce a value, so any error here aborts the whole
/// parse and no partial schedule is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no date or time the recognizer understood.
    #[error("No date or time information found in the input")]
    NoTemporalExpression,

    /// The input was empty or only whitespace.
    #[error("Input is empty")]
    EmptyInput,
}

impl ParseError {
    /// Plain-language retry prompt suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ParseError::NoTemporalExpression => {
                "Unable to understand. Try a more specific phrase like \"Schedule a call with Jack on Thursday at 3pm\"."
            }
            ParseError::EmptyInput => "Please enter a scheduling request.",
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
