// File: src/model/schedule.rs
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Structured result of parsing one scheduling request.
///
/// `end_time` is always strictly after `start_time`, `participants` keeps
/// first-seen order without duplicates and `title` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSchedule {
    pub title: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ParsedSchedule {
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}

/// What one extraction stage found, where it found it in the text it was
/// given, and the whitespace-normalized text left once those spans are cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedExtraction<T> {
    pub value: T,
    pub spans: Vec<Range<usize>>,
    pub residual_text: String,
}
