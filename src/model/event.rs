// File: src/model/event.rs
use crate::model::ParsedSchedule;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed calendar entry, as handed to the event book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    pub color: String,
    #[serde(default)]
    pub all_day: bool,
}

impl Event {
    /// Wraps a parsed schedule with a fresh identifier and the caller's color.
    pub fn from_schedule(schedule: ParsedSchedule, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: schedule.title,
            description: None,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            location: schedule.location,
            participants: schedule.participants,
            color: color.into(),
            all_day: false,
        }
    }

    /// Calendar day the event starts on, in its own UTC offset.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    // Half-open intervals: an event ending at 11:00 does not overlap one starting at 11:00.
    pub fn overlaps(&self, other: &Event) -> bool {
        let (new_start, new_end) = (self.start_time, self.end_time);
        let (existing_start, existing_end) = (other.start_time, other.end_time);

        (new_start >= existing_start && new_start < existing_end)
            || (new_end > existing_start && new_end <= existing_end)
            || (new_start <= existing_start && new_end >= existing_end)
    }
}
