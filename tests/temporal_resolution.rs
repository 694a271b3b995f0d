// File: tests/temporal_resolution.rs
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone};
use schedwiz::parser::{EnglishRecognizer, TemporalRecognizer};
use schedwiz::{ParseError, ParserOptions, ScheduleParser, parse_at};

// Wednesday, 2026-10-14 10:00 UTC
fn reference() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-14T10:00:00+00:00").unwrap()
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

fn start_of(text: &str) -> DateTime<FixedOffset> {
    parse_at(text, reference()).unwrap().start_time
}

#[test]
fn test_relative_days() {
    assert_eq!(start_of("Dentist appointment today at 4pm"), utc(2026, 10, 14, 16, 0));
    assert_eq!(start_of("Dinner tonight"), utc(2026, 10, 14, 22, 0));
    // No clock time: keeps the reference time of day
    assert_eq!(start_of("Standup tomorrow"), utc(2026, 10, 15, 10, 0));
    assert_eq!(start_of("Breakfast tomorrow morning"), utc(2026, 10, 15, 6, 0));
    assert_eq!(start_of("Call this afternoon"), utc(2026, 10, 14, 15, 0));
}

#[test]
fn test_weekdays() {
    // Date-only: midday
    assert_eq!(start_of("Review on Friday"), utc(2026, 10, 16, 12, 0));
    // A bare weekday never means today
    assert_eq!(start_of("Sync on Wednesday at 9am"), utc(2026, 10, 21, 9, 0));
    assert_eq!(start_of("Sync this Wednesday at 9am"), utc(2026, 10, 14, 9, 0));
    assert_eq!(start_of("Meeting next Mon at 11:15"), utc(2026, 10, 19, 11, 15));
    assert_eq!(start_of("Lunch on saturday at 1pm"), utc(2026, 10, 17, 13, 0));
}

#[test]
fn test_calendar_dates() {
    assert_eq!(start_of("Workshop on March 3rd at 10am"), utc(2027, 3, 3, 10, 0));
    assert_eq!(start_of("Party on the 20th of October at 8pm"), utc(2026, 10, 20, 20, 0));
    assert_eq!(start_of("Review Dec 1 2027 at 9am"), utc(2027, 12, 1, 9, 0));
    assert_eq!(start_of("Interview 2026-11-02 at 13:30"), utc(2026, 11, 2, 13, 30));
    assert_eq!(start_of("Call 11/5 at 10am"), utc(2026, 11, 5, 10, 0));
    // Already past this year: next year
    assert_eq!(start_of("Dinner on 10/1 at 7pm"), utc(2027, 10, 1, 19, 0));
}

#[test]
fn test_time_first_then_date() {
    assert_eq!(start_of("Call at 3pm tomorrow"), utc(2026, 10, 15, 15, 0));
    assert_eq!(start_of("Meeting at 9:30am on Friday"), utc(2026, 10, 16, 9, 30));
}

#[test]
fn test_time_without_date_is_today() {
    assert_eq!(start_of("Lunch at 12:30"), utc(2026, 10, 14, 12, 30));
    assert_eq!(start_of("Call at 5"), utc(2026, 10, 14, 5, 0));
}

#[test]
fn test_midnight_ends_the_day() {
    assert_eq!(start_of("Party tomorrow at midnight"), utc(2026, 10, 16, 0, 0));
}

#[test]
fn test_relative_offsets() {
    let s = parse_at("Meeting in 2 hours", reference()).unwrap();
    assert_eq!(s.start_time, utc(2026, 10, 14, 12, 0));
    assert_eq!(s.end_time, utc(2026, 10, 14, 13, 0));

    assert_eq!(start_of("Call in 30 minutes"), utc(2026, 10, 14, 10, 30));
    assert_eq!(start_of("Meeting in 3 days at 10am"), utc(2026, 10, 17, 10, 0));
    assert_eq!(start_of("Call 2 weeks from now"), utc(2026, 10, 28, 10, 0));
    assert_eq!(start_of("Review in a month"), utc(2026, 11, 14, 10, 0));
    assert_eq!(start_of("Review next week"), utc(2026, 10, 21, 10, 0));
}

#[test]
fn test_ranges() {
    let s = parse_at("Meeting 2-3pm", reference()).unwrap();
    assert_eq!((s.start_time, s.end_time), (utc(2026, 10, 14, 14, 0), utc(2026, 10, 14, 15, 0)));

    let s = parse_at("Call Monday 9-11am", reference()).unwrap();
    assert_eq!((s.start_time, s.end_time), (utc(2026, 10, 19, 9, 0), utc(2026, 10, 19, 11, 0)));

    let s = parse_at("Meeting between 1 and 2pm tomorrow", reference()).unwrap();
    assert_eq!((s.start_time, s.end_time), (utc(2026, 10, 15, 13, 0), utc(2026, 10, 15, 14, 0)));

    let s = parse_at("Workshop from 11 to 1pm on Friday", reference()).unwrap();
    assert_eq!((s.start_time, s.end_time), (utc(2026, 10, 16, 11, 0), utc(2026, 10, 16, 13, 0)));
}

#[test]
fn test_range_past_midnight_rolls_over() {
    let s = parse_at("Shift from 10pm to 1am", reference()).unwrap();
    assert_eq!(s.start_time, utc(2026, 10, 14, 22, 0));
    assert_eq!(s.end_time, utc(2026, 10, 15, 1, 0));
}

#[test]
fn test_first_expression_wins() {
    let s = parse_at("Call tomorrow at 3pm or Friday at 5pm", reference()).unwrap();
    assert_eq!(s.start_time, utc(2026, 10, 15, 15, 0));
    assert_eq!(s.end_time, utc(2026, 10, 15, 16, 0));
}

#[test]
fn test_reference_offset_is_kept() {
    let reference = DateTime::parse_from_rfc3339("2026-10-14T10:00:00+02:00").unwrap();
    let s = parse_at("Coffee tomorrow at 9am", reference).unwrap();

    let expected = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 15, 9, 0, 0)
        .unwrap();
    assert_eq!(s.start_time, expected);
    assert_eq!(s.start_time.offset(), expected.offset());
}

#[test]
fn test_day_boundary_follows_reference_offset() {
    // 23:30 UTC-05:00 is already Thursday in UTC, but "tomorrow" is local Thursday
    let reference = DateTime::parse_from_rfc3339("2026-10-14T23:30:00-05:00").unwrap();
    let s = parse_at("Call tomorrow at 8am", reference).unwrap();
    assert_eq!(s.start_time.to_rfc3339(), "2026-10-15T08:00:00-05:00");
}

#[test]
fn test_things_that_are_not_times() {
    for text in [
        "Team sync",
        "Call Mom",
        "Meeting with Bob",
        "Review the 3 documents",
        "Meet in room 4",
    ] {
        assert_eq!(
            parse_at(text, reference()).unwrap_err(),
            ParseError::NoTemporalExpression,
            "{text}"
        );
    }
}

#[test]
fn test_configured_default_duration() {
    let parser = ScheduleParser::new(ParserOptions::with_default_duration_mins(30));
    let s = parser.parse("Coffee tomorrow at 9am", reference()).unwrap();
    assert_eq!(s.duration(), Duration::minutes(30));

    // An explicit range ignores the default
    let s = parser.parse("Meeting 2-4pm", reference()).unwrap();
    assert_eq!(s.duration(), Duration::hours(2));
}

#[test]
fn test_zero_duration_is_raised() {
    let options = ParserOptions::with_default_duration_mins(0);
    assert_eq!(options.default_duration, Duration::minutes(1));
    assert_eq!(ParserOptions::default().default_duration, Duration::hours(1));
}

#[test]
fn test_recognizer_reports_spans() {
    let text = "Lunch with Sarah on Friday at noon at Bistro Garden";
    let matches = EnglishRecognizer::new().recognize(text, reference());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "on Friday at noon");
    assert_eq!(&text[matches[0].span.clone()], "on Friday at noon");
    assert_eq!(matches[0].end, None);
}

#[test]
fn test_recognizer_finds_every_expression() {
    let text = "Call tomorrow at 3pm or Friday at 5pm";
    let matches = EnglishRecognizer::new().recognize(text, reference());

    let found: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(found, vec!["tomorrow at 3pm", "Friday at 5pm"]);
}

#[test]
fn test_non_positive_default_duration_still_ends_later() {
    for default_duration in [Duration::zero(), Duration::hours(-2)] {
        let parser = ScheduleParser::new(ParserOptions { default_duration });
        let s = parser.parse("Coffee tomorrow at 9am", reference()).unwrap();
        assert_eq!(s.start_time, utc(2026, 10, 15, 9, 0));
        assert_eq!(s.end_time, utc(2026, 10, 15, 9, 1));
        assert!(s.end_time > s.start_time);
    }
}

#[test]
fn test_reference_at_calendar_edges_does_not_panic() {
    let offset = FixedOffset::east_opt(0).unwrap();
    let last_day = offset
        .from_local_datetime(&NaiveDate::MAX.and_hms_opt(10, 0, 0).unwrap())
        .unwrap();
    let first_day = offset
        .from_local_datetime(&NaiveDate::MIN.and_hms_opt(10, 0, 0).unwrap())
        .unwrap();

    // Nothing after the last representable day
    assert_eq!(
        parse_at("Coffee on Friday", last_day).unwrap_err(),
        ParseError::NoTemporalExpression
    );
    assert_eq!(
        parse_at("Review next week", last_day).unwrap_err(),
        ParseError::NoTemporalExpression
    );

    // "tomorrow" is skipped; the clock time still lands on the reference day
    let s = parse_at("Coffee tomorrow at 9am", last_day).unwrap();
    assert_eq!(s.start_time.date_naive(), NaiveDate::MAX);
    assert!(s.end_time > s.start_time);

    for text in ["Call yesterday at 9am", "Call last Friday at 9am", "Call on 1/1 at 9am"] {
        if let Ok(s) = parse_at(text, first_day) {
            assert!(s.end_time > s.start_time, "{text}");
        }
    }
    for text in ["Call on 1/1 at 9am", "Call tomorrow at midnight", "Call in 2 days"] {
        if let Ok(s) = parse_at(text, last_day) {
            assert!(s.end_time > s.start_time, "{text}");
        }
    }
}
