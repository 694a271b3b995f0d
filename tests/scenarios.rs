// File: tests/scenarios.rs
// End-to-end parsing of typical requests against a fixed reference instant.
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use schedwiz::{ParseError, parse, parse_at};

// Wednesday, 2026-10-14 10:00 UTC
fn reference() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-14T10:00:00+00:00").unwrap()
}

fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2026, month, day, hour, minute, 0)
        .unwrap()
}

#[test]
fn test_call_on_weekday_at_time() {
    let s = parse_at("Schedule a call with Jack on Thursday at 3pm", reference()).unwrap();

    assert!(s.title.contains("Call with Jack"));
    assert_eq!(s.participants, vec!["Jack".to_string()]);
    assert_eq!(s.start_time, at(10, 15, 15, 0));
    assert_eq!(s.end_time, at(10, 15, 16, 0));
    assert_eq!(s.location, None);
}

#[test]
fn test_lunch_with_place_after_time() {
    let s = parse_at(
        "Lunch with Sarah on Friday at noon at Bistro Garden",
        reference(),
    )
    .unwrap();

    assert_eq!(s.participants, vec!["Sarah".to_string()]);
    assert_eq!(s.location.as_deref(), Some("Bistro Garden"));
    assert_eq!(s.title, "Lunch with Sarah");
    assert_eq!(s.start_time, at(10, 16, 12, 0));
    assert_eq!(s.end_time, at(10, 16, 13, 0));
}

#[test]
fn test_explicit_range_is_honored() {
    let s = parse_at("Call with John next Monday from 2-3pm", reference()).unwrap();

    assert_eq!(s.start_time, at(10, 19, 14, 0));
    assert_eq!(s.end_time, at(10, 19, 15, 0));
    assert_eq!(s.participants, vec!["John".to_string()]);
    assert_eq!(s.title, "Call with John");
}

#[test]
fn test_no_time_fails() {
    let err = parse_at("Team sync", reference()).unwrap_err();
    assert_eq!(err, ParseError::NoTemporalExpression);
    assert!(err.user_message().contains("Thursday at 3pm"));
}

#[test]
fn test_coffee_tomorrow() {
    let s = parse_at("Coffee tomorrow at 9am", reference()).unwrap();

    assert!(s.participants.is_empty());
    assert_eq!(s.location, None);
    assert_eq!(s.title, "Coffee");
    assert_eq!(s.start_time, at(10, 15, 9, 0));
}

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(parse_at("", reference()).unwrap_err(), ParseError::EmptyInput);
    assert_eq!(parse_at("   \n\t", reference()).unwrap_err(), ParseError::EmptyInput);
    assert_eq!(
        ParseError::EmptyInput.user_message(),
        "Please enter a scheduling request."
    );
}

#[test]
fn test_time_phrase_is_not_a_location() {
    // "at noon" is the time, so there is nothing left for the location
    let s = parse_at("Lunch at noon", reference()).unwrap();
    assert_eq!(s.location, None);
    assert_eq!(s.start_time, at(10, 14, 12, 0));
}

#[test]
fn test_participants_and_location_together() {
    let s = parse_at(
        "Dinner with Anna and Tom Baker tomorrow at 7pm at Harbor Grill",
        reference(),
    )
    .unwrap();

    assert_eq!(s.participants, vec!["Anna".to_string(), "Tom Baker".to_string()]);
    assert_eq!(s.title, "Dinner with Anna, Tom Baker");
    assert_eq!(s.location.as_deref(), Some("Harbor Grill"));
    assert_eq!(s.start_time, at(10, 15, 19, 0));
}

#[test]
fn test_fallback_titles() {
    let s = parse_at("Catch up with Maria tomorrow at 5pm", reference()).unwrap();
    assert_eq!(s.title, "Meeting with Maria");

    let s = parse_at("Dentist tomorrow at 5pm", reference()).unwrap();
    assert_eq!(s.title, "Scheduled Event");
}

#[test]
fn test_end_always_after_start() {
    let inputs = [
        "Call tomorrow",
        "Meeting 2-3pm",
        "Shift from 10pm to 1am",
        "Review next week",
        "Lunch on Friday at noon",
        "Call in 30 minutes",
    ];
    for input in inputs {
        let s = parse_at(input, reference()).unwrap();
        assert!(s.end_time > s.start_time, "{input}");
        assert!(!s.title.is_empty(), "{input}");
    }
}

#[test]
fn test_same_reference_same_result() {
    let a = parse_at("Workshop with Lee on Friday at 10am in room 4", reference()).unwrap();
    let b = parse_at("Workshop with Lee on Friday at 10am in room 4", reference()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.location.as_deref(), Some("room 4"));
}

#[test]
fn test_default_entry_point_uses_clock() {
    let s = parse("Call in 2 hours").unwrap();
    assert_eq!(s.duration(), Duration::hours(1));
    assert!(s.start_time > chrono::Local::now().fixed_offset());
}

#[test]
fn test_json_shape() {
    let s = parse_at("Coffee tomorrow at 9am", reference()).unwrap();
    let json = serde_json::to_value(&s).unwrap();

    assert_eq!(json["title"], "Coffee");
    let start = DateTime::parse_from_rfc3339(json["startTime"].as_str().unwrap()).unwrap();
    let end = DateTime::parse_from_rfc3339(json["endTime"].as_str().unwrap()).unwrap();
    assert_eq!(start, at(10, 15, 9, 0));
    assert_eq!(end, at(10, 15, 10, 0));
    assert_eq!(json["participants"], serde_json::json!([]));
    assert!(json.get("location").is_none());
}
