// File: src/parser/words.rs
// Word-level date and time vocabulary shared by the recognizer.
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn flip(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }
}

/// An hour/minute as written, before any meridiem inference.
///
/// `strict` marks readings that cannot be an ordinary number: a meridiem,
/// a colon, or a word like "noon".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Option<Meridiem>,
    pub strict: bool,
}

impl Clock {
    pub fn exact(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            meridiem: None,
            strict: true,
        }
    }

    pub fn with_meridiem(self, meridiem: Meridiem) -> Self {
        Self {
            meridiem: Some(meridiem),
            strict: true,
            ..self
        }
    }

    pub fn can_take_meridiem(&self) -> bool {
        self.meridiem.is_none() && (1..=12).contains(&self.hour)
    }

    pub fn to_time(self) -> Option<NaiveTime> {
        let hour = match self.meridiem {
            None => self.hour,
            Some(m) => {
                if !(1..=12).contains(&self.hour) {
                    return None;
                }
                match (m, self.hour) {
                    (Meridiem::Am, 12) => 0,
                    (Meridiem::Am, h) => h,
                    (Meridiem::Pm, 12) => 12,
                    (Meridiem::Pm, h) => h + 12,
                }
            }
        };
        NaiveTime::from_hms_opt(hour, self.minute, 0)
    }
}

pub fn parse_meridiem(s: &str) -> Option<Meridiem> {
    match s.to_lowercase().as_str() {
        "am" => Some(Meridiem::Am),
        "pm" => Some(Meridiem::Pm),
        _ => None,
    }
}

/// Reads a single token as a clock time: `3pm`, `3:30pm`, `15:00`, `noon`,
/// or a bare hour `3` (non-strict).
pub fn parse_clock(s: &str) -> Option<Clock> {
    let lower = s.to_lowercase();
    if lower == "noon" || lower == "midday" {
        return Some(Clock {
            hour: 12,
            minute: 0,
            meridiem: Some(Meridiem::Pm),
            strict: true,
        });
    }

    let (body, meridiem) = if let Some(stripped) = lower.strip_suffix("am") {
        (stripped, Some(Meridiem::Am))
    } else if let Some(stripped) = lower.strip_suffix("pm") {
        (stripped, Some(Meridiem::Pm))
    } else {
        (lower.as_str(), None)
    };

    let (hour, minute, has_colon) = if let Some((h_str, m_str)) = body.split_once(':') {
        if m_str.len() != 2 {
            return None;
        }
        (h_str.parse::<u32>().ok()?, m_str.parse::<u32>().ok()?, true)
    } else {
        if body.is_empty() || body.len() > 2 || !body.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        (body.parse::<u32>().ok()?, 0, false)
    };

    if minute > 59 {
        return None;
    }
    match meridiem {
        Some(_) if !(1..=12).contains(&hour) => return None,
        None if hour > 23 => return None,
        _ => {}
    }

    Some(Clock {
        hour,
        minute,
        meridiem,
        strict: meridiem.is_some() || has_colon,
    })
}

/// Implied clock time for a period of the day ("tomorrow morning").
pub fn parse_day_period(s: &str) -> Option<NaiveTime> {
    let hour = match s.to_lowercase().as_str() {
        "morning" => 6,
        "afternoon" => 15,
        "evening" => 20,
        "night" | "tonight" => 22,
        _ => return None,
    };
    NaiveTime::from_hms_opt(hour, 0, 0)
}

// "sat" and "sun" are left out on purpose: as plain words they are too common.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn parse_month(s: &str) -> Option<u32> {
    match s.to_lowercase().as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Day of month with an optional ordinal suffix: `16`, `1st`, `22nd`, `3rd`, `16th`.
pub fn parse_day_of_month(s: &str) -> Option<u32> {
    let lower = s.to_lowercase();
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| lower.strip_suffix(suffix))
        .unwrap_or(lower.as_str());
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let day = digits.parse::<u32>().ok()?;
    (1..=31).contains(&day).then_some(day)
}

pub fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<i32>().ok()
}

pub fn parse_english_number(s: &str) -> Option<u32> {
    match s.to_lowercase().as_str() {
        "a" | "an" | "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        "eleven" => Some(11),
        "twelve" => Some(12),
        other => other.parse::<u32>().ok(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Units of a day or more leave room for an explicit clock time after them.
    pub fn is_calendar(self) -> bool {
        matches!(self, Unit::Day | Unit::Week | Unit::Month | Unit::Year)
    }
}

pub fn parse_unit(s: &str) -> Option<Unit> {
    match s.to_lowercase().as_str() {
        "m" | "min" | "mins" | "minute" | "minutes" => Some(Unit::Minute),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(Unit::Hour),
        "d" | "day" | "days" => Some(Unit::Day),
        "w" | "wk" | "wks" | "week" | "weeks" => Some(Unit::Week),
        "mo" | "month" | "months" => Some(Unit::Month),
        "y" | "yr" | "yrs" | "year" | "years" => Some(Unit::Year),
        _ => None,
    }
}

/// Reads an amount and a unit from one or two tokens.
///
/// Returns `(amount, unit, extra_tokens_consumed)`: `2 hours` consumes one
/// extra token, the compact `2h` consumes none.
pub fn parse_amount_and_unit(first: &str, second: Option<&str>) -> Option<(u32, Unit, usize)> {
    if let Some(next_token) = second
        && let Some(amount) = parse_english_number(first)
        && let Some(unit) = parse_unit(next_token)
    {
        return Some((amount, unit, 1));
    }
    let lower = first.to_lowercase();
    let idx = lower.find(|c: char| !c.is_ascii_digit())?;
    let (amount_str, unit_str) = lower.split_at(idx);
    let amount = amount_str.parse::<u32>().ok()?;
    let unit = parse_unit(unit_str)?;
    Some((amount, unit, 0))
}

pub fn shift(from: NaiveDateTime, amount: i64, unit: Unit) -> Option<NaiveDateTime> {
    match unit {
        Unit::Minute => from.checked_add_signed(Duration::minutes(amount)),
        Unit::Hour => from.checked_add_signed(Duration::hours(amount)),
        Unit::Day => from.checked_add_signed(Duration::days(amount)),
        Unit::Week => from.checked_add_signed(Duration::weeks(amount)),
        Unit::Month => shift_months(from, amount),
        Unit::Year => shift_months(from, amount.checked_mul(12)?),
    }
}

fn shift_months(from: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        from.checked_add_months(count)
    } else {
        from.checked_sub_months(count)
    }
}

/// Next occurrence strictly after `from`.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    this_weekday(from.succ_opt()?, target)
}

/// Occurrence on or after `from`.
pub fn this_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let ahead = (target.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    from.checked_add_signed(Duration::days(i64::from(ahead)))
}

/// Occurrence strictly before `from`.
pub fn last_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let prev = from.pred_opt()?;
    let behind = (prev.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7;
    prev.checked_sub_signed(Duration::days(i64::from(behind)))
}
