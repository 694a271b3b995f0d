// File: src/parser/recognizer.rs
// English date/time expression recognizer.
//
// Works on word tokens with byte offsets into the original text. At each
// token the scanner tries to read one expression (date and/or time, an
// optional range end); on success it records the expression and resumes
// after it, otherwise it moves on by one token.
use crate::parser::temporal::{TemporalMatch, TemporalRecognizer};
use crate::parser::words::{
    Clock, last_weekday, next_weekday, parse_amount_and_unit, parse_clock,
    parse_day_of_month, parse_day_period, parse_meridiem, parse_month, parse_weekday, parse_year,
    shift, this_weekday, Unit,
};
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug)]
struct Token {
    word: String,
    start: usize,
    end: usize,
}

fn tokenize(text: &str) -> Vec<Token> {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    let re = WORD_RE.get_or_init(|| {
        Regex::new(r"\d{4}-\d{1,2}-\d{1,2}|[A-Za-z0-9]+(?:[:/][A-Za-z0-9]+)*|[-–]")
            .expect("token pattern is valid")
    });
    re.find_iter(text)
        .map(|m| Token {
            word: m.as_str().to_lowercase(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// A point as far as the text pins it down. Missing pieces are filled in
/// at resolution time.
#[derive(Debug, Clone, Copy, Default)]
struct Moment {
    date: Option<NaiveDate>,
    clock: Option<Clock>,
    implied: Option<NaiveTime>,
    // "midnight" means the end of the named day.
    next_day: bool,
}

impl Moment {
    fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    fn resolve(&self, fallback_date: NaiveDate) -> Option<NaiveDateTime> {
        let date = self.date.unwrap_or(fallback_date);
        let time = match self.clock {
            Some(clock) => clock.to_time()?,
            None => self.implied.unwrap_or_else(noon),
        };
        let dt = date.and_time(time);
        if self.next_day {
            dt.checked_add_signed(Duration::days(1))
        } else {
            Some(dt)
        }
    }
}

// Dates without a clock time land at midday.
fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

#[derive(Debug, Clone, Copy)]
struct Expression {
    start: Moment,
    end: Option<Moment>,
}

#[derive(Debug, Clone, Copy)]
struct TimeSpec {
    start: Clock,
    end: Option<Clock>,
    next_day: bool,
}

impl TimeSpec {
    fn single(clock: Clock) -> Self {
        Self {
            start: clock,
            end: None,
            next_day: false,
        }
    }

    fn range(start: Clock, end: Clock) -> Self {
        let (start, end) = align_meridiem(start, end);
        Self {
            start,
            end: Some(end),
            next_day: false,
        }
    }

    /// Attaches the clock(s) to whatever date context was read next to them.
    fn on(self, day: Moment) -> Expression {
        let start = Moment {
            clock: Some(self.start),
            next_day: self.next_day,
            ..day
        };
        let end = self.end.map(|clock| Moment {
            clock: Some(clock),
            next_day: false,
            ..day
        });
        Expression { start, end }
    }
}

/// Fills in a missing meridiem on one side of a range from the other side.
/// "2-3pm" reads as 14:00-15:00, "11-1pm" as 11:00-13:00.
fn align_meridiem(start: Clock, end: Clock) -> (Clock, Clock) {
    match (start.meridiem, end.meridiem) {
        (None, Some(m)) if start.can_take_meridiem() => {
            let candidate = start.with_meridiem(m);
            if candidate.to_time() > end.to_time() {
                (start.with_meridiem(m.flip()), end)
            } else {
                (candidate, end)
            }
        }
        (Some(m), None) if end.can_take_meridiem() => {
            let candidate = end.with_meridiem(m);
            if candidate.to_time() < start.to_time() {
                (start, end.with_meridiem(m.flip()))
            } else {
                (start, candidate)
            }
        }
        _ => (start, end),
    }
}

struct Scanner<'a> {
    tokens: &'a [Token],
    today: NaiveDate,
    now: NaiveDateTime,
}

impl<'a> Scanner<'a> {
    fn word(&self, i: usize) -> Option<&'a str> {
        self.tokens.get(i).map(|t| t.word.as_str())
    }

    // --- Expressions ---

    fn expression(&self, i: usize) -> Option<(Expression, usize)> {
        let (mut expr, mut next) = self.component(i, false)?;
        // A bare number only reads as a range end after a clock time.
        let lenient_end = expr.start.clock.is_some();
        if expr.end.is_none()
            && let Some(after_connector) = self.range_connector(next, false)
            && let Some((end_expr, after)) = self.component(after_connector, lenient_end)
        {
            let mut end = end_expr.start;
            if let (Some(start_clock), Some(end_clock)) = (expr.start.clock, end.clock) {
                let (s, e) = align_meridiem(start_clock, end_clock);
                expr.start.clock = Some(s);
                end.clock = Some(e);
            }
            expr.end = Some(end);
            next = after;
        }
        Some((expr, next))
    }

    /// One date and/or time, in either order, or a relative offset.
    fn component(&self, i: usize, lenient: bool) -> Option<(Expression, usize)> {
        if let Some((mut day, next)) = self.date_part(i) {
            if let Some((spec, after)) = self.time_part(next, false) {
                return Some((spec.on(day), after));
            }
            if let Some(period) = self.word(next).and_then(parse_day_period) {
                day.implied = Some(period);
                return Some((Expression { start: day, end: None }, next + 1));
            }
            return Some((Expression { start: day, end: None }, next));
        }

        if let Some((spec, next)) = self.time_part(i, lenient) {
            let day = self.date_part(next);
            let (day, after) = day.unwrap_or((Moment::default(), next));
            return Some((spec.on(day), after));
        }

        self.relative(i)
    }

    fn range_connector(&self, i: usize, allow_and: bool) -> Option<usize> {
        match self.word(i)? {
            "-" | "–" | "to" | "until" | "till" | "through" | "thru" => Some(i + 1),
            "and" if allow_and => Some(i + 1),
            _ => None,
        }
    }

    // --- Dates ---

    fn date_part(&self, i: usize) -> Option<(Moment, usize)> {
        match self.word(i)? {
            "on" | "from" => self.bare_date(i + 1),
            _ => self.bare_date(i),
        }
    }

    fn bare_date(&self, i: usize) -> Option<(Moment, usize)> {
        let word = self.word(i)?;
        let keep_time = |date: NaiveDate| Moment {
            date: Some(date),
            implied: Some(self.now.time()),
            ..Moment::default()
        };

        match word {
            "today" => return Some((keep_time(self.today), i + 1)),
            "tonight" => {
                let moment = Moment {
                    implied: parse_day_period("tonight"),
                    ..Moment::on(self.today)
                };
                return Some((moment, i + 1));
            }
            "tomorrow" | "tmrw" | "tmr" => {
                return self.today.succ_opt().map(|d| (keep_time(d), i + 1));
            }
            "yesterday" => return self.today.pred_opt().map(|d| (keep_time(d), i + 1)),
            "this" | "next" | "last" => return self.modified_date(word, i + 1),
            _ => {}
        }

        if let Some(target) = parse_weekday(word) {
            return next_weekday(self.today, target).map(|d| (Moment::on(d), i + 1));
        }
        if let Some(found) = self.month_first(i).or_else(|| self.day_first(i)) {
            return Some(found);
        }
        self.numeric_date(word).map(|date| (Moment::on(date), i + 1))
    }

    fn modified_date(&self, modifier: &str, i: usize) -> Option<(Moment, usize)> {
        let word = self.word(i)?;
        if let Some(target) = parse_weekday(word) {
            let date = match modifier {
                "this" => this_weekday(self.today, target),
                "last" => last_weekday(self.today, target),
                _ => next_weekday(self.today, target),
            }?;
            return Some((Moment::on(date), i + 1));
        }

        if modifier == "this" {
            let period = match word {
                "morning" | "afternoon" | "evening" => parse_day_period(word)?,
                _ => return None,
            };
            let moment = Moment {
                implied: Some(period),
                ..Moment::on(self.today)
            };
            return Some((moment, i + 1));
        }

        let unit = match word {
            "week" => Unit::Week,
            "month" => Unit::Month,
            "year" => Unit::Year,
            _ => return None,
        };
        let amount = if modifier == "last" { -1 } else { 1 };
        let shifted = shift(self.now, amount, unit)?;
        let moment = Moment {
            date: Some(shifted.date()),
            implied: Some(shifted.time()),
            ..Moment::default()
        };
        Some((moment, i + 1))
    }

    /// `January 16`, `Jan 16th`, `January 16 2027`
    fn month_first(&self, i: usize) -> Option<(Moment, usize)> {
        let month = parse_month(self.word(i)?)?;
        let day = parse_day_of_month(self.word(i + 1)?)?;
        self.calendar_date(month, day, i + 2)
    }

    /// `16 January`, `the 16th of January`
    fn day_first(&self, i: usize) -> Option<(Moment, usize)> {
        let mut j = i;
        if self.word(j) == Some("the") {
            j += 1;
        }
        let day = parse_day_of_month(self.word(j)?)?;
        j += 1;
        if self.word(j) == Some("of") {
            j += 1;
        }
        let month = parse_month(self.word(j)?)?;
        self.calendar_date(month, day, j + 1)
    }

    fn calendar_date(&self, month: u32, day: u32, year_idx: usize) -> Option<(Moment, usize)> {
        if let Some(year) = self.word(year_idx).and_then(parse_year) {
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            return Some((Moment::on(date), year_idx + 1));
        }
        Some((Moment::on(self.upcoming(month, day)?), year_idx))
    }

    /// `2026-10-20`, `10/20`, `10/20/2026`, `10/20/26`
    fn numeric_date(&self, word: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(word, "%Y-%m-%d") {
            return Some(date);
        }
        let parts: Vec<&str> = word.split('/').collect();
        let month = parts.first()?.parse::<u32>().ok()?;
        let day = parts.get(1)?.parse::<u32>().ok()?;
        match parts.get(2) {
            None if parts.len() == 2 => self.upcoming(month, day),
            Some(y) if parts.len() == 3 => {
                let year = match y.len() {
                    2 => 2000 + y.parse::<i32>().ok()?,
                    4 => y.parse::<i32>().ok()?,
                    _ => return None,
                };
                NaiveDate::from_ymd_opt(year, month, day)
            }
            _ => None,
        }
    }

    /// A year-less month/day: this year, or next year once it has passed.
    fn upcoming(&self, month: u32, day: u32) -> Option<NaiveDate> {
        let this_year = NaiveDate::from_ymd_opt(self.today.year(), month, day);
        match this_year {
            Some(d) if d >= self.today => Some(d),
            _ => NaiveDate::from_ymd_opt(self.today.year().checked_add(1)?, month, day),
        }
    }

    // --- Times ---

    fn time_part(&self, i: usize, lenient: bool) -> Option<(TimeSpec, usize)> {
        let (lead, start_idx) = match self.word(i)? {
            "at" | "from" | "around" => ("at", i + 1),
            "between" => ("between", i + 1),
            _ => ("", i),
        };
        let lenient = lenient || !lead.is_empty();

        if self.word(start_idx) == Some("midnight") {
            let spec = TimeSpec {
                start: Clock {
                    hour: 0,
                    minute: 0,
                    meridiem: None,
                    strict: true,
                },
                end: None,
                next_day: true,
            };
            return Some((spec, start_idx + 1));
        }

        let (first, next) = self.clock_at(start_idx)?;
        let range = self
            .range_connector(next, lead == "between")
            .and_then(|after| self.clock_at(after));

        match range {
            Some((second, after)) if first.strict || lenient || second.strict => {
                Some((TimeSpec::range(first, second), after))
            }
            _ if first.strict || lenient => Some((TimeSpec::single(first), next)),
            _ => None,
        }
    }

    /// A clock token, optionally followed by a separate `am`/`pm` token.
    fn clock_at(&self, i: usize) -> Option<(Clock, usize)> {
        let clock = parse_clock(self.word(i)?)?;
        if clock.meridiem.is_none()
            && let Some(meridiem) = self.word(i + 1).and_then(parse_meridiem)
        {
            let with: Clock = clock.with_meridiem(meridiem);
            with.to_time()?;
            return Some((with, i + 2));
        }
        Some((clock, i + 1))
    }

    // --- Relative offsets ---

    /// `in 2 hours`, `in a week at 3pm`, `3 days from now`
    fn relative(&self, i: usize) -> Option<(Expression, usize)> {
        let (amount, unit, next) = if self.word(i)? == "in" {
            let (amount, unit, extra) = parse_amount_and_unit(self.word(i + 1)?, self.word(i + 2))?;
            (amount, unit, i + 2 + extra)
        } else {
            let (amount, unit, extra) = parse_amount_and_unit(self.word(i)?, self.word(i + 1))?;
            let after = i + 1 + extra;
            if self.word(after) != Some("from") || self.word(after + 1) != Some("now") {
                return None;
            }
            (amount, unit, after + 2)
        };

        let target = shift(self.now, i64::from(amount), unit)?;
        if unit.is_calendar()
            && let Some((spec, after)) = self.time_part(next, false)
        {
            return Some((spec.on(Moment::on(target.date())), after));
        }
        let moment = Moment {
            date: Some(target.date()),
            clock: Some(Clock::exact(target.time())),
            ..Moment::default()
        };
        Some((Expression { start: moment, end: None }, next))
    }
}

/// Default recognizer for English scheduling phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRecognizer;

impl EnglishRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn resolve(
        expr: &Expression,
        today: NaiveDate,
        offset: FixedOffset,
    ) -> Option<(DateTime<FixedOffset>, Option<DateTime<FixedOffset>>)> {
        let start = expr.start.resolve(today)?;
        let end = expr.end.and_then(|end_moment| {
            let mut end = end_moment.resolve(start.date())?;
            // "10pm-1am" ends the following day.
            if end <= start && end_moment.date.is_none() {
                end = end.checked_add_signed(Duration::days(1))?;
            }
            (end > start).then_some(end)
        });

        let start = offset.from_local_datetime(&start).single()?;
        let end = match end {
            Some(naive) => Some(offset.from_local_datetime(&naive).single()?),
            None => None,
        };
        Some((start, end))
    }
}

impl TemporalRecognizer for EnglishRecognizer {
    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Vec<TemporalMatch> {
        let tokens = tokenize(text);
        let now = reference.naive_local();
        let scanner = Scanner {
            tokens: &tokens,
            today: now.date(),
            now,
        };

        let mut found = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let hit = scanner.expression(i).and_then(|(expr, next)| {
                let (start, end) = Self::resolve(&expr, scanner.today, *reference.offset())?;
                Some((start, end, next))
            });

            match hit {
                Some((start, end, next)) => {
                    let span = tokens[i].start..tokens[next - 1].end;
                    log::debug!("Recognized '{}' as {} .. {:?}", &text[span.clone()], start, end);
                    found.push(TemporalMatch {
                        text: text[span.clone()].to_string(),
                        span,
                        start,
                        end,
                    });
                    i = next;
                }
                None => i += 1,
            }
        }
        found
    }
}
