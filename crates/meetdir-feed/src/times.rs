//! Recurring weekly time parsing and expansion.
//!
//! Feed rows carry zero or more human-readable weekly time expressions
//! ("Monday 7:00 pm"), one per line, interpreted in the row's IANA
//! timezone. Each valid expression resolves to the next matching occurrence
//! at or after a caller-supplied reference instant, so the pipeline stays
//! pure and replayable.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Duration, FixedOffset, LocalResult, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use regex::Regex;

/// Grammar for a weekly time expression: weekday, clock time, meridiem.
static WEEKLY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(sunday|monday|tuesday|wednesday|thursday|friday|saturday)\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)$",
    )
    .expect("Invalid weekly time regex")
});

/// A parsed weekday + time-of-day pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyTime {
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
}

/// Parses one weekly time expression.
///
/// Accepts "Monday 7:00 pm", "saturday 10 AM", and the like. Returns `None`
/// when the expression does not match the grammar or the clock time is out
/// of range.
pub fn parse_weekly(expr: &str) -> Option<WeeklyTime> {
    let caps = WEEKLY_REGEX.captures(expr.trim())?;

    let weekday = match caps[1].to_lowercase().as_str() {
        "sunday" => Weekday::Sun,
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        _ => return None,
    };

    let hour12: u32 = caps[2].parse().ok()?;
    if hour12 == 0 || hour12 > 12 {
        return None;
    }
    let minute: u32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if minute > 59 {
        return None;
    }

    let meridiem = caps[4].to_lowercase();
    let hour = match (meridiem.as_str(), hour12) {
        ("am", 12) => 0,
        ("am", h) => h,
        ("pm", 12) => 12,
        ("pm", h) => h + 12,
        _ => return None,
    };

    Some(WeeklyTime {
        weekday,
        hour,
        minute,
    })
}

/// Resolves the next occurrence of `weekly` in `tz` at or after `now`.
///
/// Today's matching time is used if it has not yet passed; otherwise the
/// occurrence falls within the following seven days. The returned instant
/// carries the zone's UTC offset at that moment. Local times made invalid
/// or ambiguous by a DST transition resolve to the earliest valid instant.
pub fn next_occurrence(
    weekly: WeeklyTime,
    tz: Tz,
    now: DateTime<Utc>,
) -> Option<DateTime<FixedOffset>> {
    let local_now = now.with_timezone(&tz);
    let time = NaiveTime::from_hms_opt(weekly.hour, weekly.minute, 0)?;

    let days_ahead = (weekly.weekday.num_days_from_sunday() + 7
        - local_now.weekday().num_days_from_sunday())
        % 7;
    let mut date = local_now.date_naive() + Duration::days(i64::from(days_ahead));
    if days_ahead == 0 && local_now.time() > time {
        date += Duration::days(7);
    }

    let resolved = match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Local time skipped by a DST gap: take the hour after.
        LocalResult::None => tz
            .from_local_datetime(&(date.and_time(time) + Duration::hours(1)))
            .earliest()?,
    };
    Some(resolved.fixed_offset())
}

/// The outcome of expanding one row's times field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Resolved occurrences, one per valid expression, in input order.
    pub occurrences: Vec<DateTime<FixedOffset>>,
    /// Expressions that failed to parse or resolve.
    pub invalid: Vec<String>,
    /// The timezone value, when it is not a known IANA identifier and the
    /// row had time expressions to interpret.
    pub invalid_timezone: Option<String>,
}

/// Expands a newline-separated times field against the row timezone.
///
/// Invalid expressions are reported, never fatal. When the timezone itself
/// is unknown, no expression can resolve and the row degrades to ongoing.
/// An empty times field is not an error: the row is simply ongoing.
pub fn expand(times: &str, timezone: &str, now: DateTime<Utc>) -> Expansion {
    let exprs: Vec<&str> = times
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if exprs.is_empty() {
        return Expansion::default();
    }

    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => {
            return Expansion {
                invalid_timezone: Some(timezone.to_string()),
                ..Expansion::default()
            };
        }
    };

    let mut expansion = Expansion::default();
    for expr in exprs {
        match parse_weekly(expr).and_then(|weekly| next_occurrence(weekly, tz, now)) {
            Some(instant) => expansion.occurrences.push(instant),
            None => expansion.invalid.push(expr.to_string()),
        }
    }
    expansion
}
