//! Free-form calendar string parsing.
//!
//! Accepted shapes are tried in order and the first match wins. Inputs
//! without an explicit offset are read as UTC.

use jiff::civil::{Date, DateTime, Time};
use jiff::fmt::rfc2822;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::Timestamp;

static RFC2822_PARSER: rfc2822::DateTimeParser = rfc2822::DateTimeParser::new();

/// Date layouts with month names or slashes. A trailing `HH:MM[:SS]` is
/// split off before these are tried.
const HUMAN_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%a, %d %b %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Parses a calendar string into an instant.
///
/// Returns `None` when no accepted shape matches or the result falls
/// outside the representable range.
pub fn parse(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = raw.parse::<DateTime>() {
        return utc(datetime);
    }

    if let Some(date) = parse_reduced_iso_date(raw) {
        return utc(date.to_datetime(Time::midnight()));
    }

    if let Ok(timestamp) = RFC2822_PARSER.parse_timestamp(raw) {
        return Some(timestamp);
    }

    parse_human(raw)
}

fn utc(datetime: DateTime) -> Option<Timestamp> {
    datetime
        .to_zoned(TimeZone::UTC)
        .ok()
        .map(|zoned| zoned.timestamp())
}

/// `YYYY-MM-DD`, `YYYY-MM` and bare years of one to four digits.
fn parse_reduced_iso_date(raw: &str) -> Option<Date> {
    let mut parts = raw.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next();
    let day = parts.next();

    if year.is_empty() || year.len() > 4 || !is_digits(year) {
        return None;
    }
    // Dashed forms need a full four-digit year.
    if month.is_some() && year.len() != 4 {
        return None;
    }

    let year: i16 = year.parse().ok()?;
    let month = match month {
        Some(m) if (1..=2).contains(&m.len()) && is_digits(m) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    let day = match day {
        Some(d) if (1..=2).contains(&d.len()) && is_digits(d) => d.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };

    Date::new(year, month, day).ok()
}

fn parse_human(raw: &str) -> Option<Timestamp> {
    let (date_part, time) = match raw.rsplit_once(' ') {
        Some((head, tail)) if tail.contains(':') => (head.trim_end(), parse_clock(tail)?),
        _ => (raw, Time::midnight()),
    };

    HUMAN_DATE_FORMATS.iter().find_map(|format| {
        let date = strtime::parse(format, date_part).ok()?.to_date().ok()?;
        utc(date.to_datetime(time))
    })
}

/// `HH:MM` or `HH:MM:SS`.
fn parse_clock(raw: &str) -> Option<Time> {
    let mut fields = raw.split(':');
    let hour = clock_field(fields.next()?)?;
    let minute = clock_field(fields.next()?)?;
    let second = match fields.next() {
        Some(s) => clock_field(s)?,
        None => 0,
    };
    if fields.next().is_some() {
        return None;
    }

    Time::new(hour, minute, second, 0).ok()
}

fn clock_field(raw: &str) -> Option<i8> {
    if raw.is_empty() || raw.len() > 2 || !is_digits(raw) {
        return None;
    }
    raw.parse().ok()
}

fn is_digits(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_digit())
}
