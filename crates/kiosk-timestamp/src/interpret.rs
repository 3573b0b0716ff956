use crate::calendar;
use jiff::fmt::rfc2822::DateTimePrinter;
use jiff::Timestamp;
use serde::Serialize;
use tracing::trace;

/// Error text for anything that does not denote a valid instant.
pub const INVALID_DATE: &str = "Invalid Date";

/// Inputs with at least this many digits, and nothing else, are epoch milliseconds.
const MIN_EPOCH_DIGITS: usize = 5;

static RFC9110_PRINTER: DateTimePrinter = DateTimePrinter::new();

/// Outcome of [`interpret`].
///
/// Serializes as `{"unix": .., "utc": ..}` or `{"error": "Invalid Date"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TimestampResult {
    Instant {
        /// Milliseconds since the Unix epoch; negative before 1970.
        #[serde(rename = "unix")]
        unix_millis: i64,
        /// RFC 9110 rendering in GMT.
        #[serde(rename = "utc")]
        utc_string: String,
    },
    Invalid {
        error: String,
    },
}

impl TimestampResult {
    /// The `Invalid Date` outcome.
    pub fn invalid() -> Self {
        TimestampResult::Invalid {
            error: INVALID_DATE.to_string(),
        }
    }

    /// Renders `timestamp`, or reports it invalid if it cannot be printed.
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        match RFC9110_PRINTER.timestamp_to_rfc9110_string(&timestamp) {
            Ok(utc_string) => TimestampResult::Instant {
                unix_millis: timestamp.as_millisecond(),
                utc_string,
            },
            Err(_) => Self::invalid(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, TimestampResult::Instant { .. })
    }
}

/// Interprets an optional date parameter.
///
/// - absent or empty: the current instant
/// - five or more digits and nothing else: epoch milliseconds
/// - anything else: a calendar string (see [`calendar::parse`])
pub fn interpret(raw: Option<&str>) -> TimestampResult {
    interpret_at(raw, Timestamp::now())
}

/// Same as [`interpret`] with an explicit "now".
pub fn interpret_at(raw: Option<&str>, now: Timestamp) -> TimestampResult {
    let raw = match raw {
        None | Some("") => return TimestampResult::from_timestamp(now),
        Some(raw) => raw,
    };

    let parsed = if is_epoch_millis(raw) {
        raw.parse::<i64>()
            .ok()
            .and_then(|millis| Timestamp::from_millisecond(millis).ok())
    } else {
        calendar::parse(raw)
    };

    match parsed {
        Some(timestamp) => TimestampResult::from_timestamp(timestamp),
        None => {
            trace!(input = raw, "not a date");
            TimestampResult::invalid()
        }
    }
}

fn is_epoch_millis(raw: &str) -> bool {
    raw.len() >= MIN_EPOCH_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
}
