use crate::error::{Result, TrackerError};
use crate::model::{
    render_date, Exercise, ExerciseEntry, ExerciseInput, ExerciseLog, LogEntry, LogQuery, User,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

const USER_ID_BYTES: usize = 12;

#[derive(Debug)]
struct Account {
    /// Creation order, used for listing.
    ordinal: u64,
    username: String,
    exercises: Vec<Exercise>,
}

/// Users and their exercises, kept in memory.
#[derive(Debug, Default)]
pub struct TrackerStore {
    accounts: DashMap<String, Account>,
    next_ordinal: AtomicU64,
}

impl TrackerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(&self, username: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(TrackerError::InvalidInput(
                "username is required".to_string(),
            ));
        }

        loop {
            match self.accounts.entry(new_user_id()) {
                // 96 random bits; a clash means try again.
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(Account {
                        ordinal: self.next_ordinal.fetch_add(1, Ordering::Relaxed),
                        username: username.to_string(),
                        exercises: Vec::new(),
                    });
                    debug!(user_id = %id, username, "created tracker user");
                    return Ok(User {
                        id,
                        username: username.to_string(),
                    });
                }
            }
        }
    }

    /// All users in creation order.
    pub fn users(&self) -> Vec<User> {
        let mut users: Vec<(u64, User)> = self
            .accounts
            .iter()
            .map(|account| {
                (
                    account.ordinal,
                    User {
                        id: account.key().clone(),
                        username: account.username.clone(),
                    },
                )
            })
            .collect();
        users.sort_by_key(|(ordinal, _)| *ordinal);
        users.into_iter().map(|(_, user)| user).collect()
    }

    /// Logs an exercise; a missing date means today in UTC.
    pub fn add_exercise(&self, user_id: &str, input: ExerciseInput) -> Result<ExerciseEntry> {
        self.add_exercise_on(user_id, input, today_utc())
    }

    /// Same as [`TrackerStore::add_exercise`] with an explicit "today".
    pub fn add_exercise_on(
        &self,
        user_id: &str,
        input: ExerciseInput,
        today: Date,
    ) -> Result<ExerciseEntry> {
        let mut account = self
            .accounts
            .get_mut(user_id)
            .ok_or_else(|| TrackerError::UserNotFound(user_id.to_string()))?;

        let description = input.description.trim();
        if description.is_empty() {
            return Err(TrackerError::InvalidInput(
                "description is required".to_string(),
            ));
        }
        let duration = parse_duration(&input.duration)?;
        let date = match input.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => parse_date("date", raw)?,
        };

        account.exercises.push(Exercise {
            description: description.to_string(),
            duration,
            date,
        });

        Ok(ExerciseEntry {
            user_id: user_id.to_string(),
            username: account.username.clone(),
            date: render_date(date),
            duration,
            description: description.to_string(),
        })
    }

    /// A user's exercises in insertion order, filtered by `query`.
    pub fn log(&self, user_id: &str, query: &LogQuery) -> Result<ExerciseLog> {
        let from = optional(query.from.as_deref())
            .map(|raw| parse_date("from", raw))
            .transpose()?;
        let to = optional(query.to.as_deref())
            .map(|raw| parse_date("to", raw))
            .transpose()?;
        let limit = optional(query.limit.as_deref())
            .map(parse_limit)
            .transpose()?
            .filter(|&limit| limit > 0)
            .unwrap_or(usize::MAX);

        let account = self
            .accounts
            .get(user_id)
            .ok_or_else(|| TrackerError::UserNotFound(user_id.to_string()))?;

        let log: Vec<LogEntry> = account
            .exercises
            .iter()
            .filter(|e| from.is_none_or(|from| e.date >= from))
            .filter(|e| to.is_none_or(|to| e.date <= to))
            .take(limit)
            .map(LogEntry::from)
            .collect();

        Ok(ExerciseLog {
            user_id: user_id.to_string(),
            username: account.username.clone(),
            count: log.len(),
            log,
        })
    }
}

fn new_user_id() -> String {
    let bytes: [u8; USER_ID_BYTES] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn today_utc() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

fn optional(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_duration(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(TrackerError::InvalidInput(format!(
            "duration must be a positive whole number of minutes: {raw}"
        ))),
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Date> {
    raw.parse::<Date>()
        .map_err(|_| TrackerError::InvalidInput(format!("{field} must be YYYY-MM-DD: {raw}")))
}

fn parse_limit(raw: &str) -> Result<usize> {
    raw.parse::<usize>().map_err(|_| {
        TrackerError::InvalidInput(format!("limit must be a non-negative integer: {raw}"))
    })
}
