use crate::error::ShortenerError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The identifier portion of a shortened link.
///
/// A code is either a number handed out by a sequential counter or an
/// opaque slug. Both serialize to their natural JSON type, so a sequential
/// link is reported as `"short_url": 3` and a slug as `"short_url": "4xKp2"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShortCode {
    /// A code assigned by a monotonically increasing counter.
    Sequence(u64),
    /// An opaque string code, random or user supplied.
    Slug(String),
}

const MAX_SLUG_LENGTH: usize = 32;

impl ShortCode {
    /// Creates a sequential code.
    pub fn sequence(value: u64) -> Self {
        Self::Sequence(value)
    }

    /// Creates a slug after validating it.
    ///
    /// Valid slugs are 1-32 characters and contain only `[a-zA-Z0-9_-]`.
    pub fn slug(code: impl Into<String>) -> Result<Self, ShortenerError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self::Slug(code))
    }

    /// Creates a slug without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self::Slug(code.into())
    }

    /// Parses a code as it appears in a request path.
    ///
    /// A canonical decimal number (no sign, no leading zero) becomes a
    /// [`ShortCode::Sequence`]; anything else must be a valid slug. The
    /// rendered form of the result is always identical to `raw`, so storage
    /// keys round-trip regardless of which variant a code ends up as.
    pub fn parse(raw: &str) -> Result<Self, ShortenerError> {
        let canonical_number = !raw.is_empty()
            && raw.bytes().all(|b| b.is_ascii_digit())
            && (raw == "0" || !raw.starts_with('0'));

        if canonical_number {
            if let Ok(value) = raw.parse::<u64>() {
                return Ok(Self::Sequence(value));
            }
        }

        Self::slug(raw)
    }

    /// Returns the counter value for sequential codes.
    pub fn as_sequence(&self) -> Option<u64> {
        match self {
            ShortCode::Sequence(value) => Some(*value),
            ShortCode::Slug(_) => None,
        }
    }

    /// The string under which this code is stored.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    fn validate(code: &str) -> Result<(), ShortenerError> {
        if code.is_empty() || code.len() > MAX_SLUG_LENGTH {
            return Err(ShortenerError::InvalidShortCode(format!(
                "length must be between 1 and {}, got {}",
                MAX_SLUG_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ShortenerError::InvalidShortCode(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortCode::Sequence(value) => write!(f, "{}", value),
            ShortCode::Slug(s) => f.write_str(s),
        }
    }
}
