//! Date-time parser
//!
//! Patterns use chrono's strftime syntax. A pattern without an offset reads
//! its input as UTC; a pattern with only a date reads it as midnight UTC.

use std::fmt;
use std::str::FromStr;

use chrono::format::{self, Item, ParseError, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveTime};
use sift_value::{Errors, FieldKey, Value};

use crate::foundation::{ConfigError, Step, parser};

pub const DATETIME_MESSAGE: &str = "Must be a valid date & time.";

/// A strftime pattern checked once, when the step is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern(String);

impl DatePattern {
    /// Checks that `pattern` is non-empty and only uses known specifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDatePattern`] otherwise.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        let unknown = StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        if pattern.is_empty() || unknown {
            return Err(ConfigError::InvalidDatePattern { pattern });
        }
        Ok(Self(pattern))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses `text`, which must match the whole pattern.
    ///
    /// # Errors
    ///
    /// Returns chrono's [`ParseError`] when the text does not match or
    /// names an impossible date.
    pub fn parse(&self, text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, StrftimeItems::new(&self.0))?;
        parsed
            .to_datetime()
            .or_else(|_| {
                parsed
                    .to_naive_datetime_with_offset(0)
                    .map(|naive| naive.and_utc().fixed_offset())
            })
            .or_else(|_| {
                parsed
                    .to_naive_date()
                    .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
            })
    }
}

impl FromStr for DatePattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses each listed text field into a date-time.
///
/// Fields already holding a date-time are kept. Absent and null fields are
/// skipped. Anything else that fails to parse is reported and left as it was.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDatePattern`] when `pattern` is empty or
/// uses an unknown specifier.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let step = time("%Y-%m-%dT%H:%MZ", ["starts_at"])?;
/// let (data, errors) = run(&[step], data! { "starts_at" => "2024-01-02T10:30Z" });
///
/// assert!(errors.is_empty());
/// assert_eq!(
///     data.get("starts_at").and_then(Value::as_datetime).map(|t| t.to_rfc3339()),
///     Some("2024-01-02T10:30:00+00:00".to_owned()),
/// );
/// # Ok::<(), sift_validator::ConfigError>(())
/// ```
pub fn time<I, K>(pattern: impl Into<String>, keys: I) -> Result<Step, ConfigError>
where
    I: IntoIterator<Item = K>,
    K: Into<FieldKey>,
{
    let pattern = DatePattern::new(pattern)?;
    let keys: Vec<FieldKey> = keys.into_iter().map(Into::into).collect();
    Ok(parser("time", move |mut data| {
        let mut errors = Errors::new();
        for key in &keys {
            let parsed = match data.present(key) {
                None | Some(Value::DateTime(_)) => continue,
                Some(Value::Text(text)) => pattern.parse(text),
                Some(other) => {
                    tracing::debug!(field = %key, kind = %other.kind(), "not a date-time");
                    errors.insert(key, DATETIME_MESSAGE);
                    continue;
                }
            };
            match parsed {
                Ok(instant) => {
                    data.insert(key, instant);
                }
                Err(error) => {
                    tracing::debug!(field = %key, %pattern, %error, "date-time parse failed");
                    errors.insert(key, DATETIME_MESSAGE);
                }
            }
        }
        (data, errors)
    }))
}
