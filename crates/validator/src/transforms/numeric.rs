//! Numeric parsers
//!
//! Each parser reads one field and rewrites it as a number. Text is parsed
//! exactly as given (run [`trim`](super::trim) first to accept padding),
//! numbers are cast between integer and float, and anything else is
//! reported. A value that cannot be converted stays in the record as it was.

use std::num::{ParseFloatError, ParseIntError};

use sift_value::{Errors, FieldKey, Value, ValueKind};

use crate::foundation::{Step, parser};

pub const INTEGER_MESSAGE: &str = "Must be a valid integer.";
pub const NUMBER_MESSAGE: &str = "Must be a valid number.";

/// 2^63, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Why a value could not be converted. Logged, never shown to the user.
#[derive(Debug, thiserror::Error)]
enum CastError {
    #[error("text is not an integer")]
    Integer(#[from] ParseIntError),

    #[error("text is not a number")]
    Float(#[from] ParseFloatError),

    #[error("number is out of range")]
    OutOfRange,

    #[error("{0} values cannot be cast to a number")]
    Kind(ValueKind),
}

type Cast = fn(&Value) -> Result<Value, CastError>;

/// Parses or casts `key` to an integer. Floats are truncated toward zero.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let (data, errors) = run(&[integer("age")], data! { "age" => "42" });
/// assert_eq!(data.get("age"), Some(&Value::Integer(42)));
/// assert!(errors.is_empty());
///
/// let (data, errors) = run(&[integer("age")], data! { "age" => "4.2" });
/// assert_eq!(data.get("age"), Some(&Value::text("4.2")));
/// assert_eq!(errors.get("age"), Some("Must be a valid integer."));
/// ```
#[must_use]
pub fn integer(key: impl Into<FieldKey>) -> Step {
    cast_step("integer", key.into(), INTEGER_MESSAGE, to_integer)
}

/// Parses or casts `key` to a single-precision float, stored widened.
#[must_use]
pub fn float(key: impl Into<FieldKey>) -> Step {
    cast_step("float", key.into(), NUMBER_MESSAGE, to_single)
}

/// Parses or casts `key` to a double-precision float.
#[must_use]
pub fn double(key: impl Into<FieldKey>) -> Step {
    cast_step("double", key.into(), NUMBER_MESSAGE, to_double)
}

fn cast_step(name: &'static str, key: FieldKey, message: &'static str, cast: Cast) -> Step {
    parser(name, move |mut data| {
        let result = match data.present(&key) {
            Some(value) => cast(value),
            None => return (data, Errors::new()),
        };
        match result {
            Ok(number) => {
                data.insert(&key, number);
                (data, Errors::new())
            }
            Err(error) => {
                tracing::debug!(step = name, field = %key, %error, "cast failed");
                (data, Errors::new().with(&key, message))
            }
        }
    })
}

fn to_integer(value: &Value) -> Result<Value, CastError> {
    match value {
        Value::Text(text) => Ok(Value::Integer(text.parse()?)),
        Value::Integer(number) => Ok(Value::Integer(*number)),
        Value::Float(number) => truncate(*number).map(Value::Integer),
        other => Err(CastError::Kind(other.kind())),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(number: f64) -> Result<i64, CastError> {
    let whole = number.trunc();
    if whole.is_finite() && (-I64_BOUND..I64_BOUND).contains(&whole) {
        Ok(whole as i64)
    } else {
        Err(CastError::OutOfRange)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn to_single(value: &Value) -> Result<Value, CastError> {
    let single: f32 = match value {
        Value::Text(text) => text.parse()?,
        Value::Integer(number) => *number as f32,
        Value::Float(number) => *number as f32,
        other => return Err(CastError::Kind(other.kind())),
    };
    finite(f64::from(single))
}

#[allow(clippy::cast_precision_loss)]
fn to_double(value: &Value) -> Result<Value, CastError> {
    let double: f64 = match value {
        Value::Text(text) => text.parse()?,
        Value::Integer(number) => *number as f64,
        Value::Float(number) => *number,
        other => return Err(CastError::Kind(other.kind())),
    };
    finite(double)
}

/// Rejects `inf`, `NaN` and values that overflowed the target width.
fn finite(number: f64) -> Result<Value, CastError> {
    if number.is_finite() {
        Ok(Value::Float(number))
    } else {
        Err(CastError::OutOfRange)
    }
}
