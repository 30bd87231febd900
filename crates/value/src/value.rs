//! Field values
//!
//! [`Value`] is a closed set of variants so every leaf step can match on it
//! exhaustively. Records are flat: there is no object variant, and a list
//! holds values of the same closed set.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

// ============================================================================
// VALUE
// ============================================================================

/// A single field value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null / absent value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// UTF-8 text
    Text(String),

    /// Date-time with a fixed UTC offset
    DateTime(DateTime<FixedOffset>),

    /// Flat sequence of values
    List(Vec<Value>),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the value counts as "not provided".
    ///
    /// Null is missing, text is missing when blank after trimming, a list is
    /// missing when empty. Numbers, booleans and date-times are never
    /// missing, even when zero or `false`.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Integer(_) | Self::Float(_) | Self::DateTime(_) => false,
        }
    }

    // ==================== Accessors ====================

    /// Borrow the text, if this is a text value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the integer, if this is an integer value
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the number as f64 (integers are widened)
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the boolean, if this is a boolean value
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the date-time, if this is a date-time value
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Borrow the items, if this is a list value
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Missing-value check for a lookup result: absent keys are missing too.
#[must_use]
pub fn is_missing(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_missing)
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Lightweight classification of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    Text,
    DateTime,
    List,
}

impl ValueKind {
    /// Lowercase name of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::DateTime => "datetime",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::DateTime(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v.fixed_offset())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::null(Value::Null, true)]
    #[case::empty_text(Value::from(""), true)]
    #[case::blank_text(Value::from(" \n\t "), true)]
    #[case::text(Value::from(" a "), false)]
    #[case::empty_list(Value::List(vec![]), true)]
    #[case::list(Value::from(vec![1]), false)]
    #[case::zero(Value::Integer(0), false)]
    #[case::zero_float(Value::Float(0.0), false)]
    #[case::false_bool(Value::Bool(false), false)]
    fn missing_dispatches_on_variant(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_missing(), expected);
    }

    #[test]
    fn absent_is_missing() {
        assert!(is_missing(None));
        assert!(!is_missing(Some(&Value::Integer(1))));
    }

    #[test]
    fn option_none_converts_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::text("x"));
    }

    #[test]
    fn numeric_accessors() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(1.5).as_i64(), None);
        assert_eq!(Value::Integer(3).kind(), ValueKind::Integer);
    }

    #[test]
    fn other_accessors() {
        assert!(Value::null().is_null());
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Integer(1).as_bool(), None);
        assert_eq!(
            Value::from(vec!["a", "b"]).as_list().map(<[Value]>::len),
            Some(2)
        );
        assert_eq!(Value::text("a").as_list(), None);
    }

    #[test]
    fn utc_datetime_keeps_instant() {
        let utc = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let value = Value::from(utc);
        assert_eq!(value.as_datetime().map(DateTime::timestamp), Some(1_700_000_000));
    }
}
