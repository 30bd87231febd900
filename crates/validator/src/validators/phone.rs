//! Phone number validator
//!
//! Real phone validation depends on numbering plans, so the check is a
//! pluggable predicate. [`phone`] accepts every non-missing value;
//! [`phone_with`] takes your own predicate, and [`lenient_phone`] is a
//! ready-made one for common human formatting.
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let step = phone_with("mobile", lenient_phone);
//! let (_, errors) = run(&[step], data! { "mobile" => "+1 (415) 555-1234" });
//! assert!(errors.is_empty());
//!
//! let step = phone_with("mobile", lenient_phone);
//! let (_, errors) = run(&[step], data! { "mobile" => "call me" });
//! assert_eq!(errors.get("mobile"), Some("Must be a valid phone number."));
//! ```

use sift_value::{Errors, FieldKey, Value};

use crate::foundation::{Step, validator};

pub const PHONE_MESSAGE: &str = "Must be a valid phone number.";

const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Reports the key when a non-missing value fails the phone predicate.
///
/// The default predicate accepts everything.
#[must_use]
pub fn phone(key: impl Into<FieldKey>) -> Step {
    phone_with(key, |_| true)
}

/// Like [`phone`], with a caller-supplied validity check.
#[must_use]
pub fn phone_with<F>(key: impl Into<FieldKey>, is_valid: F) -> Step
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let key = key.into();
    validator("phone", move |data| match data.get(&key) {
        Some(value) if !value.is_missing() && !is_valid(value) => {
            Errors::new().with(&key, PHONE_MESSAGE)
        }
        _ => Errors::new(),
    })
}

/// Accepts text made of digits and common separators.
///
/// Allowed: digits, spaces, `-`, `.`, balanced parentheses, and a single
/// leading `+`. The number must have between 7 and 15 digits. Integers are
/// checked by their digit count.
#[must_use]
pub fn lenient_phone(value: &Value) -> bool {
    match value {
        Value::Text(text) => is_lenient_phone(text),
        Value::Integer(n) => {
            let digits = n.unsigned_abs().to_string().len();
            (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
        }
        _ => false,
    }
}

fn is_lenient_phone(input: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.');
    if !input.chars().all(allowed) {
        return false;
    }

    // '+' can only lead
    if input.rfind('+').is_some_and(|pos| pos != 0) {
        return false;
    }

    let mut depth = 0usize;
    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    if depth != 0 {
        return false;
    }

    let digits = input.chars().filter(char::is_ascii_digit).count();
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
}

// ============================================================================
// TESTS
// ============================================================================
