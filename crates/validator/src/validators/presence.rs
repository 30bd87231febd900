//! Presence validators
//!
//! Both validators use the shared notion of a *missing* value: absent,
//! null, blank text, or an empty list. Numbers, booleans and date-times are
//! never missing.

use sift_value::{Errors, FieldKey, Message};

use crate::foundation::{Step, validator};

pub const REQUIRED_MESSAGE: &str = "This is required.";

// ============================================================================
// REQUIRED
// ============================================================================

/// Reports every listed key whose value is missing.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let (_, errors) = run(&[required(["a", "b"])], data! { "a" => 0, "b" => "  " });
/// assert!(!errors.contains_key("a"));
/// assert_eq!(errors.get("b"), Some("This is required."));
/// ```
#[must_use]
pub fn required<I, K>(keys: I) -> Step
where
    I: IntoIterator<Item = K>,
    K: Into<FieldKey>,
{
    let keys: Vec<FieldKey> = keys.into_iter().map(Into::into).collect();
    validator("required", move |data| {
        keys.iter()
            .filter(|key| data.is_missing(key))
            .map(|key| (key.clone(), REQUIRED_MESSAGE))
            .collect()
    })
}

// ============================================================================
// AT LEAST ONE OF
// ============================================================================

/// Reports every listed key when all of them are missing.
///
/// The message names the alternatives: `One of phone or email is required.`
#[must_use]
pub fn at_least_one_of<I, K>(keys: I) -> Step
where
    I: IntoIterator<Item = K>,
    K: Into<FieldKey>,
{
    let keys: Vec<FieldKey> = keys.into_iter().map(Into::into).collect();
    let message: Message = format!("One of {} is required.", join_keys(&keys)).into();
    validator("at_least_one_of", move |data| {
        if keys.iter().all(|key| data.is_missing(key)) {
            keys.iter()
                .map(|key| (key.clone(), message.clone()))
                .collect()
        } else {
            Errors::new()
        }
    })
}

/// Joins key names for a message: `a`, `a or b`, `a, b, or c`.
#[must_use]
pub fn join_keys(keys: &[FieldKey]) -> String {
    match keys {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(FieldKey::as_str).collect();
            format!("{}, or {last}", init.join(", "))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
