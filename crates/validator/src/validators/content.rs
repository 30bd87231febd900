//! Email format validator.

use std::sync::LazyLock;

use sift_value::{Errors, FieldKey};

use crate::foundation::{Step, validator};

pub const EMAIL_MESSAGE: &str = "Must be a valid email address.";

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern is a valid regex")
});

/// Returns `true` if the text looks like an email address.
#[must_use]
pub fn is_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

/// Reports the key when a non-missing value is not email-shaped.
///
/// Missing values pass; pair with [`required`](super::required) when the
/// address is mandatory. Non-text values always fail.
#[must_use]
pub fn email(key: impl Into<FieldKey>) -> Step {
    let key = key.into();
    validator("email", move |data| match data.get(&key) {
        Some(value) if !value.is_missing() && !value.as_str().is_some_and(is_email) => {
            Errors::new().with(&key, EMAIL_MESSAGE)
        }
        _ => Errors::new(),
    })
}
