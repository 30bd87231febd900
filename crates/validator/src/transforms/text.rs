//! Text cleanup.

use sift_value::Value;

use crate::foundation::{Step, transform};

/// Trims leading and trailing whitespace, newlines included, on every text
/// value. Other values pass through.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let (data, _) = run(&[trim()], data! { "a" => " 1", "b" => "\n 2\n\n " });
/// assert_eq!(data, data! { "a" => "1", "b" => "2" });
/// ```
#[must_use]
pub fn trim() -> Step {
    transform("trim", |data| {
        data.map_values(|_, value| match value {
            Value::Text(text) => Value::Text(trim_text(text)),
            other => other,
        })
    })
}

/// Trims without reallocating when there is nothing to trim.
fn trim_text(text: String) -> String {
    let trimmed = text.trim();
    if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_owned()
    }
}
