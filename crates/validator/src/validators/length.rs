//! Length validators
//!
//! Text length is measured in Unicode scalar values (chars), list length in
//! items. Absent and null values, and values with no length (numbers,
//! booleans, date-times), are left to [`required`](super::required).

use sift_value::{Errors, FieldKey, Value};

use crate::foundation::{Step, validator};

/// Measures a value, if it has a length at all.
#[inline]
fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::Text(text) => Some(text.chars().count()),
        Value::List(items) => Some(items.len()),
        _ => None,
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Reports the key when its length is greater than `max`.
#[must_use]
pub fn max_length(key: impl Into<FieldKey>, max: usize) -> Step {
    let key = key.into();
    let message = format!("Can't be more than {max} characters.");
    validator("max_length", move |data| match data.present(&key).and_then(measure) {
        Some(len) if len > max => Errors::new().with(&key, message.clone()),
        _ => Errors::new(),
    })
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Reports the key when its length is less than or equal to `min`.
///
/// The bound itself fails: `min_length("pin", 4)` needs at least five
/// characters.
#[must_use]
pub fn min_length(key: impl Into<FieldKey>, min: usize) -> Step {
    let key = key.into();
    let message = format!("Must be more than {min} characters.");
    validator("min_length", move |data| match data.present(&key).and_then(measure) {
        Some(len) if len <= min => Errors::new().with(&key, message.clone()),
        _ => Errors::new(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::run;
    use rstest::rstest;
    use sift_value::data;

    #[rstest]
    #[case("hello", false)]
    #[case("helloworld", false)]
    #[case("hello world", true)]
    fn max_length_boundaries(#[case] input: &str, #[case] fails: bool) {
        let (_, errors) = run(&[max_length("a", 10)], data! { "a" => input });
        assert_eq!(errors.contains_key("a"), fails);
    }

    #[test]
    fn max_length_message() {
        let (_, errors) = run(&[max_length("a", 3)], data! { "a" => "abcd" });
        assert_eq!(errors.get("a"), Some("Can't be more than 3 characters."));
    }

    #[rstest]
    #[case("", true)]
    #[case("abcd", true)]
    #[case("abcde", true)]
    #[case("abcdef", false)]
    fn min_length_rejects_the_bound(#[case] input: &str, #[case] fails: bool) {
        let (_, errors) = run(&[min_length("a", 5)], data! { "a" => input });
        assert_eq!(errors.contains_key("a"), fails);
    }

    #[test]
    fn min_length_message() {
        let (_, errors) = run(&[min_length("a", 5)], data! { "a" => "abc" });
        assert_eq!(errors.get("a"), Some("Must be more than 5 characters."));
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 5 chars, 6 bytes
        let (_, errors) = run(&[max_length("a", 5)], data! { "a" => "h\u{e9}llo" });
        assert!(errors.is_empty());
    }

    #[test]
    fn lists_count_items() {
        let (_, errors) = run(&[max_length("tags", 2)], data! { "tags" => vec!["a", "b", "c"] });
        assert!(errors.contains_key("tags"));
    }

    #[test]
    fn absent_and_unmeasurable_values_pass() {
        let steps = [max_length("a", 0), min_length("b", 5)];
        let (_, errors) = run(&steps, data! { "b" => 12 });
        assert!(errors.is_empty());
    }
}
