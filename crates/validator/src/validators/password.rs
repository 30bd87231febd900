//! Password confirmation validator.

use sift_value::{Errors, FieldKey};

use crate::foundation::{Step, validator};

pub const PASSWORD_MESSAGE: &str = "Passwords do not match.";

/// Reports `confirm` when its value differs from `main`.
///
/// Two missing values (absent, null, blank) match each other, so an empty
/// form passes; use [`required`](super::required) to insist on a password.
#[must_use]
pub fn password(main: impl Into<FieldKey>, confirm: impl Into<FieldKey>) -> Step {
    let main = main.into();
    let confirm = confirm.into();
    validator("password", move |data| {
        let both_missing = data.is_missing(&main) && data.is_missing(&confirm);
        if both_missing || data.present(&main) == data.present(&confirm) {
            Errors::new()
        } else {
            Errors::new().with(&confirm, PASSWORD_MESSAGE)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::run;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sift_value::{Data, Value, data};

    #[test]
    fn matching_passwords() {
        let input = data! { "pw" => "secret", "pw2" => "secret" };
        let (_, errors) = run(&[password("pw", "pw2")], input);
        assert!(errors.is_empty());
    }

    #[test]
    fn mismatch_reported_on_confirmation_only() {
        let input = data! { "pw" => "secret", "pw2" => "secreT" };
        let (_, errors) = run(&[password("pw", "pw2")], input);
        assert_eq!(errors, Errors::new().with("pw2", PASSWORD_MESSAGE));
    }

    #[test]
    fn both_absent_match() {
        let (_, errors) = run(&[password("pw", "pw2")], data!());
        assert!(errors.is_empty());
        let (_, errors) = run(&[password("pw", "pw2")], data! { "pw" => Value::Null });
        assert!(errors.is_empty());
    }

    #[rstest]
    #[case::blank_against_absent(data! { "pw" => "" })]
    #[case::blank_against_empty(data! { "pw" => "  ", "pw2" => "" })]
    #[case::null_against_blank(data! { "pw" => Value::Null, "pw2" => " " })]
    fn missing_values_match(#[case] input: Data) {
        let (_, errors) = run(&[password("pw", "pw2")], input);
        assert!(errors.is_empty());
    }

    #[test]
    fn one_absent_mismatches() {
        let (_, errors) = run(&[password("pw", "pw2")], data! { "pw" => "secret" });
        assert!(errors.contains_key("pw2"));
    }
}
