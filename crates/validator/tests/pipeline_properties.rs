//! End-to-end behaviour of the built-in steps.

use pretty_assertions::assert_eq;
use sift_validator::prelude::*;

// ============================================================================
// PRESENCE
// ============================================================================

#[test]
fn required_reports_only_missing_keys() {
    let (_, errors) = run(&[required(["a"])], data!());
    assert_eq!(errors, Errors::new().with("a", "This is required."));

    let (_, errors) = run(&[required(["a"])], data! { "a" => "1" });
    assert!(errors.is_empty());

    let (_, errors) = run(&[required(["a"])], data! { "a" => 1 });
    assert!(errors.is_empty());
}

#[test]
fn at_least_one_of_reports_every_key() {
    let (_, errors) = run(&[at_least_one_of(["a", "b"])], data!());
    assert_eq!(
        errors,
        Errors::new()
            .with("a", "One of a or b is required.")
            .with("b", "One of a or b is required.")
    );

    let (_, errors) = run(&[at_least_one_of(["a", "b"])], data! { "a" => "1" });
    assert!(errors.is_empty());
}

// ============================================================================
// TRANSFORMS
// ============================================================================

#[test]
fn trim_strips_whitespace_and_newlines() {
    let (data, errors) = run(&[trim()], data! { "a" => " 1", "b" => "\n 2\n\n " });
    assert_eq!(data, data! { "a" => "1", "b" => "2" });
    assert!(errors.is_empty());
}

#[test]
fn integer_parses_or_reports() {
    for bad in [Value::text("1.1"), Value::text("1.a"), Value::text(" 1"), Value::Bool(true)] {
        let (data, errors) = run(&[integer("a")], data! { "a" => bad.clone() });
        assert_eq!(data.get("a"), Some(&bad));
        assert_eq!(errors.get("a"), Some("Must be a valid integer."));
    }

    for good in [Value::text("1"), Value::Integer(1), Value::Float(1.0)] {
        let (data, errors) = run(&[integer("a")], data! { "a" => good });
        assert_eq!(data.get("a"), Some(&Value::Integer(1)));
        assert!(errors.is_empty());
    }
}

#[test]
fn transforms_run_on_invalid_records() {
    let (data, errors) = run(&[required(["c"]), trim()], data! { "a" => " x " });
    assert_eq!(data, data! { "a" => "x" });
    assert!(errors.contains_key("c"));
}

// ============================================================================
// POST-PROCESSES
// ============================================================================

#[test]
fn defaults_only_on_valid_records() {
    let (data, _) = run(&[default_to("b", 2)], data! { "a" => 1 });
    assert_eq!(data, data! { "a" => 1, "b" => 2 });

    let (data, _) = run(&[required(["c"]), default_to("b", 2)], data! { "a" => 1 });
    assert_eq!(data, data! { "a" => 1 });
}

#[test]
fn drop_keys_only_on_valid_records() {
    let (data, _) = run(&[drop_keys(["b"])], data! { "a" => 1, "b" => 2 });
    assert_eq!(data, data! { "a" => 1 });

    let (data, _) = run(&[required(["c"]), drop_keys(["b"])], data! { "a" => 1, "b" => 2 });
    assert_eq!(data, data! { "a" => 1, "b" => 2 });
}

// ============================================================================
// DATE-TIMES
// ============================================================================

fn times(t1: &str, t2: &str) -> Data {
    data! { "t1" => t1.to_owned(), "t2" => t2.to_owned() }
}

#[test]
fn time_ordering_after_parsing() -> Result<(), ConfigError> {
    let parse = time("%Y-%m-%dT%H:%MZ", ["t1", "t2"])?;
    let strict = [parse.clone(), time_before("t1", "t2")];
    let loose = [parse, time_not_after("t1", "t2")];

    let equal = times("2024-01-02T10:30Z", "2024-01-02T10:30Z");
    let after = times("2024-01-02T10:31Z", "2024-01-02T10:30Z");
    let before = times("2024-01-02T10:29Z", "2024-01-02T10:30Z");

    let (_, errors) = run(&strict, equal.clone());
    assert_eq!(
        errors,
        Errors::new()
            .with("t1", "Must be before t2.")
            .with("t2", "Must be after t1.")
    );
    let (_, errors) = run(&strict, after.clone());
    assert_eq!(errors.len(), 2);
    let (_, errors) = run(&strict, before.clone());
    assert!(errors.is_empty());

    let (_, errors) = run(&loose, equal);
    assert!(errors.is_empty());
    let (_, errors) = run(&loose, after);
    assert_eq!(
        errors,
        Errors::new()
            .with("t1", "Can't be after t2.")
            .with("t2", "Can't be before t1.")
    );
    let (_, errors) = run(&loose, before);
    assert!(errors.is_empty());
    Ok(())
}

#[test]
fn unparsed_times_are_reported_once() -> Result<(), ConfigError> {
    let steps = [
        time("%Y-%m-%dT%H:%MZ", ["t1", "t2"])?,
        time_before("t1", "t2"),
    ];
    let (_, errors) = run(&steps, times("soon", "2024-01-02T10:30Z"));
    assert_eq!(errors, Errors::new().with("t1", "Must be a valid date & time."));
    Ok(())
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn first_message_for_a_field_wins() {
    let steps = [required(["email"]), email("email"), max_length("email", 3)];
    let (_, errors) = run(&steps, data! { "email" => "not an email" });
    assert_eq!(errors.get("email"), Some("Must be a valid email address."));
}

#[test]
fn pipelines_concatenate() {
    let clean = Pipeline::new().step(filter(["name"])).step(trim());
    let check = Pipeline::new().step(required(["name"])).step(max_length("name", 3));

    let outcome = clean.then(check).run(data! { "name" => " Ada ", "role" => "admin" });
    assert_eq!(outcome.into_result(), Ok(data! { "name" => "Ada" }));
}

#[test]
fn signup_form() {
    let signup: Pipeline = [
        filter(["email", "phone", "password", "password_confirmation", "age"]),
        trim(),
        nil_empty(["phone"]),
        required(["email", "password"]),
        email("email"),
        phone_with("phone", lenient_phone),
        min_length("password", 7),
        password("password", "password_confirmation"),
        integer("age"),
        drop_keys(["password_confirmation"]),
        default_to("age", 18),
    ]
    .into_iter()
    .collect();

    let outcome = signup.run(data! {
        "email" => "ada@example.com ",
        "phone" => "",
        "password" => "correct horse",
        "password_confirmation" => "correct horse",
        "admin" => true,
    });
    assert!(outcome.is_valid());
    assert_eq!(
        outcome.data,
        data! {
            "email" => "ada@example.com",
            "phone" => Value::Null,
            "password" => "correct horse",
            "age" => 18,
        }
    );

    let outcome = signup.run(data! {
        "email" => "ada",
        "phone" => "12",
        "password" => "short",
        "password_confirmation" => "shorts",
        "age" => "old",
    });
    let (data, errors) = outcome.into_parts();
    assert_eq!(
        errors,
        Errors::new()
            .with("email", "Must be a valid email address.")
            .with("phone", "Must be a valid phone number.")
            .with("password", "Must be more than 7 characters.")
            .with("password_confirmation", "Passwords do not match.")
            .with("age", "Must be a valid integer.")
    );
    assert!(data.contains_key("password_confirmation"));
}
