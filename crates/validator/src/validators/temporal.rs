//! Date-time ordering validators
//!
//! Both validators compare two fields that already hold parsed date-times
//! (see [`time`](crate::transforms::time)). If either field is absent or
//! still holds unparsed text, nothing is reported: the parser has already
//! flagged that field.

use chrono::{DateTime, FixedOffset};
use sift_value::{Data, Errors, FieldKey};

use crate::foundation::{Step, validator};

fn both<'a>(
    data: &'a Data,
    less: &str,
    more: &str,
) -> Option<(&'a DateTime<FixedOffset>, &'a DateTime<FixedOffset>)> {
    Some((
        data.present(less)?.as_datetime()?,
        data.present(more)?.as_datetime()?,
    ))
}

/// Reports both keys unless `less` is strictly before `more`.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use sift_validator::prelude::*;
///
/// let at = |h| Value::from(Utc.with_ymd_and_hms(2024, 5, 1, h, 0, 0).unwrap());
/// let record = data! { "starts_at" => at(9), "ends_at" => at(9) };
///
/// let (_, errors) = run(&[time_before("starts_at", "ends_at")], record);
/// assert_eq!(errors.get("starts_at"), Some("Must be before ends_at."));
/// assert_eq!(errors.get("ends_at"), Some("Must be after starts_at."));
/// ```
#[must_use]
pub fn time_before(less: impl Into<FieldKey>, more: impl Into<FieldKey>) -> Step {
    let less = less.into();
    let more = more.into();
    let reported = Errors::new()
        .with(&less, format!("Must be before {more}."))
        .with(&more, format!("Must be after {less}."));
    validator("time_before", move |data| match both(data, &less, &more) {
        Some((earlier, later)) if earlier >= later => reported.clone(),
        _ => Errors::new(),
    })
}

/// Reports both keys when `less` is strictly after `more`; equal is fine.
#[must_use]
pub fn time_not_after(less: impl Into<FieldKey>, more: impl Into<FieldKey>) -> Step {
    let less = less.into();
    let more = more.into();
    let reported = Errors::new()
        .with(&less, format!("Can't be after {more}."))
        .with(&more, format!("Can't be before {less}."));
    validator("time_not_after", move |data| match both(data, &less, &more) {
        Some((earlier, later)) if earlier > later => reported.clone(),
        _ => Errors::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::run;
    use chrono::TimeZone;
    use rstest::rstest;
    use sift_value::{Value, data};

    fn at(minute: u32) -> Value {
        let utc = FixedOffset::east_opt(0).unwrap();
        Value::DateTime(utc.with_ymd_and_hms(2024, 1, 2, 10, minute, 0).unwrap())
    }

    fn reported(step: Step, t1: u32, t2: u32) -> bool {
        let (_, errors) = run(&[step], data! { "t1" => at(t1), "t2" => at(t2) });
        let both = errors.contains_key("t1") && errors.contains_key("t2");
        assert_eq!(both, !errors.is_empty(), "always both keys or neither");
        both
    }

    #[rstest]
    #[case::equal(30, 30, true)]
    #[case::after(31, 30, true)]
    #[case::before(29, 30, false)]
    fn strict_ordering(#[case] t1: u32, #[case] t2: u32, #[case] fails: bool) {
        assert_eq!(reported(time_before("t1", "t2"), t1, t2), fails);
    }

    #[rstest]
    #[case::equal(30, 30, false)]
    #[case::after(31, 30, true)]
    #[case::before(29, 30, false)]
    fn non_strict_ordering(#[case] t1: u32, #[case] t2: u32, #[case] fails: bool) {
        assert_eq!(reported(time_not_after("t1", "t2"), t1, t2), fails);
    }

    #[test]
    fn compares_instants_across_offsets() {
        let paris = FixedOffset::east_opt(3600).unwrap();
        // 10:30 in Paris is 09:30 UTC, before 10:00 UTC
        let t1 = Value::DateTime(paris.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap());
        let (_, errors) = run(&[time_before("t1", "t2")], data! { "t1" => t1, "t2" => at(0) });
        assert!(errors.is_empty());
    }

    #[test]
    fn skipped_unless_both_are_datetimes() {
        let steps = [time_before("t1", "t2"), time_not_after("t1", "t2")];
        let (_, errors) = run(&steps, data! { "t1" => at(30) });
        assert!(errors.is_empty());
        let (_, errors) = run(&steps, data! { "t1" => at(30), "t2" => "yesterday" });
        assert!(errors.is_empty());
    }
}
