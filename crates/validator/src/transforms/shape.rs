//! Field selection and empty-value handling.

use sift_value::{FieldKey, Value};

use crate::foundation::{Step, transform};

/// The keys an emptiness transform looks at; no keys means every key.
#[derive(Debug, Clone)]
struct Scope(Vec<FieldKey>);

impl Scope {
    fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<FieldKey>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    fn covers(&self, key: &FieldKey) -> bool {
        self.0.is_empty() || self.0.contains(key)
    }
}

/// Keeps only the listed keys.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let (data, _) = run(&[filter(["name"])], data! { "name" => "Ada", "admin" => true });
/// assert_eq!(data, data! { "name" => "Ada" });
/// ```
#[must_use]
pub fn filter<I, K>(keys: I) -> Step
where
    I: IntoIterator<Item = K>,
    K: Into<FieldKey>,
{
    let keys: Vec<FieldKey> = keys.into_iter().map(Into::into).collect();
    transform("filter", move |mut data| {
        data.retain(|key, _| keys.contains(key));
        data
    })
}

/// Removes fields whose value is missing.
///
/// With no keys every field is checked; otherwise only the listed ones.
#[must_use]
pub fn drop_empty<I, K>(keys: I) -> Step
where
    I: IntoIterator<Item = K>,
    K: Into<FieldKey>,
{
    let scope = Scope::new(keys);
    transform("drop_empty", move |mut data| {
        data.retain(|key, value| !(scope.covers(key) && value.is_missing()));
        data
    })
}

/// Replaces missing values with an explicit `Null`.
///
/// With no keys every field is checked; otherwise only the listed ones.
/// Keys that are absent stay absent.
#[must_use]
pub fn nil_empty<I, K>(keys: I) -> Step
where
    I: IntoIterator<Item = K>,
    K: Into<FieldKey>,
{
    let scope = Scope::new(keys);
    transform("nil_empty", move |data| {
        data.map_values(|key, value| {
            if scope.covers(key) && value.is_missing() {
                Value::Null
            } else {
                value
            }
        })
    })
}
