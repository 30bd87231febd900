//! Built-in post-processes
//!
//! These only touch records that passed every earlier step. A record with
//! errors comes back exactly as it went in, so a form can be re-displayed
//! without defaults or dropped fields leaking into it.

use sift_value::{FieldKey, Value};

use crate::foundation::{Step, post_process};

/// Removes the listed keys from a valid record.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let steps = [drop_keys(["password_confirmation"])];
/// let (data, _) = run(&steps, data! { "password" => "x", "password_confirmation" => "x" });
/// assert_eq!(data, data! { "password" => "x" });
/// ```
#[must_use]
pub fn drop_keys<I, K>(keys: I) -> Step
where
    I: IntoIterator<Item = K>,
    K: Into<FieldKey>,
{
    let keys: Vec<FieldKey> = keys.into_iter().map(Into::into).collect();
    post_process("drop_keys", move |mut data| {
        for key in &keys {
            data.remove(key);
        }
        data
    })
}

/// Fills in keys a valid record does not have.
///
/// A key that is present keeps its value, even an explicit `Null`.
#[must_use]
pub fn defaults<I, K, V>(pairs: I) -> Step
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<FieldKey>,
    V: Into<Value>,
{
    let pairs: Vec<(FieldKey, Value)> = pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();
    post_process("defaults", move |mut data| {
        for (key, value) in &pairs {
            if !data.contains_key(key) {
                data.insert(key, value.clone());
            }
        }
        data
    })
}

/// Single-key form of [`defaults`].
#[must_use]
pub fn default_to(key: impl Into<FieldKey>, value: impl Into<Value>) -> Step {
    defaults([(key.into(), value.into())])
}
