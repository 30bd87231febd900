//! The record type.

use indexmap::IndexMap;
use serde::Serialize;

use crate::key::FieldKey;
use crate::value::{Value, is_missing};

/// A flat record: unique field keys mapped to values.
///
/// Insertion order is kept for stable output, but equality ignores it.
/// Pipeline steps take a `Data` by value and hand back the next one, so a
/// caller's record is never changed behind its back.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Data {
    fields: IndexMap<FieldKey, Value>,
}

impl Data {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value, `Null` included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the value only if it is stored and not `Null`.
    #[must_use]
    pub fn present(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    /// Returns `true` if the key is absent or its value is missing.
    #[must_use]
    pub fn is_missing(&self, key: &str) -> bool {
        is_missing(self.fields.get(key))
    }

    /// Returns `true` if the key is stored, even with a `Null` value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Stores a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<FieldKey>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<FieldKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes a key, keeping the order of the remaining fields.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Keeps only the fields for which the predicate holds.
    pub fn retain(&mut self, mut keep: impl FnMut(&FieldKey, &Value) -> bool) {
        self.fields.retain(|key, value| keep(key, value));
    }

    /// Rebuilds the record with every value passed through `f`.
    #[must_use]
    pub fn map_values(self, mut f: impl FnMut(&FieldKey, Value) -> Value) -> Self {
        self.fields
            .into_iter()
            .map(|(key, value)| {
                let value = f(&key, value);
                (key, value)
            })
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &Value)> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Data
where
    K: Into<FieldKey>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Data
where
    K: Into<FieldKey>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.fields.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for Data {
    type Item = (FieldKey, Value);
    type IntoIter = indexmap::map::IntoIter<FieldKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Data {
    type Item = (&'a FieldKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, FieldKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
