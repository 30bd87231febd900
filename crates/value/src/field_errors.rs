//! Field-level error messages
//!
//! One message per field. The only merge a pipeline needs is
//! [`Errors::merge_under`]: messages already recorded for a field are kept,
//! and the incoming batch only fills in fields that have none yet.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::key::FieldKey;

/// A human-readable message attached to a field.
pub type Message = Cow<'static, str>;

/// Map from field key to a single human-readable message.
///
/// An empty map means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors {
    messages: IndexMap<FieldKey, Message>,
}

impl Errors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message recorded for a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Records a message, replacing any previous one for the same field.
    pub fn insert(
        &mut self,
        key: impl Into<FieldKey>,
        message: impl Into<Message>,
    ) -> Option<Message> {
        self.messages.insert(key.into(), message.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<FieldKey>, message: impl Into<Message>) -> Self {
        self.insert(key, message);
        self
    }

    /// Merges `incoming` beneath the messages already recorded.
    ///
    /// On a key collision the existing message wins.
    #[must_use]
    pub fn merge_under(mut self, incoming: Errors) -> Self {
        for (key, message) in incoming.messages {
            self.messages.entry(key).or_insert(message);
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.messages.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &str)> {
        self.messages.iter().map(|(key, message)| (key, message.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K, M> FromIterator<(K, M)> for Errors
where
    K: Into<FieldKey>,
    M: Into<Message>,
{
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(key, message)| (key.into(), message.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Errors {
    type Item = (FieldKey, Message);
    type IntoIter = indexmap::map::IntoIter<FieldKey, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_under_keeps_existing_message() {
        let existing = Errors::new().with("a", "first");
        let incoming = Errors::new().with("a", "second").with("b", "other");

        let merged = existing.merge_under(incoming);

        assert_eq!(merged.get("a"), Some("first"));
        assert_eq!(merged.get("b"), Some("other"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_into_empty_takes_everything() {
        let incoming = Errors::new().with("a", "x");
        assert_eq!(Errors::new().merge_under(incoming.clone()), incoming);
    }

    #[test]
    fn insert_overwrites() {
        let mut errors = Errors::new();
        errors.insert("a", "old");
        errors.insert("a", String::from("new"));
        assert_eq!(errors.get("a"), Some("new"));
    }
}
