//! Record conversion errors.

use thiserror::Error;

/// Errors raised while building a record from external input.
///
/// These describe input that cannot be represented as a flat record at all;
/// field-level problems are never reported through this type.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Top-level input was not a key-value object
    #[error("expected an object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// Records are flat; an object value cannot be stored in a field
    #[error("nested objects are not supported")]
    NestedObject,

    /// A number with no i64 or f64 representation
    #[error("number {number} cannot be represented")]
    UnsupportedNumber { number: String },

    /// Conversion of a single field failed
    #[error("field '{key}': {source}")]
    Field {
        key: String,
        #[source]
        source: Box<ValueError>,
    },
}

impl ValueError {
    /// Wraps an error with the field it came from.
    #[must_use]
    pub fn in_field(self, key: impl Into<String>) -> Self {
        Self::Field {
            key: key.into(),
            source: Box::new(self),
        }
    }
}
