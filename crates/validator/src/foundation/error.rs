//! Construction-time errors
//!
//! Bad user input never shows up here: it is recorded in the
//! [`Errors`](sift_value::Errors) map. `ConfigError` is for steps that were
//! built wrong, which the caller is expected to fix in code.

/// A step could not be built from the arguments it was given.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The date-time pattern is empty or uses an unknown specifier.
    #[error("invalid date-time pattern: {pattern:?}")]
    InvalidDatePattern { pattern: String },
}
