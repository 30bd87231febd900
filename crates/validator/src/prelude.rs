//! Prelude module for convenient imports.
//!
//! Provides a single `use sift_validator::prelude::*;` import that brings in
//! the record model, the step kinds, the runner and every built-in step.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let (data, errors) = run(
//!     &[trim(), required(["name"])],
//!     data! { "name" => "  " },
//! );
//! assert_eq!(data.get("name"), Some(&Value::text("")));
//! assert_eq!(errors.get("name"), Some("This is required."));
//! ```

// ============================================================================
// RECORD MODEL
// ============================================================================

pub use sift_value::{Data, Errors, FieldKey, Message, Value, ValueKind, data, is_missing};

// ============================================================================
// FOUNDATION: Steps, kinds, runner
// ============================================================================

pub use crate::foundation::{
    ConfigError, Outcome, Pipeline, Step, StepKind, parser, post_process, run, transform,
    validator,
};

// ============================================================================
// BUILT-IN STEPS
// ============================================================================

pub use crate::postprocess::{default_to, defaults, drop_keys};
pub use crate::transforms::{
    DatePattern, double, drop_empty, filter, float, integer, nil_empty, time, trim,
};
pub use crate::validators::{
    at_least_one_of, email, lenient_phone, max_length, min_length, password, phone, phone_with,
    required, time_before, time_not_after,
};
