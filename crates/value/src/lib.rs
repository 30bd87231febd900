//! # sift-value
//!
//! The flat record model that sift pipelines operate on.
//!
//! - [`Value`]: closed tagged variant for a single field value
//! - [`FieldKey`]: atomic field identifier
//! - [`Data`]: the record itself, `FieldKey -> Value`
//! - [`Errors`]: field-level messages, `FieldKey -> message`
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_value::{Data, Value, data};
//!
//! let record: Data = data! { "name" => " Ada ", "age" => 36 };
//! assert_eq!(record.get("age"), Some(&Value::Integer(36)));
//! assert!(record.is_missing("email"));
//! ```
//!
//! Records are never nested: a value is a scalar, a date-time, or a flat list.

pub mod data;
pub mod error;
pub mod field_errors;
#[cfg(feature = "json")]
pub mod json;
pub mod key;
mod macros;
pub mod value;

pub use data::Data;
pub use error::ValueError;
pub use field_errors::{Errors, Message};
pub use key::FieldKey;
pub use value::{Value, ValueKind, is_missing};
