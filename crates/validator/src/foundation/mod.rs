//! Pipeline execution model
//!
//! This module contains the building blocks every leaf step is made from:
//!
//! - **Step**: [`Step`], an opaque `(Data, Errors) -> (Data, Errors)` function
//! - **Kinds**: [`validator`], [`transform`], [`post_process`], [`parser`]
//! - **Runner**: [`run`], [`Pipeline`], [`Outcome`]
//! - **Errors**: [`ConfigError`] for construction-time misuse
//!
//! # Step kinds
//!
//! | Kind | Data | Errors |
//! |---|---|---|
//! | validator | passed through | body's errors merged *under* existing ones |
//! | transform | replaced by body | untouched |
//! | post-process | replaced only when no errors exist yet | untouched |
//! | parser | replaced by body | body's errors merged under existing ones |
//!
//! "Merged under" means that when two steps report a message for the same
//! field, the one that ran first is kept.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::foundation::{Pipeline, post_process, transform, validator};
//! use sift_value::{Errors, data};
//!
//! let pipeline = Pipeline::new()
//!     .step(transform("shout", |data| {
//!         data.map_values(|_, value| match value.as_str() {
//!             Some(text) => text.to_uppercase().into(),
//!             None => value,
//!         })
//!     }))
//!     .step(validator("no_bob", |data| {
//!         if data.get("name").and_then(|v| v.as_str()) == Some("BOB") {
//!             Errors::new().with("name", "Bob is not allowed.")
//!         } else {
//!             Errors::new()
//!         }
//!     }))
//!     .step(post_process("tag", |data| data.with("checked", true)));
//!
//! let outcome = pipeline.run(data! { "name" => "bob" });
//! assert!(!outcome.is_valid());
//! assert!(!outcome.data.contains_key("checked"));
//! ```

pub mod error;
pub mod kinds;
pub mod pipeline;
pub mod step;

pub use error::ConfigError;
pub use kinds::{parser, post_process, transform, validator};
pub use pipeline::{Outcome, Pipeline, run};
pub use step::{Step, StepKind};
