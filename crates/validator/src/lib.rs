//! # sift-validator
//!
//! Composable sanitization pipelines for flat records.
//!
//! A pipeline is a list of [`Step`]s folded over a `(Data, Errors)` pair.
//! Each step is one of four kinds, and the kind decides how the step's output
//! combines with what earlier steps produced. See [`foundation`] for the
//! rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let signup = Pipeline::new()
//!     .step(filter(["email", "age", "newsletter"]))
//!     .step(trim())
//!     .step(nil_empty(["newsletter"]))
//!     .step(required(["email", "age"]))
//!     .step(email("email"))
//!     .step(integer("age"))
//!     .step(default_to("newsletter", false));
//!
//! let outcome = signup.run(data! {
//!     "email" => " ada@example.com\n",
//!     "age" => "36",
//!     "is_admin" => true,
//! });
//!
//! assert!(outcome.is_valid());
//! assert_eq!(
//!     outcome.data,
//!     data! { "email" => "ada@example.com", "age" => 36, "newsletter" => false }
//! );
//! ```
//!
//! ## Built-in Steps
//!
//! - **Validators** ([`validators`]): [`required`](validators::required),
//!   [`at_least_one_of`](validators::at_least_one_of),
//!   [`max_length`](validators::max_length), [`min_length`](validators::min_length),
//!   [`email`](validators::email), [`phone`](validators::phone),
//!   [`password`](validators::password), [`time_before`](validators::time_before),
//!   [`time_not_after`](validators::time_not_after)
//! - **Transforms** ([`transforms`]): [`filter`](transforms::filter),
//!   [`trim`](transforms::trim), [`drop_empty`](transforms::drop_empty),
//!   [`nil_empty`](transforms::nil_empty), [`integer`](transforms::integer),
//!   [`float`](transforms::float), [`double`](transforms::double),
//!   [`time`](transforms::time)
//! - **Post-processes** ([`postprocess`]): [`drop_keys`](postprocess::drop_keys),
//!   [`defaults`](postprocess::defaults), [`default_to`](postprocess::default_to)
//!
//! ## Writing Steps
//!
//! Any closure of the right shape becomes a step through
//! [`validator`](foundation::validator), [`transform`](foundation::transform),
//! [`post_process`](foundation::post_process) or [`parser`](foundation::parser).
//! [`Step::new`] takes a raw `(Data, Errors)` function for anything else.

pub mod foundation;
pub mod postprocess;
pub mod prelude;
pub mod transforms;
pub mod validators;

pub use foundation::{ConfigError, Outcome, Pipeline, Step, StepKind, run};
pub use sift_value;
