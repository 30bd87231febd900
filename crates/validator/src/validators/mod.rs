//! Built-in validators
//!
//! Every validator here is a [`validator`](crate::foundation::validator)
//! step: it reports messages and leaves the record alone.
//!
//! # Categories
//!
//! - **Presence**: [`required`], [`at_least_one_of`]
//! - **Length**: [`max_length`], [`min_length`]
//! - **Format**: [`email`], [`phone`], [`phone_with`]
//! - **Cross-field**: [`password`], [`time_before`], [`time_not_after`]
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let signup = Pipeline::new()
//!     .step(required(["email", "password"]))
//!     .step(email("email"))
//!     .step(min_length("password", 7))
//!     .step(password("password", "password_confirmation"));
//!
//! let outcome = signup.run(data! { "email" => "ada@example.com", "password" => "hunter22" });
//! assert_eq!(
//!     outcome.errors.get("password_confirmation"),
//!     Some("Passwords do not match.")
//! );
//! ```

pub mod content;
pub mod length;
pub mod password;
pub mod phone;
pub mod presence;
pub mod temporal;

pub use content::{EMAIL_MESSAGE, email, is_email};
pub use length::{max_length, min_length};
pub use password::{PASSWORD_MESSAGE, password};
pub use phone::{PHONE_MESSAGE, lenient_phone, phone, phone_with};
pub use presence::{REQUIRED_MESSAGE, at_least_one_of, join_keys, required};
pub use temporal::{time_before, time_not_after};
