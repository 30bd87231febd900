//! Built-in transforms
//!
//! Transforms rewrite the record and run whether or not earlier steps
//! reported errors.
//!
//! - **Shape**: [`filter`], [`drop_empty`], [`nil_empty`]
//! - **Text**: [`trim`]
//! - **Parsers**: [`integer`], [`float`], [`double`], [`time`]. These also
//!   report values they could not convert, and leave those values as they
//!   were.

pub mod datetime;
pub mod numeric;
pub mod shape;
pub mod text;

pub use datetime::{DATETIME_MESSAGE, DatePattern, time};
pub use numeric::{INTEGER_MESSAGE, NUMBER_MESSAGE, double, float, integer};
pub use shape::{drop_empty, filter, nil_empty};
pub use text::trim;
