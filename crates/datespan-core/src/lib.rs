//! # datespan-core
//!
//! Sparse calendar-interval arithmetic with clock-injected projection.
//!
//! An [`Interval`] is a set of six independent calendar-field deltas (seconds,
//! minutes, hours, days, months, years). Each field is either *unset* (no
//! contribution) or a signed count, and `Some(0)` is a real zero contribution,
//! distinct from unset. Intervals combine with `+`/`-`/unary `-`, and project
//! onto an instant with [`Interval::from_now`] / [`Interval::ago`].
//!
//! ## Quick start
//!
//! ```rust
//! use datespan_core::{Interval, Unit};
//!
//! let trip = Interval::days(5) + Interval::months(3);
//! assert_eq!(trip.days, Some(5));
//! assert_eq!(trip.months, Some(3));
//! assert_eq!(trip.hours, None);
//!
//! // A week is sugar for seven days.
//! assert_eq!(Interval::from_unit(1, Unit::Week), Interval::days(7));
//!
//! // Unset is not zero: negating and re-adding zeroes the set fields only.
//! let balanced = -trip + trip;
//! assert_eq!(balanced.days, Some(0));
//! assert_eq!(balanced.hours, None);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] -- the `Interval` value type and its combination algebra
//! - [`unit`] -- calendar units for single-field construction
//! - [`projection`] -- `Clock` trait and checked calendar application
//! - [`error`] -- error types

pub mod error;
pub mod interval;
pub mod projection;
pub mod unit;

pub use error::ProjectionError;
pub use interval::Interval;
pub use projection::{Clock, SystemClock};
pub use unit::Unit;
