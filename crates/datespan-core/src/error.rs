//! Error types for interval projection.

use thiserror::Error;

/// Errors that can occur when projecting an interval onto an instant.
///
/// The interval algebra itself is total and never fails; only the calendar
/// application can.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A field, or a combination of fields, is too large to hand to the
    /// calendar arithmetic.
    #[error("interval component out of range: {0}")]
    ComponentOverflow(String),

    /// The resulting date falls outside the representable range.
    #[error("resulting date is outside the representable range")]
    DateOutOfRange,
}

/// Convenience alias used throughout datespan-core.
pub type Result<T> = std::result::Result<T, ProjectionError>;
