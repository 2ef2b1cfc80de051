//! Calendar units for single-field interval construction.

use crate::interval::Interval;

/// The calendar unit a scalar count lands in.
///
/// `Week` is sugar for `Day`: a week count becomes `7 * count` days, since
/// [`Interval`] carries no weeks field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    /// An interval with exactly one field set to `count` of `unit`.
    ///
    /// Any integer is valid, including zero and negative counts; a zero count
    /// produces a set-to-zero field, not an unset one.
    pub fn from_unit(count: i64, unit: Unit) -> Interval {
        match unit {
            Unit::Second => Interval::seconds(count),
            Unit::Minute => Interval::minutes(count),
            Unit::Hour => Interval::hours(count),
            Unit::Day => Interval::days(count),
            Unit::Week => Interval::weeks(count),
            Unit::Month => Interval::months(count),
            Unit::Year => Interval::years(count),
        }
    }
}
