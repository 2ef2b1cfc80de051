//! The sparse `Interval` value type and its combination algebra.
//!
//! An interval is six independent optional calendar-field deltas. A `None`
//! field contributes nothing; `Some(0)` is a real, zero-valued contribution.
//! Combining two intervals decides presence per field before it sums values:
//! a field set in either operand is set in the result, and a field unset in
//! both stays unset.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A sparse set of calendar-field deltas.
///
/// Each field is independently unset (`None`) or a signed count. Intervals
/// are immutable `Copy` values; every operation returns a new interval.
/// Per-field sums saturate at the `i64` limits, so the algebra never fails.
///
/// `Interval::default()` is the all-unset interval, the identity for `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interval {
    pub seconds: Option<i64>,
    pub minutes: Option<i64>,
    pub hours: Option<i64>,
    pub days: Option<i64>,
    pub months: Option<i64>,
    pub years: Option<i64>,
}

impl Interval {
    /// An interval of `count` seconds; every other field unset.
    pub fn seconds(count: i64) -> Interval {
        Interval {
            seconds: Some(count),
            ..Interval::default()
        }
    }

    /// An interval of `count` minutes; every other field unset.
    pub fn minutes(count: i64) -> Interval {
        Interval {
            minutes: Some(count),
            ..Interval::default()
        }
    }

    /// An interval of `count` hours; every other field unset.
    pub fn hours(count: i64) -> Interval {
        Interval {
            hours: Some(count),
            ..Interval::default()
        }
    }

    /// An interval of `count` days; every other field unset.
    pub fn days(count: i64) -> Interval {
        Interval {
            days: Some(count),
            ..Interval::default()
        }
    }

    /// An interval of `count` weeks, stored as `7 * count` days.
    ///
    /// There is no weeks field; a week count lands in `days`.
    pub fn weeks(count: i64) -> Interval {
        Interval {
            days: Some(count.saturating_mul(7)),
            ..Interval::default()
        }
    }

    /// An interval of `count` months; every other field unset.
    pub fn months(count: i64) -> Interval {
        Interval {
            months: Some(count),
            ..Interval::default()
        }
    }

    /// An interval of `count` years; every other field unset.
    pub fn years(count: i64) -> Interval {
        Interval {
            years: Some(count),
            ..Interval::default()
        }
    }

    /// Flip the sign of every set field; unset fields stay unset.
    pub fn negate(self) -> Interval {
        Interval {
            seconds: self.seconds.map(i64::saturating_neg),
            minutes: self.minutes.map(i64::saturating_neg),
            hours: self.hours.map(i64::saturating_neg),
            days: self.days.map(i64::saturating_neg),
            months: self.months.map(i64::saturating_neg),
            years: self.years.map(i64::saturating_neg),
        }
    }

    /// Field-by-field combination of `self` and `other`.
    ///
    /// `sign` is +1 for addition, -1 for subtraction. Presence is decided
    /// before values are summed, so a field set to 0 on one side and unset on
    /// the other still comes out set.
    fn combine(self, other: Interval, sign: i64) -> Interval {
        Interval {
            seconds: combine_field(self.seconds, other.seconds, sign),
            minutes: combine_field(self.minutes, other.minutes, sign),
            hours: combine_field(self.hours, other.hours, sign),
            days: combine_field(self.days, other.days, sign),
            months: combine_field(self.months, other.months, sign),
            years: combine_field(self.years, other.years, sign),
        }
    }
}

/// Combine one field pair. Unset in both operands stays unset; otherwise the
/// unset side contributes 0 and the sum is set.
fn combine_field(left: Option<i64>, right: Option<i64>, sign: i64) -> Option<i64> {
    if left.is_none() && right.is_none() {
        return None;
    }
    Some(
        left.unwrap_or(0)
            .saturating_add(right.unwrap_or(0).saturating_mul(sign)),
    )
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        self.combine(rhs, 1)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        self.combine(rhs, -1)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        self.negate()
    }
}

impl AddAssign for Interval {
    fn add_assign(&mut self, rhs: Interval) {
        *self = *self + rhs;
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, rhs: Interval) {
        *self = *self - rhs;
    }
}
