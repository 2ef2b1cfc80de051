//! Projecting an interval onto an instant.
//!
//! Calendar fields are applied largest first: years and months move the
//! calendar date (day-of-month is clamped into short months), then days,
//! hours, minutes and seconds advance the result as a fixed duration. Every
//! step is checked; a result outside chrono's representable range surfaces as
//! a typed error instead of a panic.

use chrono::{DateTime, Duration, Months, Utc};

use crate::error::{ProjectionError, Result};
use crate::interval::Interval;

/// Source of the current instant.
///
/// Production code uses [`SystemClock`]; tests substitute a fixed instant so
/// projection results are exact.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl Interval {
    /// Apply this interval to `instant`.
    ///
    /// Years fold into months and shift the calendar date first; the
    /// remaining fields are summed into a fixed duration and added on top.
    ///
    /// # Errors
    /// Returns [`ProjectionError::ComponentOverflow`] if a field combination
    /// is too large to hand to the calendar, and
    /// [`ProjectionError::DateOutOfRange`] if the resulting date cannot be
    /// represented.
    pub fn apply_to(&self, instant: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let shifted = add_months(instant, total_months(self)?)?;
        shifted
            .checked_add_signed(time_delta(self)?)
            .ok_or(ProjectionError::DateOutOfRange)
    }

    /// The instant `clock` reports, advanced by this interval.
    pub fn from_now_with(&self, clock: &impl Clock) -> Result<DateTime<Utc>> {
        self.apply_to(clock.now())
    }

    /// The current system instant advanced by this interval.
    ///
    /// Reads the clock once per call; nothing is cached.
    pub fn from_now(&self) -> Result<DateTime<Utc>> {
        self.from_now_with(&SystemClock)
    }

    /// The instant `clock` reports, moved back by this interval.
    pub fn ago_with(&self, clock: &impl Clock) -> Result<DateTime<Utc>> {
        self.negate().from_now_with(clock)
    }

    /// The current system instant moved back by this interval.
    pub fn ago(&self) -> Result<DateTime<Utc>> {
        self.ago_with(&SystemClock)
    }
}

/// Fold years and months into a single month delta.
fn total_months(interval: &Interval) -> Result<i64> {
    interval
        .years
        .unwrap_or(0)
        .checked_mul(12)
        .and_then(|m| m.checked_add(interval.months.unwrap_or(0)))
        .ok_or_else(|| ProjectionError::ComponentOverflow("years + months".to_string()))
}

/// Shift the calendar date by `months`, clamping the day-of-month into short
/// months (Jan 31 + 1 month lands on the last day of February).
fn add_months(instant: DateTime<Utc>, months: i64) -> Result<DateTime<Utc>> {
    if months == 0 {
        return Ok(instant);
    }
    let magnitude = u32::try_from(months.unsigned_abs())
        .map_err(|_| ProjectionError::ComponentOverflow(format!("{} months", months)))?;
    let shifted = if months > 0 {
        instant.checked_add_months(Months::new(magnitude))
    } else {
        instant.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or(ProjectionError::DateOutOfRange)
}

/// Sum the fixed-length fields (days and below) into one duration.
fn time_delta(interval: &Interval) -> Result<Duration> {
    type MakeDelta = fn(i64) -> Option<Duration>;
    let parts: [(Option<i64>, MakeDelta, &str); 4] = [
        (interval.days, Duration::try_days, "days"),
        (interval.hours, Duration::try_hours, "hours"),
        (interval.minutes, Duration::try_minutes, "minutes"),
        (interval.seconds, Duration::try_seconds, "seconds"),
    ];

    let mut total = Duration::zero();
    for (field, make, name) in parts {
        let count = field.unwrap_or(0);
        let part = make(count)
            .ok_or_else(|| ProjectionError::ComponentOverflow(format!("{} {}", count, name)))?;
        total = total
            .checked_add(&part)
            .ok_or_else(|| ProjectionError::ComponentOverflow("combined time fields".to_string()))?;
    }
    Ok(total)
}
