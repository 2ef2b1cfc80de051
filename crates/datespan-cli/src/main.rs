//! `datespan` CLI -- prints what a few interval projections evaluate to.
//!
//! ## Usage
//!
//! ```sh
//! # Project from the system clock
//! datespan
//!
//! # Project from a fixed instant (reproducible output)
//! datespan --at 2026-01-15T12:00:00Z
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use datespan_core::{Clock, Interval, SystemClock};

#[derive(Parser)]
#[command(
    name = "datespan",
    version,
    about = "Calendar-interval arithmetic demonstration"
)]
struct Cli {
    /// Project from this RFC 3339 instant instead of the system clock
    #[arg(long, value_name = "RFC3339")]
    at: Option<String>,
}

/// Clock that always reports the same instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.at {
        Some(raw) => {
            let instant = DateTime::parse_from_rfc3339(&raw)
                .with_context(|| format!("'{}' is not a valid RFC 3339 instant", raw))?
                .with_timezone(&Utc);
            run(&FixedClock(instant))
        }
        None => run(&SystemClock),
    }
}

/// Print the demonstration lines against the given clock.
fn run(clock: &impl Clock) -> Result<()> {
    let now = clock.now();
    let in_8_days = Interval::days(8)
        .from_now_with(clock)
        .context("projecting 8 days forward")?;
    let two_weeks_back = Interval::weeks(2)
        .ago_with(clock)
        .context("projecting 2 weeks back")?;
    let trip = Interval::days(5) + Interval::months(3);
    let after_trip = trip
        .from_now_with(clock)
        .context("projecting 5 days + 3 months forward")?;

    println!("now:                    {}", now);
    println!("8 days later:           {}", in_8_days);
    println!("2 weeks before:         {}", two_weeks_back);
    println!("5 days, 3 months later: {}", after_trip);

    Ok(())
}
