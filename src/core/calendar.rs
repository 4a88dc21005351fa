//! Calendar arithmetic for the weekly rotation.
//!
//! Everything here works on [`NaiveDate`], i.e. local calendar days with no
//! time-of-day component. A "day" is a calendar unit, not 24 hours, so DST
//! shifts in the local clock cannot skew the arithmetic.

use crate::domain::model::Weekday;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta};

/// Truncates a local timestamp to its calendar day.
///
/// Two timestamps on the same local calendar day map to equal days.
pub fn start_of_day(ts: DateTime<Local>) -> NaiveDate {
    ts.date_naive()
}

/// Adds `n` calendar days (`n` may be negative or zero), crossing month and
/// year boundaries as needed.
pub fn add_days(day: NaiveDate, n: i64) -> NaiveDate {
    day + TimeDelta::days(n)
}

/// Returns the smallest date `>= day` falling on `weekday`.
///
/// The lower bound is inclusive: a `day` that already matches is returned
/// unchanged. The answer is always within 6 days of the input.
pub fn next_occurrence_on_or_after(day: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = day.weekday().num_days_from_sunday() as i64;
    let ahead = (weekday.index() as i64 - current).rem_euclid(7);
    add_days(day, ahead)
}

/// Floor of (b - a) in whole weeks. Negative when `b` precedes `a`.
pub fn whole_weeks_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().div_euclid(7)
}
