//! The rotation engine: maps a reference date to the roster seat currently
//! on duty and a forecast of upcoming assignments.
//!
//! Pure functions over immutable inputs; the caller supplies "now"
//! explicitly, so results are reproducible and safe to recompute at any
//! time.

use crate::core::calendar::{add_days, next_occurrence_on_or_after, whole_weeks_between};
use crate::domain::model::{Assignment, RotationState, Weekday};
use chrono::NaiveDate;

/// Minimum number of forecast entries regardless of roster size.
const MIN_FORECAST_LEN: usize = 5;

/// Computes the current duty seat and the upcoming assignment forecast.
///
/// The first occurrence of `weekday` on or after `pivot` is occurrence #0 of
/// the rotation and belongs to roster seat 0. Each later occurrence advances
/// the rotation by one seat, wrapping around the roster.
///
/// A reference date before the pivot's first occurrence clamps the rotation
/// to seat 0 rather than extrapolating backward.
///
/// An empty roster yields `current_index = None` and an empty forecast.
pub fn compute_rotation_state(
    roster: &[String],
    weekday: Weekday,
    pivot: NaiveDate,
    now: NaiveDate,
) -> RotationState {
    let first_occurrence = next_occurrence_on_or_after(pivot, weekday);
    let next_occurrence = next_occurrence_on_or_after(now, weekday);

    if roster.is_empty() {
        return RotationState {
            current_index: None,
            next_occurrence,
            forecast: Vec::new(),
        };
    }

    let weeks_elapsed = whole_weeks_between(first_occurrence, next_occurrence).max(0);
    let current_index = weeks_elapsed.rem_euclid(roster.len() as i64) as usize;

    let count = roster.len().max(MIN_FORECAST_LEN);
    let forecast = (0..count)
        .map(|i| Assignment {
            date: add_days(next_occurrence, 7 * i as i64),
            name: roster[(current_index + i) % roster.len()].clone(),
        })
        .collect();

    RotationState {
        current_index: Some(current_index),
        next_occurrence,
        forecast,
    }
}

/// The forecast alone, for callers that do not need the current index.
pub fn compute_forecast(
    roster: &[String],
    weekday: Weekday,
    pivot: NaiveDate,
    now: NaiveDate,
) -> Vec<Assignment> {
    compute_rotation_state(roster, weekday, pivot, now).forecast
}
