//! Derived per-person view of the forecast, used for display grouping.

use crate::domain::model::{Assignment, MemberSchedule};
use std::cmp::Ordering;

/// Builds the people view: one row per roster seat with that seat's forecast
/// dates, ordered by whose turn comes up first.
///
/// Seats without a forecast date sort last, keeping their original roster
/// order among themselves. Ties on the same date also keep roster order
/// (defensively: the forecast covers a full cycle, so each date maps to one
/// seat). The seat with the earliest date is flagged `highlighted`; it
/// always agrees with the rotation engine's current index for the same
/// snapshot.
pub fn compute_presentation_order(
    roster: &[String],
    forecast: &[Assignment],
) -> Vec<MemberSchedule> {
    let mut members: Vec<MemberSchedule> = roster
        .iter()
        .enumerate()
        .map(|(original_index, name)| {
            let mut dates: Vec<_> = forecast
                .iter()
                .filter(|a| a.name == *name)
                .map(|a| a.date)
                .collect();
            dates.sort();
            MemberSchedule {
                name: name.clone(),
                original_index,
                next_date: dates.first().copied(),
                dates,
                highlighted: false,
            }
        })
        .collect();

    // Stable sort: equal keys keep original roster order.
    members.sort_by(|a, b| match (a.next_date, b.next_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    if let Some(first) = members.iter_mut().find(|m| m.next_date.is_some()) {
        first.highlighted = true;
    }

    members
}
