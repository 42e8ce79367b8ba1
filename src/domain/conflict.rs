//! Interval conflict test against existing bookings.
//!
//! This is the single piece of interval arithmetic the engine depends on.
//! The booking write path re-runs the same predicate at commit time so that
//! proposals and commits can never disagree.

use chrono::NaiveTime;

use crate::domain::entities::Booking;

/// Half-open interval overlap: `[s1,e1)` and `[s2,e2)` overlap iff
/// `s1 < e2 && s2 < e1`. Strict on both sides, so back-to-back intervals
/// (`e1 == s2`) never conflict.
pub fn intervals_overlap(s1: NaiveTime, e1: NaiveTime, s2: NaiveTime, e2: NaiveTime) -> bool {
    s1 < e2 && s2 < e1
}

/// Returns true if `[start, end)` overlaps any booking in the slice.
///
/// With `employee_id` set, only that employee's bookings are considered;
/// otherwise the check is tenant-wide. The slice must already be filtered to
/// the target date and to blocking statuses (not cancelled / no-show); this
/// function performs no status filtering.
pub fn overlaps(
    bookings: &[Booking],
    start: NaiveTime,
    end: NaiveTime,
    employee_id: Option<i64>,
) -> bool {
    bookings
        .iter()
        .filter(|b| employee_id.is_none_or(|id| b.employee_id == Some(id)))
        .any(|b| intervals_overlap(start, end, b.start_time, b.end_time))
}
