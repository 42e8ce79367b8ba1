//! Candidate slot generation for a single service.

use chrono::{NaiveTime, Timelike};

use crate::domain::conflict::overlaps;
use crate::domain::entities::{Booking, ServiceOffering, SlotCandidate};

/// Enumerates bookable start times for `service` within `[open, close]`.
///
/// Starts are walked at a fixed `stride_minutes` stride from `open`; the
/// last valid start is `close - duration`, inclusive. A candidate that
/// overlaps any blocking booking tenant-wide is dropped entirely. Surviving
/// candidates get the first listed conflict-free assigned employee attached;
/// when none is free (or none is assigned) the slot is still emitted without
/// employee fields. No load balancing across employees.
///
/// `bookings` must already be filtered to the target date and to blocking
/// statuses. Output is ascending by time. A duration longer than the window
/// yields an empty list.
pub fn generate(
    service: &ServiceOffering,
    bookings: &[Booking],
    open: NaiveTime,
    close: NaiveTime,
    stride_minutes: i64,
) -> Vec<SlotCandidate> {
    let open_min = minutes_from_midnight(open);
    let close_min = minutes_from_midnight(close);
    let duration = service.duration_minutes;

    if duration <= 0 || stride_minutes <= 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut start_min = open_min;

    while start_min + duration <= close_min {
        // Walked in minutes so the arithmetic cannot wrap past midnight.
        let (Some(start), Some(end)) = (
            time_from_minutes(start_min),
            time_from_minutes(start_min + duration),
        ) else {
            break;
        };

        if !overlaps(bookings, start, end, None) {
            let assigned = service
                .employees
                .iter()
                .find(|e| !overlaps(bookings, start, end, Some(e.id)));

            slots.push(SlotCandidate {
                time: start,
                service_id: service.id,
                service_name: service.name.clone(),
                duration_minutes: duration,
                price: service.base_price,
                employee_id: assigned.map(|e| e.id),
                employee_name: assigned.map(|e| e.name.clone()),
            });
        }

        start_min += stride_minutes;
    }

    slots
}

fn minutes_from_midnight(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight()) / 60
}

fn time_from_minutes(minutes: i64) -> Option<NaiveTime> {
    let seconds = u32::try_from(minutes.checked_mul(60)?).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
