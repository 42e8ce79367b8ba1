//! Opening-hours resolution for a business on a calendar date.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::domain::entities::Schedule;

/// Default window used when the stored schedule cannot be interpreted.
pub const DEFAULT_OPEN: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};
pub const DEFAULT_CLOSE: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Effective open/close window resolved for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub closed: bool,
}

impl DayWindow {
    fn default_open() -> Self {
        DayWindow {
            open: DEFAULT_OPEN,
            close: DEFAULT_CLOSE,
            closed: false,
        }
    }
}

/// Resolves the effective window for `date`.
///
/// An unparseable schedule, or a weekday with no entry, resolves to the
/// default `09:00`–`17:00` window; this never errors. A `closed` result
/// means the business is fully unavailable that day.
///
/// Caller-supplied `time_from`/`time_to` bounds are applied by the
/// availability service and fully REPLACE the resolved bounds, so a caller
/// may request slots outside actual business hours. Observed behavior of the
/// surrounding system, kept as-is pending product clarification.
pub fn resolve_window(schedule: &Schedule, date: NaiveDate) -> DayWindow {
    let days = match schedule {
        Schedule::Weekly(days) => days,
        Schedule::Unparseable => return DayWindow::default_open(),
    };

    match days.get(weekday_key(date)) {
        Some(hours) if hours.closed => DayWindow {
            open: hours.open,
            close: hours.close,
            closed: true,
        },
        Some(hours) => DayWindow {
            open: hours.open,
            close: hours.close,
            closed: false,
        },
        None => DayWindow::default_open(),
    }
}

/// Lowercase English weekday key, 0=Sunday numbering.
fn weekday_key(date: NaiveDate) -> &'static str {
    // num_days_from_sunday: 0=Sunday .. 6=Saturday
    match date.weekday().num_days_from_sunday() {
        0 => "sunday",
        1 => "monday",
        2 => "tuesday",
        3 => "wednesday",
        4 => "thursday",
        5 => "friday",
        _ => "saturday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DayHours;
    use std::collections::HashMap;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn weekly(entries: &[(&str, DayHours)]) -> Schedule {
        let mut days = HashMap::new();
        for (key, hours) in entries {
            days.insert((*key).to_string(), *hours);
        }
        Schedule::Weekly(days)
    }

    #[test]
    fn test_resolves_matching_weekday() {
        // 2026-08-31 is a Monday.
        let schedule = weekly(&[(
            "monday",
            DayHours {
                open: t(8, 0),
                close: t(20, 0),
                closed: false,
            },
        )]);

        let window = resolve_window(
            &schedule,
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        );
        assert_eq!(window.open, t(8, 0));
        assert_eq!(window.close, t(20, 0));
        assert!(!window.closed);
    }

    #[test]
    fn test_closed_day() {
        // 2026-08-30 is a Sunday.
        let schedule = weekly(&[(
            "sunday",
            DayHours {
                open: NaiveTime::MIN,
                close: NaiveTime::MIN,
                closed: true,
            },
        )]);

        let window = resolve_window(
            &schedule,
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        );
        assert!(window.closed);
    }

    #[test]
    fn test_unparseable_schedule_falls_back_to_default() {
        let window = resolve_window(
            &Schedule::Unparseable,
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        );
        assert_eq!(window.open, DEFAULT_OPEN);
        assert_eq!(window.close, DEFAULT_CLOSE);
        assert!(!window.closed);
    }

    #[test]
    fn test_missing_weekday_entry_falls_back_to_default() {
        let schedule = weekly(&[(
            "tuesday",
            DayHours {
                open: t(10, 0),
                close: t(14, 0),
                closed: false,
            },
        )]);

        // Monday has no entry.
        let window = resolve_window(
            &schedule,
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        );
        assert_eq!(window.open, DEFAULT_OPEN);
        assert_eq!(window.close, DEFAULT_CLOSE);
    }

    #[test]
    fn test_weekday_keys_cover_the_week() {
        // 2026-08-30 (Sunday) through 2026-09-05 (Saturday).
        let expected = [
            "sunday",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
        ];
        for (offset, key) in expected.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
                + chrono::Duration::days(offset as i64);
            assert_eq!(weekday_key(date), *key);
        }
    }
}
