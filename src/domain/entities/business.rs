//! Business (tenant) entity and its weekly opening-hours schedule.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::Deserialize;

/// A business publishing bookable services in the marketplace.
#[derive(Debug, Clone)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub schedule: Schedule,
    pub active: bool,
    pub suspended: bool,
}

impl Business {
    /// Returns true if the business may be offered slots at all.
    ///
    /// Suspended or inactive businesses never appear in search results.
    pub fn is_bookable(&self) -> bool {
        self.active && !self.suspended
    }
}

/// Effective open/close window for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub closed: bool,
}

/// Weekly opening-hours schedule.
///
/// The surrounding system stores this as an opaque serialized blob keyed by
/// lowercase English weekday name. Content that does not parse is kept as
/// [`Schedule::Unparseable`], which the resolver maps to a default window
/// rather than an error.
#[derive(Debug, Clone)]
pub enum Schedule {
    Weekly(HashMap<String, DayHours>),
    Unparseable,
}

#[derive(Debug, Deserialize)]
struct RawDayHours {
    open: Option<String>,
    close: Option<String>,
    #[serde(default)]
    closed: bool,
}

impl Schedule {
    /// Parses the stored schedule blob.
    ///
    /// Any failure (invalid JSON, unexpected shape, malformed `HH:MM` time)
    /// yields [`Schedule::Unparseable`]; this function cannot error.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Schedule::Unparseable;
        };

        let parsed: HashMap<String, RawDayHours> = match serde_json::from_str(raw) {
            Ok(map) => map,
            Err(_) => return Schedule::Unparseable,
        };

        let mut days = HashMap::with_capacity(parsed.len());
        for (day, raw_hours) in parsed {
            let Some(hours) = convert_day(&raw_hours) else {
                return Schedule::Unparseable;
            };
            days.insert(day.to_lowercase(), hours);
        }

        Schedule::Weekly(days)
    }
}

fn convert_day(raw: &RawDayHours) -> Option<DayHours> {
    // A closed day may legitimately omit its times.
    if raw.closed {
        return Some(DayHours {
            open: NaiveTime::MIN,
            close: NaiveTime::MIN,
            closed: true,
        });
    }

    let open = NaiveTime::parse_from_str(raw.open.as_deref()?, "%H:%M").ok()?;
    let close = NaiveTime::parse_from_str(raw.close.as_deref()?, "%H:%M").ok()?;

    Some(DayHours {
        open,
        close,
        closed: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_weekly_schedule() {
        let raw = r#"{
            "monday": {"open": "08:30", "close": "18:00", "closed": false},
            "sunday": {"closed": true}
        }"#;

        let Schedule::Weekly(days) = Schedule::parse(Some(raw)) else {
            panic!("expected a parsed weekly schedule");
        };

        let monday = days.get("monday").unwrap();
        assert_eq!(monday.open, t(8, 30));
        assert_eq!(monday.close, t(18, 0));
        assert!(!monday.closed);

        assert!(days.get("sunday").unwrap().closed);
    }

    #[test]
    fn test_parse_uppercase_day_keys_are_normalized() {
        let raw = r#"{"Monday": {"open": "09:00", "close": "17:00"}}"#;
        let Schedule::Weekly(days) = Schedule::parse(Some(raw)) else {
            panic!("expected a parsed weekly schedule");
        };
        assert!(days.contains_key("monday"));
    }

    #[test]
    fn test_parse_invalid_json_is_unparseable() {
        assert!(matches!(
            Schedule::parse(Some("{not json")),
            Schedule::Unparseable
        ));
    }

    #[test]
    fn test_parse_malformed_time_is_unparseable() {
        let raw = r#"{"monday": {"open": "9am", "close": "17:00"}}"#;
        assert!(matches!(Schedule::parse(Some(raw)), Schedule::Unparseable));
    }

    #[test]
    fn test_parse_missing_blob_is_unparseable() {
        assert!(matches!(Schedule::parse(None), Schedule::Unparseable));
    }

    #[test]
    fn test_suspended_business_is_not_bookable() {
        let business = Business {
            id: 1,
            name: "Cut & Go".to_string(),
            category: Some("beauty".to_string()),
            subcategory: None,
            city: Some("Berlin".to_string()),
            address: None,
            schedule: Schedule::Unparseable,
            active: true,
            suspended: true,
        };
        assert!(!business.is_bookable());
    }
}
