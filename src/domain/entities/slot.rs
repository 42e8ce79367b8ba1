//! Derived slot types, created fresh on every search and never persisted.

use chrono::NaiveTime;

use crate::domain::entities::Business;

/// A concrete bookable start time for one service.
///
/// `employee_id`/`employee_name` are present when an assignable employee was
/// found; their absence is not an error, the slot is still offered.
#[derive(Debug, Clone)]
pub struct SlotCandidate {
    pub time: NaiveTime,
    pub service_id: i64,
    pub service_name: String,
    pub duration_minutes: i64,
    pub price: f64,
    pub employee_id: Option<i64>,
    pub employee_name: Option<String>,
}

impl SlotCandidate {
    /// Zero-padded 24-hour `HH:MM` rendering of the start time.
    pub fn hhmm(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Per-business availability summary, ranked by slot count in search results.
#[derive(Debug, Clone)]
pub struct TenantAvailability {
    pub business: Business,
    pub available_slots: Vec<SlotCandidate>,
    pub service_count: usize,
}
