//! Availability search request and response DTOs.
//!
//! Field names follow the surrounding system's API contract (camelCase).

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::api::dto::pagination::PaginationMeta;
use crate::config::SearchLimits;
use crate::domain::entities::{Business, SlotCandidate, TenantAvailability};

/// Query parameters for `GET /api/search/availability`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryParams {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub city: Option<String>,
    pub date: Option<String>,
    pub time_from: Option<String>,
    pub time_to: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchQueryParams {
    /// Resolves the target date.
    ///
    /// A missing or malformed date defaults to today in the server's local
    /// timezone; it is never rejected.
    pub fn resolve_date(&self) -> NaiveDate {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parses the optional `HH:MM` time bounds.
    pub fn parse_time_bounds(&self) -> Result<(Option<NaiveTime>, Option<NaiveTime>), String> {
        Ok((
            parse_hhmm(self.time_from.as_deref(), "timeFrom")?,
            parse_hhmm(self.time_to.as_deref(), "timeTo")?,
        ))
    }

    /// Validates pagination and applies defaults and the hard limit cap.
    ///
    /// Returns `(page, limit)`; `page` must be > 0, `limit` must be > 0 and
    /// is clamped to `max_page_limit`.
    pub fn validate_pagination(&self, limits: &SearchLimits) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err("page must be greater than 0".to_string());
        }

        let limit = self.limit.unwrap_or(limits.default_page_limit);
        if limit == 0 {
            return Err("limit must be greater than 0".to_string());
        }

        Ok((page, limit.min(limits.max_page_limit)))
    }
}

fn parse_hhmm(value: Option<&str>, field: &str) -> Result<Option<NaiveTime>, String> {
    match value {
        None => Ok(None),
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M")
            .map(Some)
            .map_err(|_| format!("{field} must be a 24-hour HH:MM time, got '{raw}'")),
    }
}

/// Response body for `GET /api/search/availability`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<TenantResultItem>,
    pub pagination: PaginationMeta,
    pub search_params: SearchParamsEcho,
}

/// One ranked business with its merged slot list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantResultItem {
    pub business: BusinessSummary,
    pub available_slots: Vec<SlotItem>,
    pub service_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
}

/// One bookable slot as exposed to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotItem {
    pub time: String,
    pub service_id: i64,
    pub service_name: String,
    pub duration: i64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
}

/// Echo of the parameters the search actually ran with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParamsEcho {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub city: Option<String>,
    pub date: String,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
}

impl From<&Business> for BusinessSummary {
    fn from(business: &Business) -> Self {
        BusinessSummary {
            id: business.id,
            name: business.name.clone(),
            category: business.category.clone(),
            subcategory: business.subcategory.clone(),
            city: business.city.clone(),
            address: business.address.clone(),
        }
    }
}

impl From<&SlotCandidate> for SlotItem {
    fn from(slot: &SlotCandidate) -> Self {
        SlotItem {
            time: slot.hhmm(),
            service_id: slot.service_id,
            service_name: slot.service_name.clone(),
            duration: slot.duration_minutes,
            price: slot.price,
            employee_id: slot.employee_id,
            employee_name: slot.employee_name.clone(),
        }
    }
}

impl From<&TenantAvailability> for TenantResultItem {
    fn from(tenant: &TenantAvailability) -> Self {
        TenantResultItem {
            business: BusinessSummary::from(&tenant.business),
            available_slots: tenant.available_slots.iter().map(SlotItem::from).collect(),
            service_count: tenant.service_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchQueryParams {
        SearchQueryParams {
            category: None,
            subcategory: None,
            city: None,
            date: None,
            time_from: None,
            time_to: None,
            page: None,
            limit: None,
        }
    }

    #[test]
    fn test_valid_date_is_parsed() {
        let mut p = params();
        p.date = Some("2026-08-31".to_string());
        assert_eq!(
            p.resolve_date(),
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()
        );
    }

    #[test]
    fn test_invalid_date_defaults_to_today() {
        let mut p = params();
        p.date = Some("31/08/2026".to_string());
        assert_eq!(p.resolve_date(), Local::now().date_naive());
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        assert_eq!(params().resolve_date(), Local::now().date_naive());
    }

    #[test]
    fn test_time_bounds_parse() {
        let mut p = params();
        p.time_from = Some("10:30".to_string());
        let (from, to) = p.parse_time_bounds().unwrap();
        assert_eq!(from, NaiveTime::from_hms_opt(10, 30, 0));
        assert!(to.is_none());
    }

    #[test]
    fn test_malformed_time_bound_is_rejected() {
        let mut p = params();
        p.time_to = Some("6pm".to_string());
        assert!(p.parse_time_bounds().is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let limits = SearchLimits::default();
        let (page, limit) = params().validate_pagination(&limits).unwrap();
        assert_eq!(page, 1);
        assert_eq!(limit, 20);
    }

    #[test]
    fn test_limit_is_capped_at_hard_maximum() {
        let limits = SearchLimits::default();
        let mut p = params();
        p.limit = Some(500);
        let (_, limit) = p.validate_pagination(&limits).unwrap();
        assert_eq!(limit, 50);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let limits = SearchLimits::default();
        let mut p = params();
        p.page = Some(0);
        assert!(p.validate_pagination(&limits).is_err());
    }

    #[test]
    fn test_slot_item_omits_absent_employee() {
        let slot = SlotCandidate {
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            service_id: 1,
            service_name: "Haircut".to_string(),
            duration_minutes: 60,
            price: 25.0,
            employee_id: None,
            employee_name: None,
        };
        let json = serde_json::to_value(SlotItem::from(&slot)).unwrap();
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["serviceName"], "Haircut");
        assert!(json.get("employeeId").is_none());
    }
}
