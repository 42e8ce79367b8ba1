//! Booking creation request and response DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Booking;

/// Request body for `POST /api/bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub business_id: i64,
    pub service_id: i64,
    pub employee_id: Option<i64>,
    pub customer_name: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// 24-hour `HH:MM` start time.
    pub start_time: String,
}

impl CreateBookingRequest {
    pub fn parse_date(&self) -> Result<NaiveDate, String> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| format!("date must be YYYY-MM-DD, got '{}'", self.date))
    }

    pub fn parse_start_time(&self) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(&self.start_time, "%H:%M")
            .map_err(|_| format!("startTime must be a 24-hour HH:MM time, got '{}'", self.start_time))
    }
}

/// Response body for a created booking.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i64,
    pub business_id: i64,
    pub service_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        BookingResponse {
            id: booking.id,
            business_id: booking.business_id,
            service_id: booking.service_id,
            employee_id: booking.employee_id,
            customer_name: booking.customer_name,
            date: booking.date.to_string(),
            start_time: booking.start_time.format("%H:%M").to_string(),
            end_time: booking.end_time.format("%H:%M").to_string(),
            status: booking.status.to_string(),
        }
    }
}
