//! Booking entity and status lifecycle.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

/// An existing reservation, immutable from the engine's point of view.
///
/// `[start_time, end_time)` is a half-open interval.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i64,
    pub business_id: i64,
    pub service_id: i64,
    pub employee_id: Option<i64>,
    pub customer_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
}

/// Input data for creating a booking through the write path.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub business_id: i64,
    pub service_id: i64,
    pub employee_id: Option<i64>,
    pub customer_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    /// Returns true if the booking occupies its interval.
    ///
    /// Cancelled and no-show bookings free the interval and never
    /// participate in conflict checks.
    pub fn is_blocking(self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::NoShow)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::NoShow => "NO_SHOW",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status string is not a known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown booking status: {0}")]
pub struct UnknownBookingStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "COMPLETED" => Ok(BookingStatus::Completed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "NO_SHOW" => Ok(BookingStatus::NoShow),
            other => Err(UnknownBookingStatus(other.to_string())),
        }
    }
}
