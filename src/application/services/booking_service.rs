//! Booking write path with the race-safe commit check.
//!
//! The search engine only proposes slots from a point-in-time read, so two
//! customers can be offered the same interval. This service closes that race
//! window by re-running the exact overlap predicate the search path uses
//! ([`crate::domain::conflict::overlaps`]) against current bookings
//! immediately before the insert, and rejecting with a conflict error when
//! the slot was taken between proposal and commit.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde_json::json;

use crate::domain::conflict::overlaps;
use crate::domain::entities::{Booking, NewBooking, ServiceOffering};
use crate::domain::repositories::{BookingRepository, ServiceRepository};
use crate::error::AppError;

/// A customer's request to book one slot.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub business_id: i64,
    pub service_id: i64,
    pub employee_id: Option<i64>,
    pub customer_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

/// Creates bookings, guarding against double-booking at commit time.
pub struct BookingService {
    service_repository: Arc<dyn ServiceRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        service_repository: Arc<dyn ServiceRepository>,
        booking_repository: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            service_repository,
            booking_repository,
        }
    }

    /// Books `[start, start + duration)` for the requested service.
    ///
    /// The interval end comes from the service's fixed duration. The commit
    /// check is tenant-wide, matching the predicate under which the slot was
    /// proposed, so proposals and commits can never disagree.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] when the service does not exist or is
    ///   inactive for this business.
    /// - [`AppError::Validation`] when the named employee is not assigned to
    ///   the service, or the interval would run past midnight.
    /// - [`AppError::Conflict`] when the slot was taken since it was
    ///   proposed; clients should re-search.
    pub async fn create_booking(&self, request: BookingRequest) -> Result<Booking, AppError> {
        let services = self
            .service_repository
            .list_active(request.business_id)
            .await?;
        let service = services
            .iter()
            .find(|s| s.id == request.service_id)
            .ok_or_else(|| {
                AppError::not_found(
                    "Service not found for this business",
                    json!({ "service_id": request.service_id, "business_id": request.business_id }),
                )
            })?;

        if let Some(employee_id) = request.employee_id
            && !service.employees.iter().any(|e| e.id == employee_id)
        {
            return Err(AppError::bad_request(
                "Employee is not assigned to this service",
                json!({ "employee_id": employee_id, "service_id": service.id }),
            ));
        }

        let end_time = booking_end(request.start_time, service).ok_or_else(|| {
            AppError::bad_request(
                "Booking would extend past midnight",
                json!({ "start_time": request.start_time.format("%H:%M").to_string(),
                        "duration_minutes": service.duration_minutes }),
            )
        })?;

        // Commit-time re-validation against the current snapshot.
        let mut bookings = self
            .booking_repository
            .list_on_date(request.business_id, request.date)
            .await?;
        bookings.retain(|b| b.status.is_blocking());

        if overlaps(&bookings, request.start_time, end_time, None) {
            metrics::counter!("booking_commit_conflicts_total").increment(1);
            return Err(AppError::conflict(
                "Slot is no longer available",
                json!({ "date": request.date.to_string(),
                        "start_time": request.start_time.format("%H:%M").to_string() }),
            ));
        }

        let booking = self
            .booking_repository
            .create(NewBooking {
                business_id: request.business_id,
                service_id: request.service_id,
                employee_id: request.employee_id,
                customer_name: request.customer_name,
                date: request.date,
                start_time: request.start_time,
                end_time,
            })
            .await?;

        tracing::info!(
            booking_id = booking.id,
            business_id = booking.business_id,
            service_id = booking.service_id,
            "booking created"
        );

        Ok(booking)
    }
}

fn booking_end(start: NaiveTime, service: &ServiceOffering) -> Option<NaiveTime> {
    let start_minutes = i64::from(start.num_seconds_from_midnight()) / 60;
    let end_minutes = start_minutes + service.duration_minutes;
    // NaiveTime cannot express 24:00, so an interval touching midnight is
    // rejected rather than wrapped.
    if service.duration_minutes <= 0 || end_minutes >= 24 * 60 {
        return None;
    }
    let seconds = u32::try_from(end_minutes * 60).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
