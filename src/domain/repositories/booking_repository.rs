//! Repository trait for bookings.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{Booking, NewBooking};
use crate::error::AppError;

/// Read access to existing bookings, plus the single write used by the
/// booking commit path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Lists all bookings of one business on one calendar date, in every
    /// status. Callers filter out cancelled/no-show entries before running
    /// conflict checks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_on_date(
        &self,
        business_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError>;

    /// Persists a new booking with status PENDING.
    ///
    /// The caller must have re-validated the interval against current
    /// bookings immediately before this call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError>;
}
