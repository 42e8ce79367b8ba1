//! Repository traits consumed by the application services.
//!
//! These are the engine's only view of the surrounding system: read-only
//! snapshots of businesses, services and bookings, plus the single booking
//! insert used by the write path.

pub mod booking_repository;
pub mod business_repository;
pub mod service_repository;

pub use booking_repository::BookingRepository;
pub use business_repository::{BusinessFilters, BusinessRepository};
pub use service_repository::ServiceRepository;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use business_repository::MockBusinessRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
