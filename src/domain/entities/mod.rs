//! Core domain entities.
//!
//! Businesses, services, employees and bookings are read-only snapshots
//! owned by external collaborators; slots are derived per search request.

pub mod booking;
pub mod business;
pub mod service;
pub mod slot;

pub use booking::{Booking, BookingStatus, NewBooking, UnknownBookingStatus};
pub use business::{Business, DayHours, Schedule};
pub use service::{Employee, ServiceOffering};
pub use slot::{SlotCandidate, TenantAvailability};
