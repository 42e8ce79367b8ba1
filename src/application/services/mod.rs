//! Application services orchestrating the domain logic.

pub mod availability_service;
pub mod booking_service;
pub mod search_service;

pub use availability_service::AvailabilityService;
pub use booking_service::{BookingRequest, BookingService};
pub use search_service::{SearchPage, SearchService};
