//! HTTP request handlers for API endpoints.

pub mod bookings;
pub mod health;
pub mod search;

pub use bookings::create_booking_handler;
pub use health::health_handler;
pub use search::availability_search_handler;
