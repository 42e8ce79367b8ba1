//! PostgreSQL repository implementations.

pub mod pg_booking_repository;
pub mod pg_business_repository;
pub mod pg_service_repository;

pub use pg_booking_repository::PgBookingRepository;
pub use pg_business_repository::PgBusinessRepository;
pub use pg_service_repository::PgServiceRepository;
