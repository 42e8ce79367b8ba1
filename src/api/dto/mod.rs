//! Data Transfer Objects for API request/response serialization.

pub mod booking;
pub mod health;
pub mod pagination;
pub mod search;
