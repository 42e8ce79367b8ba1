//! API route configuration.

use crate::api::handlers::{availability_search_handler, create_booking_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET  /search/availability` - Marketplace availability search
/// - `POST /bookings`            - Create a booking (commit-time conflict checked)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/search/availability", get(availability_search_handler))
        .route("/bookings", post(create_booking_handler))
}
