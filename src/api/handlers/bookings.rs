//! Handler for booking creation.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::booking::{BookingResponse, CreateBookingRequest};
use crate::application::services::BookingRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a booking for a previously proposed slot.
///
/// # Endpoint
///
/// `POST /api/bookings`
///
/// # Behavior
///
/// The requested interval is re-validated against current bookings with the
/// same overlap rule the search uses, so a slot taken between proposal and
/// commit is rejected with **409 Conflict** ("slot no longer available") and
/// the client should re-search. Validation problems return 400, an unknown
/// service 404.
pub async fn create_booking_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let date = body
        .parse_date()
        .map_err(|e| AppError::bad_request(e, json!({})))?;
    let start_time = body
        .parse_start_time()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    if body.customer_name.trim().is_empty() {
        return Err(AppError::bad_request(
            "customerName must not be empty",
            json!({}),
        ));
    }

    let booking = state
        .booking_service
        .create_booking(BookingRequest {
            business_id: body.business_id,
            service_id: body.service_id,
            employee_id: body.employee_id,
            customer_name: body.customer_name,
            date,
            start_time,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}
