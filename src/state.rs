//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{BookingService, SearchService};
use crate::config::SearchLimits;
use crate::domain::repositories::BusinessRepository;

/// Application state shared across all handlers.
///
/// Services take repositories as trait objects, so tests can build a state
/// over in-memory fakes without a database.
#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<SearchService>,
    pub booking_service: Arc<BookingService>,
    pub business_repository: Arc<dyn BusinessRepository>,
    pub limits: SearchLimits,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        search_service: Arc<SearchService>,
        booking_service: Arc<BookingService>,
        business_repository: Arc<dyn BusinessRepository>,
        limits: SearchLimits,
    ) -> Self {
        Self {
            search_service,
            booking_service,
            business_repository,
            limits,
        }
    }
}
