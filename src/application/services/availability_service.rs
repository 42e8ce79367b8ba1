//! Per-tenant availability aggregation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::config::SearchLimits;
use crate::domain::entities::{Business, SlotCandidate, TenantAvailability};
use crate::domain::hours::resolve_window;
use crate::domain::repositories::{BookingRepository, ServiceRepository};
use crate::domain::slots;
use crate::error::AppError;

/// Computes the merged slot list for one business on one date.
///
/// Pure read/compute: resolves opening hours once, fetches services and
/// bookings once, runs slot generation per service, then merges.
pub struct AvailabilityService {
    service_repository: Arc<dyn ServiceRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    limits: SearchLimits,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        service_repository: Arc<dyn ServiceRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        limits: SearchLimits,
    ) -> Self {
        Self {
            service_repository,
            booking_repository,
            limits,
        }
    }

    /// Aggregates availability for `business` on `date`.
    ///
    /// Only the first `max_services_per_business` eligible services are
    /// considered. Per-service slot lists are concatenated, deduplicated by
    /// start time (first occurrence keeps its service metadata) and sorted
    /// ascending; the merged view answers "is this business open at this
    /// time at all", not "what are all options at this time".
    ///
    /// Caller-supplied `time_from`/`time_to` REPLACE the resolved opening
    /// hours bound-for-bound rather than intersecting with them (see
    /// [`crate::domain::hours::resolve_window`]).
    ///
    /// A closed day, or a business with no eligible services, yields an
    /// empty slot list, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when a collaborator fetch fails; the
    /// search orchestrator downgrades that to "zero slots for this business".
    pub async fn aggregate(
        &self,
        business: Business,
        date: NaiveDate,
        time_from: Option<NaiveTime>,
        time_to: Option<NaiveTime>,
    ) -> Result<TenantAvailability, AppError> {
        let window = resolve_window(&business.schedule, date);
        if window.closed {
            return Ok(TenantAvailability {
                business,
                available_slots: Vec::new(),
                service_count: 0,
            });
        }

        let open = time_from.unwrap_or(window.open);
        let close = time_to.unwrap_or(window.close);

        let services = self.service_repository.list_active(business.id).await?;
        if services.is_empty() {
            return Ok(TenantAvailability {
                business,
                available_slots: Vec::new(),
                service_count: 0,
            });
        }

        // One booking fetch per business per search, shared across services.
        let mut bookings = self.booking_repository.list_on_date(business.id, date).await?;
        bookings.retain(|b| b.status.is_blocking());

        let mut merged: Vec<SlotCandidate> = Vec::new();
        for service in services.iter().take(self.limits.max_services_per_business) {
            merged.extend(slots::generate(
                service,
                &bookings,
                open,
                close,
                self.limits.slot_stride_minutes,
            ));
        }

        let mut seen = HashSet::new();
        merged.retain(|slot| seen.insert(slot.time));
        merged.sort_by_key(|slot| slot.time);

        tracing::debug!(
            business_id = business.id,
            slots = merged.len(),
            services = services.len(),
            "aggregated tenant availability"
        );

        Ok(TenantAvailability {
            business,
            available_slots: merged,
            service_count: services.len(),
        })
    }
}
