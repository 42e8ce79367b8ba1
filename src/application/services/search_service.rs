//! Marketplace availability search with bounded per-business fan-out.

use std::cmp::Reverse;
use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, NaiveTime};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{Duration, timeout};

use crate::application::services::AvailabilityService;
use crate::config::SearchLimits;
use crate::domain::entities::TenantAvailability;
use crate::domain::repositories::{BusinessFilters, BusinessRepository};
use crate::error::AppError;

/// One page of ranked search results.
#[derive(Debug)]
pub struct SearchPage {
    pub results: Vec<TenantAvailability>,
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: u32,
}

/// Orchestrates a marketplace-wide availability search.
///
/// Stateless: every invocation is a pure function of the request plus the
/// read-only snapshots supplied by the repositories, so concurrent searches
/// need no coordination.
pub struct SearchService {
    business_repository: Arc<dyn BusinessRepository>,
    availability: Arc<AvailabilityService>,
    limits: SearchLimits,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(
        business_repository: Arc<dyn BusinessRepository>,
        availability: Arc<AvailabilityService>,
        limits: SearchLimits,
    ) -> Self {
        Self {
            business_repository,
            availability,
            limits,
        }
    }

    /// Runs a full availability search and paginates the ranked result list.
    ///
    /// Candidate businesses (bounded by `max_candidate_businesses`) are
    /// processed concurrently, bounded by `search_concurrency`, each under a
    /// `business_timeout_ms` deadline. A business whose computation errors
    /// or times out contributes zero slots and is dropped; partial results
    /// are preferable to total failure. Businesses with no slots do not
    /// appear at all, not even as "no availability".
    ///
    /// Ranking is by slot count descending after truncation to
    /// `max_slots_per_business`; the sort is stable, so the repository's
    /// candidate order is the tie-break.
    ///
    /// Pagination slices the post-computation, in-memory list; repeated page
    /// requests recompute from scratch (no caching layer).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only when the candidate listing itself
    /// fails; per-business failures are absorbed.
    pub async fn search(
        &self,
        filters: &BusinessFilters,
        date: NaiveDate,
        time_from: Option<NaiveTime>,
        time_to: Option<NaiveTime>,
        page: u32,
        limit: u32,
    ) -> Result<SearchPage, AppError> {
        let started = Instant::now();
        metrics::counter!("availability_search_total").increment(1);

        let candidates = self
            .business_repository
            .list(filters, self.limits.max_candidate_businesses)
            .await?;

        let candidate_count = candidates.len();
        let semaphore = Arc::new(Semaphore::new(self.limits.search_concurrency));
        let deadline = Duration::from_millis(self.limits.business_timeout_ms);
        let mut join_set = JoinSet::new();

        for (index, business) in candidates.into_iter().enumerate() {
            if !business.is_bookable() {
                continue;
            }

            let availability = Arc::clone(&self.availability);
            let semaphore = Arc::clone(&semaphore);

            join_set.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return (index, None);
                };

                let business_id = business.id;
                match timeout(
                    deadline,
                    availability.aggregate(business, date, time_from, time_to),
                )
                .await
                {
                    Ok(Ok(tenant)) => (index, Some(tenant)),
                    Ok(Err(e)) => {
                        tracing::warn!(business_id, "availability computation failed: {e}");
                        (index, None)
                    }
                    Err(_) => {
                        tracing::warn!(business_id, "availability computation timed out");
                        (index, None)
                    }
                }
            });
        }

        // Join in completion order, then restore candidate order so the
        // stable rank sort keeps it as the tie-break.
        let mut by_candidate: Vec<Option<TenantAvailability>> =
            (0..candidate_count).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, tenant)) => by_candidate[index] = tenant,
                Err(e) => tracing::warn!("availability task panicked: {e}"),
            }
        }

        let mut results: Vec<TenantAvailability> = by_candidate
            .into_iter()
            .flatten()
            .filter(|tenant| !tenant.available_slots.is_empty())
            .map(|mut tenant| {
                tenant
                    .available_slots
                    .truncate(self.limits.max_slots_per_business);
                tenant
            })
            .collect();

        results.sort_by_key(|tenant| Reverse(tenant.available_slots.len()));

        let total = results.len();
        let total_pages = (total as u32).div_ceil(limit.max(1));
        // Widen before multiplying; (page-1)*limit can exceed u32.
        let offset = usize::try_from(u64::from(page - 1) * u64::from(limit)).unwrap_or(usize::MAX);
        let results = results
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        metrics::histogram!("availability_search_seconds")
            .record(started.elapsed().as_secs_f64());
        tracing::debug!(
            candidates = candidate_count,
            total,
            page,
            limit,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "availability search completed"
        );

        Ok(SearchPage {
            results,
            page,
            limit,
            total,
            total_pages,
        })
    }
}
