//! Handler for marketplace availability search.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::pagination::PaginationMeta;
use crate::api::dto::search::{
    SearchParamsEcho, SearchQueryParams, SearchResponse, TenantResultItem,
};
use crate::domain::repositories::BusinessFilters;
use crate::error::AppError;
use crate::state::AppState;

/// Searches bookable time slots across the marketplace.
///
/// # Endpoint
///
/// `GET /api/search/availability`
///
/// # Query Parameters
///
/// - `category`, `subcategory`, `city` (optional): listing filters
/// - `date` (optional): `YYYY-MM-DD`; missing or malformed defaults to today
/// - `timeFrom` / `timeTo` (optional): `HH:MM` bounds that replace the
///   resolved opening hours
/// - `page` (optional): 1-indexed page over the ranked result list
/// - `limit` (optional): page size (default 20, hard max 50)
///
/// # Response
///
/// Ranked businesses (slot count descending) with up to 6 slots each, plus
/// pagination metadata and an echo of the effective search parameters.
/// Results are computed fresh on every request, including repeated page
/// requests; nothing is cached.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed time bounds or pagination
/// parameters. Per-business computation failures never surface here; those
/// businesses are simply absent from the results.
pub async fn availability_search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let (page, limit) = params
        .validate_pagination(&state.limits)
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (time_from, time_to) = params
        .parse_time_bounds()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let date = params.resolve_date();

    let filters = BusinessFilters::new()
        .with_category(params.category.clone())
        .with_subcategory(params.subcategory.clone())
        .with_city(params.city.clone());

    let search_page = state
        .search_service
        .search(&filters, date, time_from, time_to, page, limit)
        .await?;

    let results = search_page
        .results
        .iter()
        .map(TenantResultItem::from)
        .collect();

    Ok(Json(SearchResponse {
        results,
        pagination: PaginationMeta {
            page: search_page.page,
            limit: search_page.limit,
            total: search_page.total,
            total_pages: search_page.total_pages,
        },
        search_params: SearchParamsEcho {
            category: params.category,
            subcategory: params.subcategory,
            city: params.city,
            date: date.to_string(),
            time_from: params.time_from,
            time_to: params.time_to,
        },
    }))
}
