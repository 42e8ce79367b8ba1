//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, repository/service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{AvailabilityService, BookingService, SearchService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgBookingRepository, PgBusinessRepository, PgServiceRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Repositories and application services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let business_repository = Arc::new(PgBusinessRepository::new(Arc::clone(&pool)));
    let service_repository = Arc::new(PgServiceRepository::new(Arc::clone(&pool)));
    let booking_repository = Arc::new(PgBookingRepository::new(Arc::clone(&pool)));

    let availability = Arc::new(AvailabilityService::new(
        service_repository.clone(),
        booking_repository.clone(),
        config.limits,
    ));
    let search_service = Arc::new(SearchService::new(
        business_repository.clone(),
        availability,
        config.limits,
    ));
    let booking_service = Arc::new(BookingService::new(
        service_repository,
        booking_repository,
    ));

    let state = AppState::new(
        search_service,
        booking_service,
        business_repository,
        config.limits,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
