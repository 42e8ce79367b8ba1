//! Repository trait for business (tenant) snapshots.

use async_trait::async_trait;

use crate::domain::entities::Business;
use crate::error::AppError;

/// Marketplace listing filters applied before the engine runs.
#[derive(Debug, Clone, Default)]
pub struct BusinessFilters {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub city: Option<String>,
}

impl BusinessFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_subcategory(mut self, subcategory: Option<String>) -> Self {
        self.subcategory = subcategory;
        self
    }

    pub fn with_city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }
}

/// Read access to published businesses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBusinessRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Lists active, non-suspended businesses matching `filters`, bounded by
    /// `limit` candidates. Order is the collaborator's stored order and is
    /// the ranking tie-break downstream.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filters: &BusinessFilters, limit: i64) -> Result<Vec<Business>, AppError>;

    /// Connectivity probe for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
