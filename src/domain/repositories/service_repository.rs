//! Repository trait for service offerings.

use async_trait::async_trait;

use crate::domain::entities::ServiceOffering;
use crate::error::AppError;

/// Read access to a business's bookable services.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgServiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Lists the active services of one business, each with its assigned
    /// employees in stored assignment order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_active(&self, business_id: i64) -> Result<Vec<ServiceOffering>, AppError>;
}
