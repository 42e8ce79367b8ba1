//! PostgreSQL implementation of the business repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Business, Schedule};
use crate::domain::repositories::{BusinessFilters, BusinessRepository};
use crate::error::AppError;

/// PostgreSQL repository for published businesses.
pub struct PgBusinessRepository {
    pool: Arc<PgPool>,
}

impl PgBusinessRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BusinessRow {
    id: i64,
    name: String,
    category: Option<String>,
    subcategory: Option<String>,
    city: Option<String>,
    address: Option<String>,
    schedule: Option<String>,
    active: bool,
    suspended: bool,
}

impl From<BusinessRow> for Business {
    fn from(row: BusinessRow) -> Self {
        Business {
            id: row.id,
            name: row.name,
            category: row.category,
            subcategory: row.subcategory,
            city: row.city,
            address: row.address,
            schedule: Schedule::parse(row.schedule.as_deref()),
            active: row.active,
            suspended: row.suspended,
        }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    async fn list(&self, filters: &BusinessFilters, limit: i64) -> Result<Vec<Business>, AppError> {
        let rows = sqlx::query_as::<_, BusinessRow>(
            r#"
            SELECT id, name, category, subcategory, city, address, schedule, active, suspended
            FROM businesses
            WHERE active AND NOT suspended
              AND ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR subcategory = $2)
              AND ($3::text IS NULL OR city = $3)
            ORDER BY id
            LIMIT $4
            "#,
        )
        .bind(filters.category.as_deref())
        .bind(filters.subcategory.as_deref())
        .bind(filters.city.as_deref())
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Business::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
