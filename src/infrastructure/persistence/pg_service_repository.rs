//! PostgreSQL implementation of the service repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{Employee, ServiceOffering};
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;

/// PostgreSQL repository for service offerings with their assigned employees.
pub struct PgServiceRepository {
    pool: Arc<PgPool>,
}

impl PgServiceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ServiceRow {
    id: i64,
    business_id: i64,
    name: String,
    duration_minutes: i64,
    base_price: f64,
    active: bool,
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    service_id: i64,
    employee_id: i64,
    employee_name: String,
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn list_active(&self, business_id: i64) -> Result<Vec<ServiceOffering>, AppError> {
        let service_rows = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, business_id, name, duration_minutes, base_price, active
            FROM services
            WHERE business_id = $1 AND active
            ORDER BY id
            "#,
        )
        .bind(business_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        if service_rows.is_empty() {
            return Ok(Vec::new());
        }

        let service_ids: Vec<i64> = service_rows.iter().map(|s| s.id).collect();

        // Assignment order is load-bearing: slot generation picks the first
        // conflict-free employee in this order.
        let assignment_rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT se.service_id, e.id AS employee_id, e.name AS employee_name
            FROM service_employees se
            JOIN employees e ON e.id = se.employee_id
            WHERE se.service_id = ANY($1)
            ORDER BY se.service_id, se.position, e.id
            "#,
        )
        .bind(&service_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_service: HashMap<i64, Vec<Employee>> = HashMap::new();
        for row in assignment_rows {
            by_service.entry(row.service_id).or_default().push(Employee {
                id: row.employee_id,
                name: row.employee_name,
            });
        }

        Ok(service_rows
            .into_iter()
            .map(|row| {
                let employees = by_service.remove(&row.id).unwrap_or_default();
                ServiceOffering {
                    id: row.id,
                    business_id: row.business_id,
                    name: row.name,
                    duration_minutes: row.duration_minutes,
                    base_price: row.base_price,
                    active: row.active,
                    employees,
                }
            })
            .collect())
    }
}
