//! PostgreSQL implementation of the booking repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use sqlx::PgPool;

use crate::domain::entities::{Booking, BookingStatus, NewBooking};
use crate::domain::repositories::BookingRepository;
use crate::error::AppError;

/// PostgreSQL repository for bookings.
pub struct PgBookingRepository {
    pool: Arc<PgPool>,
}

impl PgBookingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    business_id: i64,
    service_id: i64,
    employee_id: Option<i64>,
    customer_name: String,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let status: BookingStatus = row.status.parse().map_err(|e| {
            AppError::internal(
                "Invalid booking status in store",
                json!({ "booking_id": row.id, "reason": format!("{e}") }),
            )
        })?;

        Ok(Booking {
            id: row.id,
            business_id: row.business_id,
            service_id: row.service_id,
            employee_id: row.employee_id,
            customer_name: row.customer_name,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            status,
        })
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn list_on_date(
        &self,
        business_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, business_id, service_id, employee_id, customer_name,
                   date, start_time, end_time, status
            FROM bookings
            WHERE business_id = $1 AND date = $2
            ORDER BY start_time, id
            "#,
        )
        .bind(business_id)
        .bind(date)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings
                (business_id, service_id, employee_id, customer_name,
                 date, start_time, end_time, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'PENDING')
            RETURNING id, business_id, service_id, employee_id, customer_name,
                      date, start_time, end_time, status
            "#,
        )
        .bind(new_booking.business_id)
        .bind(new_booking.service_id)
        .bind(new_booking.employee_id)
        .bind(&new_booking.customer_name)
        .bind(new_booking.date)
        .bind(new_booking.start_time)
        .bind(new_booking.end_time)
        .fetch_one(self.pool.as_ref())
        .await?;

        Booking::try_from(row)
    }
}
