#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use availability_search::application::services::{
    AvailabilityService, BookingService, SearchService,
};
use availability_search::config::SearchLimits;
use availability_search::domain::entities::{
    Booking, BookingStatus, Business, Employee, NewBooking, Schedule, ServiceOffering,
};
use availability_search::domain::repositories::{
    BookingRepository, BusinessFilters, BusinessRepository, ServiceRepository,
};
use availability_search::error::AppError;
use availability_search::state::AppState;

/// In-memory business store mirroring the SQL filter semantics.
pub struct FakeBusinessRepository {
    businesses: Vec<Business>,
    pub healthy: bool,
}

#[async_trait]
impl BusinessRepository for FakeBusinessRepository {
    async fn list(&self, filters: &BusinessFilters, limit: i64) -> Result<Vec<Business>, AppError> {
        let matches = |value: &Option<String>, filter: &Option<String>| match filter {
            None => true,
            Some(wanted) => value.as_deref() == Some(wanted.as_str()),
        };

        Ok(self
            .businesses
            .iter()
            .filter(|b| b.active && !b.suspended)
            .filter(|b| matches(&b.category, &filters.category))
            .filter(|b| matches(&b.subcategory, &filters.subcategory))
            .filter(|b| matches(&b.city, &filters.city))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::internal(
                "database unreachable",
                serde_json::json!({}),
            ))
        }
    }
}

pub struct FakeServiceRepository {
    services: HashMap<i64, Vec<ServiceOffering>>,
}

#[async_trait]
impl ServiceRepository for FakeServiceRepository {
    async fn list_active(&self, business_id: i64) -> Result<Vec<ServiceOffering>, AppError> {
        Ok(self
            .services
            .get(&business_id)
            .map(|services| services.iter().filter(|s| s.active).cloned().collect())
            .unwrap_or_default())
    }
}

/// In-memory booking store; `create` assigns ids and persists, so a second
/// booking request observes the first.
pub struct FakeBookingRepository {
    bookings: Mutex<Vec<Booking>>,
    next_id: AtomicI64,
}

impl FakeBookingRepository {
    pub fn stored(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingRepository for FakeBookingRepository {
    async fn list_on_date(
        &self,
        business_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.business_id == business_id && b.date == date)
            .cloned()
            .collect())
    }

    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let booking = Booking {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            business_id: new_booking.business_id,
            service_id: new_booking.service_id,
            employee_id: new_booking.employee_id,
            customer_name: new_booking.customer_name,
            date: new_booking.date,
            start_time: new_booking.start_time,
            end_time: new_booking.end_time,
            status: BookingStatus::Pending,
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// A Monday, so schedules keyed on "monday" apply.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()
}

/// Weekday schedule blob with the given window on every day.
pub fn open_schedule(open: &str, close: &str) -> Schedule {
    let days = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];
    let blob: HashMap<&str, serde_json::Value> = days
        .iter()
        .map(|day| (*day, serde_json::json!({ "open": open, "close": close })))
        .collect();
    Schedule::parse(Some(&serde_json::to_string(&blob).unwrap()))
}

pub fn closed_schedule() -> Schedule {
    Schedule::parse(Some(r#"{"monday": {"closed": true}}"#))
}

pub fn test_business(id: i64, name: &str, schedule: Schedule) -> Business {
    Business {
        id,
        name: name.to_string(),
        category: Some("beauty".to_string()),
        subcategory: Some("hair".to_string()),
        city: Some("Berlin".to_string()),
        address: Some("Hauptstr. 1".to_string()),
        schedule,
        active: true,
        suspended: false,
    }
}

pub fn test_service(id: i64, business_id: i64, name: &str, duration: i64) -> ServiceOffering {
    ServiceOffering {
        id,
        business_id,
        name: name.to_string(),
        duration_minutes: duration,
        base_price: 30.0,
        active: true,
        employees: vec![Employee {
            id: id * 100,
            name: format!("Employee {id}"),
        }],
    }
}

pub fn test_booking(
    id: i64,
    business_id: i64,
    service_id: i64,
    start: NaiveTime,
    end: NaiveTime,
    status: BookingStatus,
) -> Booking {
    Booking {
        id,
        business_id,
        service_id,
        employee_id: None,
        customer_name: "Existing Customer".to_string(),
        date: test_date(),
        start_time: start,
        end_time: end,
        status,
    }
}

/// Builds an application state over in-memory repositories.
///
/// Returns the booking repository too so tests can assert what got stored.
pub fn create_test_state(
    businesses: Vec<Business>,
    services: HashMap<i64, Vec<ServiceOffering>>,
    bookings: Vec<Booking>,
) -> (AppState, Arc<FakeBookingRepository>) {
    create_test_state_with_limits(businesses, services, bookings, SearchLimits::default())
}

pub fn create_test_state_with_limits(
    businesses: Vec<Business>,
    services: HashMap<i64, Vec<ServiceOffering>>,
    bookings: Vec<Booking>,
    limits: SearchLimits,
) -> (AppState, Arc<FakeBookingRepository>) {
    let business_repo = Arc::new(FakeBusinessRepository {
        businesses,
        healthy: true,
    });
    let service_repo = Arc::new(FakeServiceRepository { services });
    let booking_repo = Arc::new(FakeBookingRepository {
        bookings: Mutex::new(bookings),
        next_id: AtomicI64::new(1000),
    });

    let availability = Arc::new(AvailabilityService::new(
        service_repo.clone(),
        booking_repo.clone(),
        limits,
    ));
    let search_service = Arc::new(SearchService::new(
        business_repo.clone(),
        availability,
        limits,
    ));
    let booking_service = Arc::new(BookingService::new(service_repo, booking_repo.clone()));

    let state = AppState::new(search_service, booking_service, business_repo, limits);

    (state, booking_repo)
}

pub fn create_unhealthy_state() -> AppState {
    let business_repo = Arc::new(FakeBusinessRepository {
        businesses: vec![],
        healthy: false,
    });
    let service_repo = Arc::new(FakeServiceRepository {
        services: HashMap::new(),
    });
    let booking_repo = Arc::new(FakeBookingRepository {
        bookings: Mutex::new(vec![]),
        next_id: AtomicI64::new(1),
    });

    let limits = SearchLimits::default();
    let availability = Arc::new(AvailabilityService::new(
        service_repo.clone(),
        booking_repo.clone(),
        limits,
    ));
    let search_service = Arc::new(SearchService::new(
        business_repo.clone(),
        availability,
        limits,
    ));
    let booking_service = Arc::new(BookingService::new(service_repo, booking_repo));

    AppState::new(search_service, booking_service, business_repo, limits)
}
