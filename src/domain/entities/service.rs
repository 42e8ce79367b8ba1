//! Service offering and employee entities.

/// A bookable offering with a fixed duration and price.
///
/// Employees are kept in their stored assignment order; slot generation
/// picks the first conflict-free one.
#[derive(Debug, Clone)]
pub struct ServiceOffering {
    pub id: i64,
    pub business_id: i64,
    pub name: String,
    pub duration_minutes: i64,
    pub base_price: f64,
    pub active: bool,
    pub employees: Vec<Employee>,
}

/// An employee assignable to services of one business.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_without_employees() {
        let service = ServiceOffering {
            id: 1,
            business_id: 10,
            name: "Haircut".to_string(),
            duration_minutes: 45,
            base_price: 30.0,
            active: true,
            employees: vec![],
        };

        // A service with no assigned employees is still slot-eligible.
        assert!(service.employees.is_empty());
        assert!(service.active);
    }
}
