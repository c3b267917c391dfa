//! Employee model.
//!
//! The engine only needs the identity of the employee, the employment type
//! used to resolve the weekly schedule, and the daily rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose attendance is converted into pay.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employment_type: "regular".to_string(),
///     daily_rate: Decimal::new(800, 0),
/// };
/// assert_eq!(employee.daily_rate, Decimal::new(800, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Name of the employment type whose schedule applies (e.g. "regular").
    pub employment_type: String,
    /// Pay for one full working day.
    pub daily_rate: Decimal,
}

impl Employee {
    /// Creates an employee.
    pub fn new(id: &str, employment_type: &str, daily_rate: Decimal) -> Self {
        Self {
            id: id.to_string(),
            employment_type: employment_type.to_string(),
            daily_rate,
        }
    }
}
