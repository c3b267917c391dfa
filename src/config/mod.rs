//! Configuration loading for the pay engine.
//!
//! This module loads a site's attendance policy, employment types and holiday
//! calendar from YAML files into one immutable [`PayrollSnapshot`].
//!
//! # Example
//!
//! ```no_run
//! use attendance_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Overtime threshold: {} min", config.snapshot().policy.overtime_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmploymentTypesConfig, HolidaysFile, PayrollSnapshot};
