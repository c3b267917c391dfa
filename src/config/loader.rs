//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a site's
//! payroll settings from YAML files.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendancePolicy, HolidayRange};

use super::types::{EmploymentTypesConfig, HolidaysFile, PayrollSnapshot};

/// Loads and provides access to a site's payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── policy.yaml            # Attendance policy
/// ├── employment_types.yaml  # Hours of work and weekly schedules
/// └── holidays/
///     └── 2026.yaml          # Holiday ranges for the year
/// ```
///
/// The `holidays` directory is optional; without it the calendar is empty.
///
/// # Example
///
/// ```no_run
/// use attendance_pay_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// assert!(loader.snapshot().holiday_on(date).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    snapshot: PayrollSnapshot,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - A required file is missing
    /// - Any file contains invalid YAML
    /// - The loaded data fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_pay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), attendance_pay_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<AttendancePolicy>(&path.join("policy.yaml"))?;

        let employment_types =
            Self::load_yaml::<EmploymentTypesConfig>(&path.join("employment_types.yaml"))?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        let snapshot = PayrollSnapshot::new(policy, employment_types.employment_types, holidays);
        snapshot.validate()?;

        info!(
            path = %path.display(),
            employment_types = snapshot.employment_types.len(),
            holidays = snapshot.holidays.ranges.len(),
            "Loaded payroll configuration"
        );

        Ok(Self { snapshot })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file in the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayRange>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            info!(path = %holidays_dir_str, "No holidays directory, using an empty calendar");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                let file = Self::load_yaml::<HolidaysFile>(&path)?;
                holidays.extend(file.holidays);
            }
        }

        Ok(holidays)
    }

    /// Wraps an already-built snapshot, validating it first.
    pub fn from_snapshot(snapshot: PayrollSnapshot) -> EngineResult<Self> {
        snapshot.validate()?;
        Ok(Self { snapshot })
    }

    /// Returns the loaded snapshot.
    pub fn snapshot(&self) -> &PayrollSnapshot {
        &self.snapshot
    }

    /// Consumes the loader, returning the snapshot.
    pub fn into_snapshot(self) -> PayrollSnapshot {
        self.snapshot
    }
}
