//! Core data models for the attendance pay engine.
//!
//! This module contains the reference data supplied by collaborators
//! (policy, schedules, holidays), the per-day inputs, and the persisted
//! compensation record with its audit trace.

mod attendance;
mod audit;
mod compensation_record;
mod employee;
mod holiday;
mod policy;
mod schedule;

pub use attendance::{LeaveDay, LeaveType, RawAttendance};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use compensation_record::{CompensationRecord, DayType};
pub(crate) use compensation_record::non_negative;
pub use employee::Employee;
pub use holiday::{HolidayCalendar, HolidayRange, HolidayType};
pub use policy::{AttendancePolicy, HolidayMultiplierSource};
pub use schedule::{DEFAULT_HOURS_OF_WORK, EmploymentTypeDefinition, ScheduleSpec, WeeklySchedule};
