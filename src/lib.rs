//! Attendance-to-compensation engine.
//!
//! This crate converts per-day raw attendance (clock times against a scheduled
//! shift, an employment type, a holiday calendar and a site-wide attendance
//! policy) into a complete payroll line: hours worked, late and undertime
//! deductions, overtime, night differential, holiday bonus, gross and net pay.
//! It also reconciles manual edits to stored records so their totals stay
//! consistent.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
