//! Calculation logic for the attendance pay engine.
//!
//! The pipeline runs leaves first: time normalization, time metrics (late,
//! undertime, overtime, worked and night-differential hours), pay metrics
//! with the day-type state machine, and the payment breakdown. The override
//! reconciler works on persisted records after the fact, and the period
//! summary aggregates a month of records.

mod breakdown;
mod daily;
mod day_classification;
mod night_differential;
mod override_reconciler;
mod pay_metrics;
mod period_summary;
mod time_metrics;
mod time_normalizer;

use rust_decimal::{Decimal, RoundingStrategy};

pub use breakdown::{
    BreakdownLine, BreakdownRates, BreakdownSource, BreakdownTotals, PayComponent,
    PaymentBreakdown, format_breakdown,
};
pub use daily::{DailyCompensation, compute_daily_compensation};
pub use day_classification::{DayBranch, classify_day, holiday_day_type};
pub use night_differential::{night_differential_hours, night_differential_minutes};
pub use override_reconciler::{
    Edit, EditableField, MAX_EDIT_VALUE, OverrideRates, apply_edit, clear_and_override,
    set_manual_override,
};
pub use pay_metrics::{
    PayMetrics, PayMetricsResult, ResolvedHolidayMultiplier, calculate_pay_metrics,
    calculate_rest_day_pay, daily_rate_only_pay, hourly_rate, resolve_holiday_multiplier,
    unpaid_day,
};
pub use period_summary::{PeriodSummary, summarize_period};
pub use time_metrics::{
    TimeMetrics, TimeMetricsResult, calculate_rest_day_metrics, calculate_time_metrics,
    eligible_overtime_minutes,
};
pub use time_normalizer::{NormalizedIntervals, TimeInterval, normalize_intervals, parse_clock};

/// Rounds a monetary amount to cents, half away from zero.
pub(crate) fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds fractional hours to two decimal places, half away from zero.
pub(crate) fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts minutes to hours without rounding.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}
