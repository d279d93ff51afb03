//! Custom Test Assertions
//!
//! Assertion helpers for durations and service records that print the
//! values in the 365/30 notation used by the rules.

use core_kernel::ServiceDuration;
use domain_service_time::{ServicePeriod, ServiceRecord};

/// Asserts a duration's components
pub fn assert_duration(actual: ServiceDuration, years: u32, months: u32, days: u32) {
    let expected = ServiceDuration::new(years, months, days);
    assert_eq!(
        actual, expected,
        "Duration mismatch: actual={}, expected={}",
        actual, expected
    );
}

/// Asserts a duration's day count under the 365/30 convention
pub fn assert_duration_days(actual: ServiceDuration, days: u64) {
    assert_eq!(
        actual.to_days(),
        days,
        "Duration {} is {} days, expected {}",
        actual,
        actual.to_days(),
        days
    );
}

/// Asserts that no period in the record is flagged concomitant
pub fn assert_no_concomitance(record: &ServiceRecord) {
    let flagged: Vec<String> = record
        .periods()
        .iter()
        .filter(|p| p.is_concomitant())
        .map(|p| p.id().to_string())
        .collect();
    assert!(flagged.is_empty(), "Unexpected concomitant periods: {:?}", flagged);
}

/// Asserts that a period was converted with the given factor
pub fn assert_converted_with(period: &ServicePeriod, factor: f64) {
    assert!(period.is_converted(), "Period {} was not converted", period.id());
    assert_eq!(
        period.conversion_factor(),
        Some(factor),
        "Period {} has factor {:?}, expected {}",
        period.id(),
        period.conversion_factor(),
        factor
    );
}
