//! Tests for core_kernel error types

use chrono::NaiveDate;
use core_kernel::error::CoreError;
use core_kernel::{DateRange, TemporalError, Timezone};

#[test]
fn test_core_error_from_temporal_error() {
    let start = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let temporal = DateRange::new(start, end).unwrap_err();
    let core_error: CoreError = temporal.into();

    assert!(matches!(
        core_error,
        CoreError::Temporal(TemporalError::InvalidInterval { .. })
    ));
}

#[test]
fn test_core_error_from_unknown_timezone() {
    let parse_error = "Atlantis/Capital".parse::<Timezone>().unwrap_err();
    let core_error: CoreError = parse_error.into();

    assert!(matches!(core_error, CoreError::Temporal(TemporalError::InvalidTimezone(_))));
    assert!(core_error.to_string().contains("Atlantis/Capital"));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::configuration("missing timezone");
    let display = format!("{}", error);

    assert!(display.contains("Configuration error"));
    assert!(display.contains("missing timezone"));
}
