//! Property-Based Test Generators
//!
//! Proptest strategies that respect domain invariants: normalized durations,
//! ordered period dates and period sets that never overlap.

use chrono::{Duration, NaiveDate};
use core_kernel::{PersonId, ServiceDuration};
use domain_party::Sex;
use domain_service_time::{ServiceCategory, ServicePeriod};
use proptest::prelude::*;

use crate::fixtures::date;

/// Strategy for durations with months < 12 and days < 30
pub fn normalized_duration_strategy() -> impl Strategy<Value = ServiceDuration> {
    (0u32..60, 0u32..12, 0u32..30).prop_map(|(y, m, d)| ServiceDuration::new(y, m, d))
}

pub fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

pub fn category_strategy() -> impl Strategy<Value = ServiceCategory> {
    prop::sample::select(ServiceCategory::ALL.to_vec())
}

/// Strategy for dates between 1950 and 2050
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..36_500).prop_map(|offset| date(1950, 1, 1) + Duration::days(offset))
}

/// Strategy for a single period of the given owner
pub fn period_strategy(owner: PersonId) -> impl Strategy<Value = ServicePeriod> {
    (date_strategy(), 0i64..5_000, category_strategy(), any::<bool>()).prop_map(
        move |(start, length, category, hazardous)| {
            ServicePeriod::new(owner, start, start + Duration::days(length), "Employer", category)
                .expect("generated dates are ordered")
                .with_hazardous(hazardous)
        },
    )
}

/// Strategy for periods of one owner laid end to end with gaps
///
/// No two generated periods share a day.
pub fn non_overlapping_periods_strategy(
    owner: PersonId,
    max_len: usize,
) -> impl Strategy<Value = Vec<ServicePeriod>> {
    prop::collection::vec((0i64..400, 0i64..3_000, category_strategy()), 1..=max_len).prop_map(
        move |spans| {
            let mut cursor = date(1970, 1, 1);
            spans
                .into_iter()
                .map(|(gap, length, category)| {
                    let start = cursor + Duration::days(gap);
                    let end = start + Duration::days(length);
                    cursor = end + Duration::days(1);
                    ServicePeriod::new(owner, start, end, "Employer", category)
                        .expect("generated dates are ordered")
                })
                .collect()
        },
    )
}
