//! Duration aggregation
//!
//! Totals are always computed over non-concomitant periods and fold each
//! period's adjusted duration left to right starting from zero. Because
//! `ServiceDuration` addition normalizes at every step, the fold order is the
//! input order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::ServiceDuration;
use domain_party::Person;
use crate::period::{ServiceCategory, ServicePeriod};

/// Selects which periods contribute to a total
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ServiceFilter {
    /// Every period
    Contribution,
    /// Statutory and federal, state or municipal public service
    PublicService,
    /// Periods whose role equals the given title
    Role(String),
    /// Teaching periods
    Teaching,
    /// Periods in the hazardous category or flagged as hazardous
    Hazardous,
    /// Periods of exactly one category
    Category(ServiceCategory),
}

impl ServiceFilter {
    /// Returns true if the period passes this filter
    ///
    /// Concomitance is not considered here; `total` excludes concomitant
    /// periods for every filter.
    pub fn matches(&self, period: &ServicePeriod) -> bool {
        match self {
            ServiceFilter::Contribution => true,
            ServiceFilter::PublicService => period.category().is_public_service(),
            ServiceFilter::Role(name) => period.role() == Some(name.as_str()),
            ServiceFilter::Teaching => period.category() == ServiceCategory::Teaching,
            ServiceFilter::Hazardous => {
                period.category() == ServiceCategory::Hazardous || period.is_hazardous()
            }
            ServiceFilter::Category(category) => period.category() == *category,
        }
    }
}

/// Sums the adjusted durations of non-concomitant periods matching `predicate`
pub fn total_by<'a, I, P>(periods: I, predicate: P) -> ServiceDuration
where
    I: IntoIterator<Item = &'a ServicePeriod>,
    P: Fn(&ServicePeriod) -> bool,
{
    periods
        .into_iter()
        .filter(|period| !period.is_concomitant())
        .filter(|period| predicate(*period))
        .map(ServicePeriod::adjusted_duration)
        .fold(ServiceDuration::ZERO, |acc, d| acc + d)
}

/// Sums the adjusted durations of non-concomitant periods matching `filter`
pub fn total(periods: &[ServicePeriod], filter: &ServiceFilter) -> ServiceDuration {
    let result = total_by(periods, |period| filter.matches(period));
    debug!(?filter, total = %result, "Aggregated service time");
    result
}

/// Time served in the person's current role
///
/// Zero when the person has no current role.
pub fn role_time(person: &Person, periods: &[ServicePeriod]) -> ServiceDuration {
    match person.current_role() {
        Some(role) => total(periods, &ServiceFilter::Role(role.to_string())),
        None => ServiceDuration::ZERO,
    }
}

/// Total as of a past or future date
///
/// Periods starting after `as_of` are ignored and periods still running on
/// `as_of` are measured up to it. The input periods are not modified.
pub fn total_up_to(
    periods: &[ServicePeriod],
    filter: &ServiceFilter,
    as_of: NaiveDate,
) -> ServiceDuration {
    let truncated: Vec<ServicePeriod> = periods
        .iter()
        .filter_map(|period| period.truncated_at(as_of))
        .collect();
    total(&truncated, filter)
}

/// Totals per category, in `ServiceCategory::ALL` order, omitting empty ones
pub fn totals_by_category(periods: &[ServicePeriod]) -> Vec<(ServiceCategory, ServiceDuration)> {
    ServiceCategory::ALL
        .iter()
        .map(|category| (*category, total(periods, &ServiceFilter::Category(*category))))
        .filter(|(_, duration)| !duration.is_zero())
        .collect()
}
