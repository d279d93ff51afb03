//! Pre-built Test Fixtures
//!
//! Consistent, predictable dates and persons for unit and integration tests.

use chrono::NaiveDate;
use core_kernel::PersonId;
use domain_party::{Person, Sex};
use domain_service_time::{ServiceCategory, ServicePeriod};

/// Shorthand for a calendar date
///
/// # Panics
///
/// Panics if the date does not exist.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {}-{}-{}", year, month, day))
}

/// Fixture for dates used across the suites
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Default reference date for simulations
    pub fn reference_date() -> NaiveDate {
        date(2025, 1, 1)
    }

    /// Start of a thirty-year career
    pub fn career_start() -> NaiveDate {
        date(1990, 1, 1)
    }

    /// End of a thirty-year career
    pub fn career_end() -> NaiveDate {
        date(2020, 1, 1)
    }
}

/// Fixture for persons
pub struct PersonFixtures;

impl PersonFixtures {
    /// Role title shared by the career fixtures
    pub const ROLE: &'static str = "Tax Auditor";

    /// Man born 1960-01-01 holding `ROLE`
    pub fn male_auditor() -> Person {
        Person::new(date(1960, 1, 1), Sex::Male)
            .with_current_role(Self::ROLE)
            .with_public_service_entry(TemporalFixtures::career_start())
    }

    /// Woman born 1965-06-15 holding `ROLE`
    pub fn female_auditor() -> Person {
        Person::new(date(1965, 6, 15), Sex::Female)
            .with_current_role(Self::ROLE)
            .with_public_service_entry(TemporalFixtures::career_start())
    }

    /// Woman born 1964-03-10 teaching in public schools
    pub fn female_teacher() -> Person {
        Person::new(date(1964, 3, 10), Sex::Female).with_current_role("Teacher")
    }

    /// Person with no role information
    pub fn without_role(sex: Sex) -> Person {
        Person::new(date(1970, 1, 1), sex)
    }
}

/// Fixture for service periods
pub struct PeriodFixtures;

impl PeriodFixtures {
    /// Statutory career from 1990-01-01 to 2020-01-01 in `PersonFixtures::ROLE`
    ///
    /// Measures 10958 days, which is 30 years 0 months 8 days.
    pub fn statutory_career(owner: PersonId) -> ServicePeriod {
        ServicePeriod::new(
            owner,
            TemporalFixtures::career_start(),
            TemporalFixtures::career_end(),
            "Federal Revenue Service",
            ServiceCategory::Statutory,
        )
        .expect("fixture dates are ordered")
        .with_role(PersonFixtures::ROLE)
    }

    /// Ten years of private sector work flagged as hazardous
    pub fn hazardous_decade(owner: PersonId) -> ServicePeriod {
        ServicePeriod::new(
            owner,
            date(1980, 1, 1),
            date(1989, 12, 31),
            "Chemical Plant",
            ServiceCategory::PrivateSector,
        )
        .expect("fixture dates are ordered")
        .with_hazardous(true)
    }
}
