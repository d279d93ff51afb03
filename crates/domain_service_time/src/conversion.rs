//! Special time conversion
//!
//! Periods served under hazardous conditions outside the hazardous regime
//! may be converted into common time by multiplying their day count. The
//! factor depends on the person's sex and is configurable.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use domain_party::{Person, Sex};
use crate::error::ServiceError;
use crate::period::{ServiceCategory, ServicePeriod};

/// Default factor applied to men's hazardous time
pub const DEFAULT_MALE_FACTOR: f64 = 1.4;

/// Default factor applied to women's hazardous time
pub const DEFAULT_FEMALE_FACTOR: f64 = 1.2;

/// Conversion multipliers by sex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactors {
    /// Factor for male persons
    #[serde(default = "default_male_factor")]
    pub male: f64,
    /// Factor for female persons
    #[serde(default = "default_female_factor")]
    pub female: f64,
}

fn default_male_factor() -> f64 {
    DEFAULT_MALE_FACTOR
}

fn default_female_factor() -> f64 {
    DEFAULT_FEMALE_FACTOR
}

impl Default for ConversionFactors {
    fn default() -> Self {
        Self {
            male: DEFAULT_MALE_FACTOR,
            female: DEFAULT_FEMALE_FACTOR,
        }
    }
}

impl ConversionFactors {
    pub fn for_sex(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

/// Decides whether hazardous time may be converted and applies the factor
#[derive(Debug, Clone, Default)]
pub struct ConversionPolicy {
    factors: ConversionFactors,
}

impl ConversionPolicy {
    /// Creates a policy with the given factors
    pub fn new(factors: ConversionFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &ConversionFactors {
        &self.factors
    }

    /// Explains why a period cannot be converted, or `None` if it can
    pub fn ineligibility_reason(&self, period: &ServicePeriod) -> Option<&'static str> {
        if !period.is_hazardous() {
            Some("period is not flagged as hazardous")
        } else if period.category() == ServiceCategory::Hazardous {
            Some("period already belongs to the hazardous category")
        } else if period.is_converted() {
            Some("period has already been converted")
        } else {
            None
        }
    }

    /// Returns true if the period is flagged hazardous, is not already in the
    /// hazardous category and has not been converted yet
    pub fn is_convertible(&self, period: &ServicePeriod) -> bool {
        self.ineligibility_reason(period).is_none()
    }

    /// Converts the period if it qualifies
    ///
    /// Returns true if the period was converted. A period that does not
    /// qualify, including one converted earlier, is left unchanged.
    pub fn apply(&self, period: &mut ServicePeriod, person: &Person) -> bool {
        if let Some(reason) = self.ineligibility_reason(period) {
            debug!(period_id = %period.id(), reason, "Conversion skipped");
            return false;
        }

        let factor = self.factors.for_sex(person.sex);
        period.mark_converted(factor);
        info!(period_id = %period.id(), factor, "Hazardous time converted");
        true
    }

    /// Converts the period, failing if it does not qualify
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotConvertible` with the reason the period was
    /// rejected.
    pub fn try_apply(&self, period: &mut ServicePeriod, person: &Person) -> Result<(), ServiceError> {
        if let Some(reason) = self.ineligibility_reason(period) {
            return Err(ServiceError::not_convertible(period.id(), reason));
        }
        self.apply(period, person);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hazardous_period(person: &Person) -> ServicePeriod {
        ServicePeriod::new(
            person.id,
            date(2000, 1, 1),
            date(2009, 12, 31),
            "Refinery",
            ServiceCategory::PrivateSector,
        )
        .unwrap()
        .with_hazardous(true)
    }

    #[test]
    fn test_male_factor() {
        let person = Person::new(date(1970, 1, 1), Sex::Male);
        let mut period = hazardous_period(&person);

        assert!(ConversionPolicy::default().apply(&mut period, &person));
        assert_eq!(period.conversion_factor(), Some(1.4));
        assert!(period.is_converted());
    }

    #[test]
    fn test_female_factor() {
        let person = Person::new(date(1970, 1, 1), Sex::Female);
        let mut period = hazardous_period(&person);

        assert!(ConversionPolicy::default().apply(&mut period, &person));
        assert_eq!(period.conversion_factor(), Some(1.2));
    }

    #[test]
    fn test_second_apply_is_noop() {
        let person = Person::new(date(1970, 1, 1), Sex::Male);
        let policy = ConversionPolicy::default();
        let mut period = hazardous_period(&person);

        assert!(policy.apply(&mut period, &person));
        let after_first = period.clone();
        assert!(!policy.apply(&mut period, &person));
        assert_eq!(period, after_first);
    }
}
