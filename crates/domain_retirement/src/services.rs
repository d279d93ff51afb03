//! Simulation service
//!
//! Entry point for callers outside the domain. It couples a service record
//! with the conversion policy and the eligibility engine, and validates the
//! person before simulating.

use chrono::NaiveDate;

use core_kernel::{ServiceDuration, ServicePeriodId};
use domain_party::Person;
use domain_service_time::{
    aggregation, ConversionFactors, ConversionPolicy, ServiceFilter, ServicePeriod, ServiceRecord,
};

use crate::engine::{EligibilityEngine, EligibilityResult};
use crate::error::RetirementError;
use crate::variant::RuleVariant;

/// Records service and runs retirement simulations
#[derive(Debug, Clone, Default)]
pub struct SimulationService {
    engine: EligibilityEngine,
    conversion: ConversionPolicy,
}

impl SimulationService {
    /// Creates a service from an engine and a conversion policy
    pub fn new(engine: EligibilityEngine, conversion: ConversionPolicy) -> Self {
        Self { engine, conversion }
    }

    /// Replaces the conversion factors
    pub fn with_conversion_factors(mut self, factors: ConversionFactors) -> Self {
        self.conversion = ConversionPolicy::new(factors);
        self
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    pub fn conversion_policy(&self) -> &ConversionPolicy {
        &self.conversion
    }

    /// Adds a period to a record, returning it with its overlap flag
    pub fn add_period<'r>(
        &self,
        record: &'r mut ServiceRecord,
        period: ServicePeriod,
    ) -> Result<(&'r ServicePeriod, bool), RetirementError> {
        Ok(record.add_period(period)?)
    }

    /// Converts a hazardous period of the record
    ///
    /// # Errors
    ///
    /// Fails with `NotConvertible` when the period is not flagged hazardous,
    /// is already in the hazardous category or was converted before.
    pub fn apply_conversion<'r>(
        &self,
        record: &'r mut ServiceRecord,
        period_id: ServicePeriodId,
        person: &Person,
    ) -> Result<&'r ServicePeriod, RetirementError> {
        Ok(record.apply_conversion(period_id, person, &self.conversion)?)
    }

    pub fn aggregate_duration(&self, periods: &[ServicePeriod], filter: &ServiceFilter) -> ServiceDuration {
        aggregation::total(periods, filter)
    }

    /// Validates the person and runs one simulation
    ///
    /// # Errors
    ///
    /// Returns `Party` if the person's dates are inconsistent with the
    /// reference date.
    pub fn run_simulation(
        &self,
        person: &Person,
        periods: &[ServicePeriod],
        variant: RuleVariant,
        reference_date: NaiveDate,
    ) -> Result<EligibilityResult, RetirementError> {
        person.validate_at(reference_date)?;
        Ok(self.engine.run_simulation(person, periods, variant, reference_date))
    }

    /// Validates the person and runs every variant
    pub fn run_all(
        &self,
        person: &Person,
        periods: &[ServicePeriod],
        reference_date: NaiveDate,
    ) -> Result<Vec<EligibilityResult>, RetirementError> {
        person.validate_at(reference_date)?;
        Ok(self.engine.run_all(person, periods, reference_date))
    }
}
