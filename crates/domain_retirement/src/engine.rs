//! Eligibility engine
//!
//! The engine is a pure function of a person, their periods, a rule variant
//! and a reference date. Aggregates are computed once per call and shared by
//! every rule evaluated in it. The engine holds only its immutable registry,
//! so one instance can serve concurrent simulations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use core_kernel::{PersonId, ServiceDuration, SimulationId};
use domain_party::Person;
use domain_service_time::{aggregation, ServiceFilter, ServicePeriod};

use crate::registry::RuleRegistry;
use crate::rules::RuleContext;
use crate::scoring;
use crate::variant::RuleVariant;

/// Outcome of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub simulation_id: SimulationId,
    pub person_id: PersonId,
    pub rule_variant: RuleVariant,
    pub reference_date: NaiveDate,
    /// General contribution total, whatever basis the rule counts
    pub contribution_duration: ServiceDuration,
    pub public_service_duration: ServiceDuration,
    pub role_duration: ServiceDuration,
    pub age_at_reference: i32,
    pub score: i32,
    pub benefit_percent: Decimal,
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub unmet_requirements: Vec<String>,
}

/// Totals every rule reads
#[derive(Debug, Clone, Copy)]
struct Aggregates {
    contribution: ServiceDuration,
    public_service: ServiceDuration,
    role_time: ServiceDuration,
}

impl Aggregates {
    fn compute(person: &Person, periods: &[ServicePeriod]) -> Self {
        let aggregates = Self {
            contribution: aggregation::total(periods, &ServiceFilter::Contribution),
            public_service: aggregation::total(periods, &ServiceFilter::PublicService),
            role_time: aggregation::role_time(person, periods),
        };
        debug!(
            contribution = %aggregates.contribution,
            public_service = %aggregates.public_service,
            role_time = %aggregates.role_time,
            "Computed service aggregates"
        );
        aggregates
    }
}

/// Evaluates retirement eligibility under the registered rules
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    registry: RuleRegistry,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(RuleRegistry::standard())
    }
}

impl EligibilityEngine {
    /// Creates an engine over the given registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Runs a simulation under one rule variant
    ///
    /// An unregistered variant is not an error: the result is not eligible
    /// and carries a note naming the variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use domain_party::{Person, Sex};
    /// use domain_retirement::{EligibilityEngine, RuleVariant};
    ///
    /// let person = Person::new(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(), Sex::Female);
    /// let result = EligibilityEngine::default().run_simulation(
    ///     &person,
    ///     &[],
    ///     RuleVariant::Police,
    ///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    /// );
    /// assert!(!result.eligible);
    /// assert_eq!(result.note.as_deref(), Some("Retirement rule not implemented: police"));
    /// ```
    #[instrument(
        skip(self, person, periods),
        fields(person_id = %person.id, period_count = periods.len())
    )]
    pub fn run_simulation(
        &self,
        person: &Person,
        periods: &[ServicePeriod],
        variant: RuleVariant,
        reference_date: NaiveDate,
    ) -> EligibilityResult {
        let aggregates = Aggregates::compute(person, periods);
        self.evaluate(person, periods, variant, reference_date, &aggregates)
    }

    /// Runs a simulation under every variant, in declaration order
    #[instrument(
        skip(self, person, periods),
        fields(person_id = %person.id, period_count = periods.len())
    )]
    pub fn run_all(
        &self,
        person: &Person,
        periods: &[ServicePeriod],
        reference_date: NaiveDate,
    ) -> Vec<EligibilityResult> {
        let aggregates = Aggregates::compute(person, periods);
        RuleVariant::ALL
            .into_iter()
            .map(|variant| self.evaluate(person, periods, variant, reference_date, &aggregates))
            .collect()
    }

    fn evaluate(
        &self,
        person: &Person,
        periods: &[ServicePeriod],
        variant: RuleVariant,
        reference_date: NaiveDate,
        aggregates: &Aggregates,
    ) -> EligibilityResult {
        let age = person.age_at(reference_date);
        let score = scoring::score(age, &aggregates.contribution);

        let mut result = EligibilityResult {
            simulation_id: SimulationId::new(),
            person_id: person.id,
            rule_variant: variant,
            reference_date,
            contribution_duration: aggregates.contribution,
            public_service_duration: aggregates.public_service,
            role_duration: aggregates.role_time,
            age_at_reference: age,
            score,
            benefit_percent: scoring::benefit_percent(&aggregates.contribution),
            eligible: false,
            note: None,
            unmet_requirements: Vec::new(),
        };

        let Some(rule) = self.registry.get(variant) else {
            warn!(%variant, "No rule registered for variant");
            result.note = Some(format!("Retirement rule not implemented: {}", variant));
            return result;
        };

        let ctx = RuleContext {
            person,
            periods,
            reference_date,
            age,
            score,
            contribution: aggregates.contribution,
            public_service: aggregates.public_service,
            role_time: aggregates.role_time,
        };
        let outcome = rule.evaluate(&ctx);

        info!(
            %variant,
            eligible = outcome.eligible,
            unmet = outcome.unmet.len(),
            "Eligibility evaluated"
        );
        result.eligible = outcome.eligible;
        result.unmet_requirements = outcome.unmet;
        result
    }
}
