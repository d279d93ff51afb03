//! Scenario execution

use chrono::NaiveDate;
use tracing::{debug, info};

use domain_retirement::{RuleVariant, SimulationService};
use domain_service_time::ServiceRecord;

use crate::config::SimulatorConfig;
use crate::dto::{CategoryTotal, RuleSummary, Scenario, SimulationReport};
use crate::error::CliError;

/// Rule used when neither the command line nor the scenario names one
pub const DEFAULT_RULE: RuleVariant = RuleVariant::Permanent;

/// Command line overrides for a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub rule: Option<RuleVariant>,
    pub all_rules: bool,
    pub reference_date: Option<NaiveDate>,
}

/// Validates the configuration and builds the service it describes
pub fn build_service(config: &SimulatorConfig) -> Result<SimulationService, CliError> {
    config.validate()?;
    Ok(SimulationService::default().with_conversion_factors(config.conversion))
}

/// Lists every rule variant and whether the engine can evaluate it
pub fn rule_catalog(config: &SimulatorConfig) -> Result<Vec<RuleSummary>, CliError> {
    let service = build_service(config)?;
    let registry = service.engine().registry();
    Ok(RuleVariant::ALL
        .into_iter()
        .map(|variant| RuleSummary {
            variant,
            description: variant.description(),
            implemented: registry.contains(variant),
        })
        .collect())
}

/// Records the scenario's periods and simulates
///
/// Periods are recorded in scenario order, so of two overlapping periods the
/// later one is flagged concomitant. The reference date falls back to the
/// scenario's, then to today in the configured timezone.
pub fn run(
    scenario: &Scenario,
    options: &RunOptions,
    config: &SimulatorConfig,
) -> Result<SimulationReport, CliError> {
    let service = build_service(config)?;
    let person = &scenario.person;
    let mut record = ServiceRecord::new(person.id);

    for input in &scenario.periods {
        let (period, _) = service.add_period(&mut record, input.to_period(person.id)?)?;
        let id = period.id();
        if input.convert {
            service.apply_conversion(&mut record, id, person)?;
        }
    }
    debug!(periods = record.len(), "Scenario recorded");

    let reference_date = match options.reference_date.or(scenario.reference_date) {
        Some(date) => date,
        None => config.resolve_timezone()?.today(),
    };

    let results = if options.all_rules {
        service.run_all(person, record.periods(), reference_date)?
    } else {
        let variant = options.rule.or(scenario.rule).unwrap_or(DEFAULT_RULE);
        vec![service.run_simulation(person, record.periods(), variant, reference_date)?]
    };
    info!(
        %reference_date,
        eligible = results.iter().filter(|r| r.eligible).count(),
        evaluated = results.len(),
        "Simulation complete"
    );

    Ok(SimulationReport {
        person_id: person.id,
        reference_date,
        totals_by_category: record
            .totals_by_category()
            .into_iter()
            .map(|(category, duration)| CategoryTotal { category, duration })
            .collect(),
        periods: record.periods().to_vec(),
        conversion_factors: *service.conversion_policy().factors(),
        results,
    })
}
