//! Report DTOs

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::{PersonId, ServiceDuration};
use domain_retirement::{EligibilityResult, RuleVariant};
use domain_service_time::{ConversionFactors, ServiceCategory, ServicePeriod};

/// Time accumulated in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: ServiceCategory,
    pub duration: ServiceDuration,
}

/// Everything a simulation run produced
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub person_id: PersonId,
    pub reference_date: NaiveDate,
    /// Periods as recorded, with concomitance and conversion flags
    pub periods: Vec<ServicePeriod>,
    pub totals_by_category: Vec<CategoryTotal>,
    /// Factors applied to periods converted during the run
    pub conversion_factors: ConversionFactors,
    pub results: Vec<EligibilityResult>,
}

/// One entry of the rule listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub variant: RuleVariant,
    pub description: &'static str,
    /// False when the engine has no rule registered for the variant
    pub implemented: bool,
}
