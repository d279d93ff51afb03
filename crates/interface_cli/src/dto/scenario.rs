//! Scenario DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use core_kernel::PersonId;
use domain_party::Person;
use domain_retirement::RuleVariant;
use domain_service_time::{ServiceCategory, ServiceError, ServicePeriod};

use crate::error::CliError;

/// A person, their service history and what to simulate
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub person: Person,
    #[serde(default)]
    pub periods: Vec<PeriodInput>,
    /// Rule to evaluate when none is given on the command line
    #[serde(default)]
    pub rule: Option<RuleVariant>,
    /// Reference date when none is given on the command line
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl Scenario {
    /// Parses a scenario from JSON text
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scenario file
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::ScenarioIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// A service period as submitted
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub employer_name: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub hazardous: bool,
    /// Requests hazardous time conversion after the period is recorded
    #[serde(default)]
    pub convert: bool,
}

impl PeriodInput {
    /// Builds the domain period for `owner`
    pub fn to_period(&self, owner: PersonId) -> Result<ServicePeriod, ServiceError> {
        let mut period = ServicePeriod::new(
            owner,
            self.start_date,
            self.end_date,
            self.employer_name.clone(),
            self.category,
        )?
        .with_hazardous(self.hazardous);

        if let Some(role) = &self.role {
            period = period.with_role(role.clone());
        }
        if let Some(number) = &self.order_number {
            period = period.with_order_number(number.clone());
        }
        Ok(period)
    }
}
