//! Service periods
//!
//! A service period is one continuous stretch of work for a single employer,
//! tagged with the regime it was served under. Periods carry two derived
//! flags: whether they overlap another period of the same person
//! (concomitance) and whether special hazardous time has been converted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{DateRange, PersonId, ServiceDuration, ServicePeriodId};
use crate::error::ServiceError;

/// Regime a period of service was performed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Statutory civil servant
    #[serde(alias = "ESTATUTARIO")]
    Statutory,
    /// Private sector employment under the labour code (CLT)
    #[serde(alias = "CLT")]
    PrivateSector,
    /// CRES service
    #[serde(alias = "CRES")]
    Cres,
    /// Federal public service
    #[serde(alias = "SERVICO_PUBLICO_FEDERAL")]
    FederalPublic,
    /// State public service
    #[serde(alias = "SERVICO_PUBLICO_ESTADUAL")]
    StatePublic,
    /// Municipal public service
    #[serde(alias = "SERVICO_PUBLICO_MUNICIPAL")]
    MunicipalPublic,
    /// Military service
    #[serde(alias = "SERVICO_MILITAR")]
    Military,
    /// Service performed under hazardous conditions
    #[serde(alias = "INSALUBRE")]
    Hazardous,
    /// Teaching
    #[serde(alias = "MAGISTERIO")]
    Teaching,
}

impl ServiceCategory {
    /// Every category, in declaration order
    pub const ALL: [ServiceCategory; 9] = [
        ServiceCategory::Statutory,
        ServiceCategory::PrivateSector,
        ServiceCategory::Cres,
        ServiceCategory::FederalPublic,
        ServiceCategory::StatePublic,
        ServiceCategory::MunicipalPublic,
        ServiceCategory::Military,
        ServiceCategory::Hazardous,
        ServiceCategory::Teaching,
    ];

    /// Returns true for categories that count as public service time
    pub fn is_public_service(&self) -> bool {
        matches!(
            self,
            ServiceCategory::Statutory
                | ServiceCategory::FederalPublic
                | ServiceCategory::StatePublic
                | ServiceCategory::MunicipalPublic
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServiceCategory::Statutory => "statutory",
            ServiceCategory::PrivateSector => "private_sector",
            ServiceCategory::Cres => "cres",
            ServiceCategory::FederalPublic => "federal_public",
            ServiceCategory::StatePublic => "state_public",
            ServiceCategory::MunicipalPublic => "municipal_public",
            ServiceCategory::Military => "military",
            ServiceCategory::Hazardous => "hazardous",
            ServiceCategory::Teaching => "teaching",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A continuous period of service belonging to one person
///
/// # Invariants
///
/// - The end date is never before the start date
/// - `is_concomitant` reflects the overlap check run when the period was
///   added to, or rescheduled within, its owner's record
/// - Conversion fields are set at most once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicePeriod {
    id: ServicePeriodId,
    owner_id: PersonId,
    #[serde(flatten)]
    range: DateRange,
    employer_name: String,
    category: ServiceCategory,
    role: Option<String>,
    order_number: Option<String>,
    converted: bool,
    conversion_factor: Option<f64>,
    hazardous: bool,
    concomitant: bool,
}

impl ServicePeriod {
    /// Creates a new period
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Temporal` if `end` is before `start`.
    pub fn new(
        owner_id: PersonId,
        start: NaiveDate,
        end: NaiveDate,
        employer_name: impl Into<String>,
        category: ServiceCategory,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            id: ServicePeriodId::new(),
            owner_id,
            range: DateRange::new(start, end)?,
            employer_name: employer_name.into(),
            category,
            role: None,
            order_number: None,
            converted: false,
            conversion_factor: None,
            hazardous: false,
            concomitant: false,
        })
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: ServicePeriodId) -> Self {
        self.id = id;
        self
    }

    /// Sets the role held during the period
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the appointment order number
    pub fn with_order_number(mut self, number: impl Into<String>) -> Self {
        self.order_number = Some(number.into());
        self
    }

    /// Flags the period as served under hazardous conditions
    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    pub fn id(&self) -> ServicePeriodId {
        self.id
    }

    pub fn owner_id(&self) -> PersonId {
        self.owner_id
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn start_date(&self) -> NaiveDate {
        self.range.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.range.end()
    }

    pub fn employer_name(&self) -> &str {
        &self.employer_name
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn order_number(&self) -> Option<&str> {
        self.order_number.as_deref()
    }

    pub fn is_converted(&self) -> bool {
        self.converted
    }

    pub fn conversion_factor(&self) -> Option<f64> {
        self.conversion_factor
    }

    pub fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    pub fn is_concomitant(&self) -> bool {
        self.concomitant
    }

    /// Service time between the start and end dates, both inclusive
    pub fn raw_duration(&self) -> ServiceDuration {
        self.range.service_duration()
    }

    /// Service time after applying the conversion factor, if any
    pub fn adjusted_duration(&self) -> ServiceDuration {
        match (self.converted, self.conversion_factor) {
            (true, Some(factor)) => self.raw_duration().scaled(factor),
            _ => self.raw_duration(),
        }
    }

    /// Returns a copy of this period that ends no later than `as_of`
    ///
    /// Returns `None` when the period starts after `as_of`. The period
    /// itself is left untouched.
    pub fn truncated_at(&self, as_of: NaiveDate) -> Option<ServicePeriod> {
        let range = self.range.truncated_at(as_of)?;
        Some(ServicePeriod {
            range,
            ..self.clone()
        })
    }

    pub(crate) fn reschedule(&mut self, start: NaiveDate, end: NaiveDate) -> Result<(), ServiceError> {
        self.range = DateRange::new(start, end)?;
        Ok(())
    }

    pub(crate) fn set_owner(&mut self, owner_id: PersonId) {
        self.owner_id = owner_id;
    }

    pub(crate) fn set_concomitant(&mut self, concomitant: bool) {
        self.concomitant = concomitant;
    }

    pub(crate) fn mark_converted(&mut self, factor: f64) {
        self.converted = true;
        self.conversion_factor = Some(factor);
    }
}
