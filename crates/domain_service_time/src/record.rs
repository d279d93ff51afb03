//! A person's service record
//!
//! `ServiceRecord` owns the periods of one person and keeps their
//! concomitance flags current as periods are added, rescheduled or moved to
//! another owner.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

use core_kernel::{PersonId, ServiceDuration, ServicePeriodId};
use domain_party::Person;
use crate::aggregation::{self, ServiceFilter};
use crate::conversion::ConversionPolicy;
use crate::error::ServiceError;
use crate::overlap;
use crate::period::{ServiceCategory, ServicePeriod};

/// The service periods of one person, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceRecord {
    owner_id: PersonId,
    periods: Vec<ServicePeriod>,
}

impl ServiceRecord {
    /// Creates an empty record
    pub fn new(owner_id: PersonId) -> Self {
        Self {
            owner_id,
            periods: Vec::new(),
        }
    }

    /// Rebuilds a record from previously stored periods
    ///
    /// Flags are kept as stored; the overlap check is not re-run.
    ///
    /// # Errors
    ///
    /// Returns `OwnerMismatch` if any period belongs to another person, or
    /// `DuplicatePeriod` if two periods share an ID.
    pub fn from_stored(owner_id: PersonId, periods: Vec<ServicePeriod>) -> Result<Self, ServiceError> {
        let mut seen = HashSet::with_capacity(periods.len());
        for period in &periods {
            if period.owner_id() != owner_id {
                return Err(ServiceError::owner_mismatch(owner_id, period.owner_id()));
            }
            if !seen.insert(period.id()) {
                return Err(ServiceError::duplicate(period.id()));
            }
        }
        Ok(Self { owner_id, periods })
    }

    pub fn owner_id(&self) -> PersonId {
        self.owner_id
    }

    pub fn periods(&self) -> &[ServicePeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn get(&self, id: ServicePeriodId) -> Option<&ServicePeriod> {
        self.periods.iter().find(|p| p.id() == id)
    }

    /// Periods that count towards totals
    pub fn non_concomitant(&self) -> impl Iterator<Item = &ServicePeriod> {
        self.periods.iter().filter(|p| !p.is_concomitant())
    }

    /// Adds a period, flagging it if it overlaps one already recorded
    ///
    /// Returns the stored period and its concomitance flag. Periods already
    /// in the record are not re-flagged.
    ///
    /// # Errors
    ///
    /// Returns `OwnerMismatch` if the period belongs to another person, or
    /// `DuplicatePeriod` if its ID is already recorded.
    #[instrument(skip(self, period), fields(owner_id = %self.owner_id, period_id = %period.id()))]
    pub fn add_period(&mut self, mut period: ServicePeriod) -> Result<(&ServicePeriod, bool), ServiceError> {
        if period.owner_id() != self.owner_id {
            return Err(ServiceError::owner_mismatch(self.owner_id, period.owner_id()));
        }
        if self.get(period.id()).is_some() {
            return Err(ServiceError::duplicate(period.id()));
        }

        let concomitant = match overlap::find_overlap(&period, &self.periods) {
            Some(existing) => {
                debug!(conflicting_period = %existing.id(), "Period overlaps existing service");
                true
            }
            None => false,
        };
        period.set_concomitant(concomitant);
        self.periods.push(period);

        let stored = &self.periods[self.periods.len() - 1];
        info!(concomitant, "Service period recorded");
        Ok((stored, concomitant))
    }

    /// Changes a period's dates and re-runs the overlap check for it
    ///
    /// Returns the new concomitance flag.
    ///
    /// # Errors
    ///
    /// Returns `PeriodNotFound` for an unknown id, or `Temporal` if `end` is
    /// before `start`, in which case the period is unchanged.
    #[instrument(skip(self), fields(owner_id = %self.owner_id))]
    pub fn update_period_dates(
        &mut self,
        id: ServicePeriodId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, ServiceError> {
        let index = self.index_of(id)?;
        self.periods[index].reschedule(start, end)?;

        let concomitant = overlap::is_concomitant(&self.periods[index], &self.periods);
        self.periods[index].set_concomitant(concomitant);
        debug!(concomitant, "Service period rescheduled");
        Ok(concomitant)
    }

    /// Removes a period and returns it
    ///
    /// Flags of the remaining periods are left as they were.
    ///
    /// # Errors
    ///
    /// Returns `PeriodNotFound` for an unknown id.
    #[instrument(skip(self), fields(owner_id = %self.owner_id))]
    pub fn remove_period(&mut self, id: ServicePeriodId) -> Result<ServicePeriod, ServiceError> {
        let index = self.index_of(id)?;
        let removed = self.periods.remove(index);
        debug!("Service period removed");
        Ok(removed)
    }

    /// Moves a period into another person's record
    ///
    /// The period is re-checked for overlap against its new owner's periods.
    /// Returns the new concomitance flag.
    ///
    /// # Errors
    ///
    /// Returns `PeriodNotFound` for an unknown id, or `DuplicatePeriod` if
    /// the target already holds a period with this id. Both records are
    /// unchanged on error.
    pub fn transfer_period(
        &mut self,
        id: ServicePeriodId,
        target: &mut ServiceRecord,
    ) -> Result<bool, ServiceError> {
        if target.get(id).is_some() {
            return Err(ServiceError::duplicate(id));
        }
        let mut period = self.remove_period(id)?;
        period.set_owner(target.owner_id);
        let (_, concomitant) = target.add_period(period)?;
        Ok(concomitant)
    }

    /// Converts a hazardous period's time for the record's owner
    ///
    /// # Errors
    ///
    /// Returns `OwnerMismatch` if `person` does not own this record,
    /// `PeriodNotFound` for an unknown id, or `NotConvertible` if the period
    /// does not qualify.
    #[instrument(skip(self, person, policy), fields(owner_id = %self.owner_id))]
    pub fn apply_conversion(
        &mut self,
        id: ServicePeriodId,
        person: &Person,
        policy: &ConversionPolicy,
    ) -> Result<&ServicePeriod, ServiceError> {
        if person.id != self.owner_id {
            return Err(ServiceError::owner_mismatch(self.owner_id, person.id));
        }
        let index = self.index_of(id)?;
        policy.try_apply(&mut self.periods[index], person)?;
        Ok(&self.periods[index])
    }

    /// Aggregates this record's periods
    pub fn total(&self, filter: &ServiceFilter) -> ServiceDuration {
        aggregation::total(&self.periods, filter)
    }

    /// Per-category totals, omitting categories with no time
    pub fn totals_by_category(&self) -> Vec<(ServiceCategory, ServiceDuration)> {
        aggregation::totals_by_category(&self.periods)
    }

    fn index_of(&self, id: ServicePeriodId) -> Result<usize, ServiceError> {
        self.periods
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| ServiceError::not_found(id))
    }
}
