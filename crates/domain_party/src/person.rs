//! The person whose retirement is being simulated
//!
//! A `Person` is read-only input to a simulation. Only the attributes the
//! retirement rules depend on are modelled here; contact data and
//! credentials belong to the surrounding application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{whole_years_between, PersonId};
use crate::error::PartyError;

/// Legal sex, which selects age thresholds and conversion factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(alias = "M", alias = "male")]
    Male,
    #[serde(alias = "F", alias = "female")]
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// A person with a service record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    #[serde(default)]
    pub id: PersonId,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Legal sex
    pub sex: Sex,
    /// Title of the role currently held, used for time-in-role requirements
    #[serde(default)]
    pub current_role: Option<String>,
    /// Date the person entered public service
    #[serde(default)]
    pub public_service_entry_date: Option<NaiveDate>,
}

impl Person {
    /// Creates a person with a fresh identifier and no role information
    pub fn new(birth_date: NaiveDate, sex: Sex) -> Self {
        Self {
            id: PersonId::new(),
            birth_date,
            sex,
            current_role: None,
            public_service_entry_date: None,
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }

    /// Sets the role currently held
    pub fn with_current_role(mut self, role: impl Into<String>) -> Self {
        self.current_role = Some(role.into());
        self
    }

    /// Sets the public service entry date
    pub fn with_public_service_entry(mut self, date: NaiveDate) -> Self {
        self.public_service_entry_date = Some(date);
        self
    }

    /// Returns the current role, treating an empty title as no role
    pub fn current_role(&self) -> Option<&str> {
        self.current_role.as_deref().filter(|role| !role.is_empty())
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    /// Age in whole calendar years on the given date
    pub fn age_at(&self, date: NaiveDate) -> i32 {
        whole_years_between(self.birth_date, date)
    }

    /// Checks the person's dates against a reference date
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the birth date is after `reference_date` or
    /// public service began before birth.
    pub fn validate_at(&self, reference_date: NaiveDate) -> Result<(), PartyError> {
        if self.birth_date > reference_date {
            return Err(PartyError::invalid(format!(
                "birth date {} is after reference date {}",
                self.birth_date, reference_date
            )));
        }

        if let Some(entry) = self.public_service_entry_date {
            if entry < self.birth_date {
                return Err(PartyError::invalid(format!(
                    "public service entry {} is before birth date {}",
                    entry, self.birth_date
                )));
            }
        }

        Ok(())
    }
}
