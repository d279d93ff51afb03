//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so a
//! test only spells out the fields it is about.

use chrono::NaiveDate;
use core_kernel::{PersonId, ServicePeriodId};
use domain_party::{Person, Sex};
use domain_service_time::{ServiceCategory, ServicePeriod};

use crate::fixtures::{date, TemporalFixtures};

/// Builder for test persons
pub struct PersonBuilder {
    id: PersonId,
    birth_date: NaiveDate,
    sex: Sex,
    current_role: Option<String>,
    public_service_entry_date: Option<NaiveDate>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonBuilder {
    /// Creates a builder for a man born 1960-01-01 with no role
    pub fn new() -> Self {
        Self {
            id: PersonId::new(),
            birth_date: date(1960, 1, 1),
            sex: Sex::Male,
            current_role: None,
            public_service_entry_date: None,
        }
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }

    pub fn born(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn male(mut self) -> Self {
        self.sex = Sex::Male;
        self
    }

    pub fn female(mut self) -> Self {
        self.sex = Sex::Female;
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.current_role = Some(role.into());
        self
    }

    pub fn entered_public_service(mut self, entry: NaiveDate) -> Self {
        self.public_service_entry_date = Some(entry);
        self
    }

    /// Builds the person
    pub fn build(self) -> Person {
        Person {
            id: self.id,
            birth_date: self.birth_date,
            sex: self.sex,
            current_role: self.current_role,
            public_service_entry_date: self.public_service_entry_date,
        }
    }
}

/// Builder for test service periods
pub struct ServicePeriodBuilder {
    id: ServicePeriodId,
    owner_id: PersonId,
    start: NaiveDate,
    end: NaiveDate,
    employer_name: String,
    category: ServiceCategory,
    role: Option<String>,
    hazardous: bool,
}

impl ServicePeriodBuilder {
    /// Creates a builder for a statutory period covering the career fixture
    pub fn new(owner_id: PersonId) -> Self {
        Self {
            id: ServicePeriodId::new(),
            owner_id,
            start: TemporalFixtures::career_start(),
            end: TemporalFixtures::career_end(),
            employer_name: "Public Agency".to_string(),
            category: ServiceCategory::Statutory,
            role: None,
            hazardous: false,
        }
    }

    pub fn with_id(mut self, id: ServicePeriodId) -> Self {
        self.id = id;
        self
    }

    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end = end;
        self
    }

    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    pub fn employer(mut self, name: impl Into<String>) -> Self {
        self.employer_name = name.into();
        self
    }

    pub fn category(mut self, category: ServiceCategory) -> Self {
        self.category = category;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn hazardous(mut self) -> Self {
        self.hazardous = true;
        self
    }

    /// Builds the period
    ///
    /// # Panics
    ///
    /// Panics if the end date is before the start date.
    pub fn build(self) -> ServicePeriod {
        let period = ServicePeriod::new(
            self.owner_id,
            self.start,
            self.end,
            self.employer_name,
            self.category,
        )
        .expect("builder dates must be ordered")
        .with_id(self.id)
        .with_hazardous(self.hazardous);

        match self.role {
            Some(role) => period.with_role(role),
            None => period,
        }
    }
}
