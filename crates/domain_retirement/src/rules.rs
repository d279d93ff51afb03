//! Eligibility rules
//!
//! Each rule variant is a type implementing [`EligibilityRule`]. Rules read a
//! precomputed [`RuleContext`] and report every requirement they find unmet,
//! so a caller can show the person how far they are from qualifying.
//!
//! All time thresholds compare the `years` component of a total only.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::ServiceDuration;
use domain_party::{Person, Sex};
use domain_service_time::{aggregation, ServiceFilter, ServicePeriod};

use crate::variant::RuleVariant;

/// Minimum years in the current role, common to every rule
pub const MIN_ROLE_YEARS: u32 = 5;

/// Everything a rule needs to reach a verdict
///
/// The aggregates are computed once per simulation. `contribution` is always
/// the general contribution total; rules that count a narrower kind of
/// service derive it with [`RuleContext::basis_time`].
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    pub person: &'a Person,
    pub periods: &'a [ServicePeriod],
    pub reference_date: NaiveDate,
    pub age: i32,
    pub score: i32,
    pub contribution: ServiceDuration,
    pub public_service: ServiceDuration,
    pub role_time: ServiceDuration,
}

impl RuleContext<'_> {
    /// Contribution time under the given basis
    pub fn basis_time(&self, basis: &ServiceFilter) -> ServiceDuration {
        match basis {
            ServiceFilter::Contribution => self.contribution,
            other => aggregation::total(self.periods, other),
        }
    }

    fn by_sex<T>(&self, male: T, female: T) -> T {
        match self.person.sex {
            Sex::Male => male,
            Sex::Female => female,
        }
    }
}

/// Verdict of a single rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub eligible: bool,
    /// Human readable reasons, empty when eligible
    pub unmet: Vec<String>,
}

/// A retirement rule
pub trait EligibilityRule: fmt::Debug + Send + Sync {
    /// The variant this rule implements
    fn variant(&self) -> RuleVariant;

    /// Which periods count towards the rule's contribution requirement
    fn contribution_basis(&self) -> ServiceFilter {
        ServiceFilter::Contribution
    }

    /// Evaluates the rule
    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome;
}

/// Collects unmet requirements
#[derive(Debug, Default)]
struct Requirements {
    unmet: Vec<String>,
}

impl Requirements {
    fn min_age(mut self, age: i32, min: i32) -> Self {
        if age < min {
            self.unmet.push(format!("age {} is below the minimum of {}", age, min));
        }
        self
    }

    fn min_years(mut self, label: &str, time: &ServiceDuration, min: u32) -> Self {
        if time.years() < min {
            self.unmet.push(format!(
                "{} has {} years, {} required",
                label,
                time.years(),
                min
            ));
        }
        self
    }

    fn require(mut self, met: bool, reason: impl FnOnce() -> String) -> Self {
        if !met {
            self.unmet.push(reason());
        }
        self
    }

    fn finish(self) -> RuleOutcome {
        RuleOutcome {
            eligible: self.unmet.is_empty(),
            unmet: self.unmet,
        }
    }
}

/// Permanent rule
#[derive(Debug, Clone, Copy, Default)]
pub struct PermanentRule;

impl EligibilityRule for PermanentRule {
    fn variant(&self) -> RuleVariant {
        RuleVariant::Permanent
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        Requirements::default()
            .min_age(ctx.age, ctx.by_sex(65, 62))
            .min_years("contribution time", &ctx.contribution, 25)
            .min_years("public service time", &ctx.public_service, 10)
            .min_years("time in current role", &ctx.role_time, MIN_ROLE_YEARS)
            .finish()
    }
}

/// Transition rule with toll
///
/// The toll is the extra time still owed under the transition; the person
/// qualifies only once it is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TollRule {
    toll: ServiceDuration,
}

impl TollRule {
    pub fn new(toll: ServiceDuration) -> Self {
        Self { toll }
    }

    pub fn toll(&self) -> ServiceDuration {
        self.toll
    }
}

impl EligibilityRule for TollRule {
    fn variant(&self) -> RuleVariant {
        RuleVariant::TransitionToll
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        Requirements::default()
            .min_age(ctx.age, ctx.by_sex(60, 57))
            .min_years("contribution time", &ctx.contribution, ctx.by_sex(35, 30))
            .min_years("public service time", &ctx.public_service, 20)
            .min_years("time in current role", &ctx.role_time, MIN_ROLE_YEARS)
            .require(self.toll.is_zero(), || format!("toll of {} not yet served", self.toll))
            .finish()
    }
}

/// Transition rule by points
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsRule;

impl PointsRule {
    /// Minimum points required in the given year
    ///
    /// Rises by one point a year from 2019 up to a cap.
    pub fn min_points(sex: Sex, year: i32) -> i32 {
        match sex {
            Sex::Male => (96 + (year - 2019)).min(105),
            Sex::Female => (86 + (year - 2019)).min(100),
        }
    }

    /// Minimum age, raised by one year from 2022
    pub fn min_age(sex: Sex, year: i32) -> i32 {
        let bump = if year >= 2022 { 1 } else { 0 };
        match sex {
            Sex::Male => 61 + bump,
            Sex::Female => 56 + bump,
        }
    }
}

impl EligibilityRule for PointsRule {
    fn variant(&self) -> RuleVariant {
        RuleVariant::TransitionPoints
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let sex = ctx.person.sex;
        let year = ctx.reference_date.year();
        let min_points = Self::min_points(sex, year);

        Requirements::default()
            .min_age(ctx.age, Self::min_age(sex, year))
            .min_years("contribution time", &ctx.contribution, ctx.by_sex(35, 30))
            .require(ctx.score >= min_points, || {
                format!("score {} is below the minimum of {}", ctx.score, min_points)
            })
            .min_years("public service time", &ctx.public_service, 20)
            .min_years("time in current role", &ctx.role_time, MIN_ROLE_YEARS)
            .finish()
    }
}

/// Special rule for teachers, counted on teaching time
#[derive(Debug, Clone, Copy, Default)]
pub struct TeacherRule;

impl EligibilityRule for TeacherRule {
    fn variant(&self) -> RuleVariant {
        RuleVariant::Teacher
    }

    fn contribution_basis(&self) -> ServiceFilter {
        ServiceFilter::Teaching
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let teaching = ctx.basis_time(&self.contribution_basis());

        Requirements::default()
            .min_age(ctx.age, ctx.by_sex(60, 57))
            .min_years("teaching time", &teaching, 25)
            .min_years("public service time", &ctx.public_service, 10)
            .min_years("time in current role", &ctx.role_time, MIN_ROLE_YEARS)
            .finish()
    }
}

/// Special rule for hazardous service, counted on hazardous time
#[derive(Debug, Clone, Copy, Default)]
pub struct HazardousRule;

impl EligibilityRule for HazardousRule {
    fn variant(&self) -> RuleVariant {
        RuleVariant::Hazardous
    }

    fn contribution_basis(&self) -> ServiceFilter {
        ServiceFilter::Hazardous
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let hazardous = ctx.basis_time(&self.contribution_basis());

        Requirements::default()
            .min_age(ctx.age, 60)
            .min_years("hazardous service time", &hazardous, 25)
            .min_years("public service time", &ctx.public_service, 10)
            .min_years("time in current role", &ctx.role_time, MIN_ROLE_YEARS)
            .finish()
    }
}
