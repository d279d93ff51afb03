//! Retirement Domain
//!
//! This crate evaluates whether a person qualifies for retirement under one
//! of several legal rule variants, and at what benefit percentage.
//!
//! # Rule variants
//!
//! | Variant | Minimum age (M/F) | Contribution | Public service | Role |
//! |---|---|---|---|---|
//! | Permanent | 65/62 | 25 | 10 | 5 |
//! | Transition with toll | 60/57 | 35/30 | 20 | 5 |
//! | Transition by points | 61/56, 62/57 from 2022 | 35/30 | 20 | 5 |
//! | Teacher | 60/57 | 25 of teaching | 10 | 5 |
//! | Hazardous | 60 | 25 of hazardous service | 10 | 5 |
//!
//! The police variant is recognised but has no rule.
//!
//! # Example
//!
//! ```rust,ignore
//! let service = SimulationService::default();
//! let mut record = ServiceRecord::new(person.id);
//! service.add_period(&mut record, period)?;
//! let result = service.run_simulation(&person, record.periods(), RuleVariant::Permanent, date)?;
//! println!("eligible: {}, benefit: {}%", result.eligible, result.benefit_percent);
//! ```

pub mod variant;
pub mod rules;
pub mod registry;
pub mod scoring;
pub mod engine;
pub mod services;
pub mod error;

pub use variant::RuleVariant;
pub use rules::{
    EligibilityRule, HazardousRule, PermanentRule, PointsRule, RuleContext, RuleOutcome,
    TeacherRule, TollRule,
};
pub use registry::RuleRegistry;
pub use scoring::{benefit_percent, score};
pub use engine::{EligibilityEngine, EligibilityResult};
pub use services::SimulationService;
pub use error::RetirementError;
