//! Party Domain
//!
//! This crate holds the person a retirement simulation is run for: birth
//! date, sex, the role currently held and the date public service began.
//!
//! # Example
//!
//! ```rust
//! use domain_party::{Person, Sex};
//! use chrono::NaiveDate;
//!
//! let person = Person::new(NaiveDate::from_ymd_opt(1960, 1, 1).unwrap(), Sex::Male)
//!     .with_current_role("Auditor");
//!
//! let age = person.age_at(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//! assert_eq!(age, 65);
//! ```

pub mod person;
pub mod error;

pub use person::{Person, Sex};
pub use error::PartyError;
