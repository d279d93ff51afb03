//! Core Kernel - Foundational types for the retirement simulator
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Service durations under the fixed 365-day year / 30-day month convention
//! - Closed date ranges and calendar age computation
//! - Strongly-typed identifiers

pub mod duration;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use duration::ServiceDuration;
pub use temporal::{DateRange, TemporalError, Timezone, whole_years_between};
pub use identifiers::{PersonId, ServicePeriodId, SimulationId};
pub use error::CoreError;
