//! Scenario input and report output

pub mod scenario;
pub mod report;

pub use scenario::{PeriodInput, Scenario};
pub use report::{CategoryTotal, RuleSummary, SimulationReport};
