//! Retirement domain errors
//!
//! An unregistered rule variant is not an error inside the engine; it yields
//! a non-eligible result with a note. `UnknownRuleVariant` is only raised
//! when a variant name cannot be parsed.

use thiserror::Error;

use domain_party::PartyError;
use domain_service_time::ServiceError;

/// Errors that can occur in the retirement domain
#[derive(Debug, Error, PartialEq)]
pub enum RetirementError {
    /// Variant name does not match any known rule
    #[error("Unknown retirement rule: {0}")]
    UnknownRuleVariant(String),

    /// Service record operation failed
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Person data is inconsistent with the simulation
    #[error(transparent)]
    Party(#[from] PartyError),
}

impl RetirementError {
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        RetirementError::UnknownRuleVariant(name.into())
    }
}
