//! Service time domain errors

use thiserror::Error;

use core_kernel::TemporalError;

/// Errors that can occur when recording or converting service periods
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    /// Period dates are not a valid closed interval
    #[error(transparent)]
    Temporal(#[from] TemporalError),

    /// Conversion requested on a period that does not qualify
    #[error("Period {id} is not eligible for time conversion: {reason}")]
    NotConvertible {
        id: String,
        reason: String,
    },

    /// Period with the given ID was not found in the record
    #[error("Service period not found: {0}")]
    PeriodNotFound(String),

    /// A period with the same ID is already in the record
    #[error("Service period already recorded: {0}")]
    DuplicatePeriod(String),

    /// Period or person belongs to a different owner than the record
    #[error("Owner mismatch: record belongs to {expected}, got {actual}")]
    OwnerMismatch {
        expected: String,
        actual: String,
    },
}

impl ServiceError {
    /// Creates a PeriodNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        ServiceError::PeriodNotFound(id.to_string())
    }

    /// Creates a NotConvertible error
    pub fn not_convertible(id: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        ServiceError::NotConvertible {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a DuplicatePeriod error from any ID type
    pub fn duplicate(id: impl std::fmt::Display) -> Self {
        ServiceError::DuplicatePeriod(id.to_string())
    }

    pub fn owner_mismatch(expected: impl std::fmt::Display, actual: impl std::fmt::Display) -> Self {
        ServiceError::OwnerMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
