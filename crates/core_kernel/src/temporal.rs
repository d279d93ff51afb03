//! Date handling for service periods
//!
//! This module provides:
//! - Closed date ranges with inclusive endpoints, as used by service periods
//! - Calendar age computation
//! - Timezone-aware resolution of "today" for callers that need a default

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::duration::ServiceDuration;

/// Timezone wrapper for the jurisdiction a simulation runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

impl Timezone {
    /// Converts a UTC datetime to the local calendar date
    pub fn local_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        utc.with_timezone(&self.0).date_naive()
    }

    /// Today's date in this timezone
    pub fn today(&self) -> NaiveDate {
        self.local_date(Utc::now())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::America::Sao_Paulo)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid interval: end {end} is before start {start}")]
    InvalidInterval {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// A closed range of calendar dates
///
/// Both `start` and `end` belong to the range, so two ranges that share a
/// single boundary day overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both endpoints
    pub fn inclusive_days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    /// Returns true if the ranges share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// Returns the part of this range that lies on or before `as_of`
    ///
    /// Returns `None` when the range starts after `as_of`.
    pub fn truncated_at(&self, as_of: NaiveDate) -> Option<DateRange> {
        if self.start > as_of {
            return None;
        }
        Some(Self {
            start: self.start,
            end: self.end.min(as_of),
        })
    }

    /// Service time covered by this range under the 365/30 convention
    pub fn service_duration(&self) -> ServiceDuration {
        ServiceDuration::from_days(self.inclusive_days())
    }
}

/// Whole calendar years elapsed from `from` to `to`
///
/// A year only counts once its anniversary (same month and day) has been
/// reached. The result is negative when `to` precedes `from`.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if years > 0 && (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    } else if years < 0 && (to.month(), to.day()) > (from.month(), from.day()) {
        years += 1;
    }
    years
}
