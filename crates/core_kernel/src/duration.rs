//! Service durations under the fixed 365/30 convention
//!
//! Retirement rules measure service time as a (years, months, days) triple
//! where a year is always 365 days and a month always 30 days. This is not
//! calendar arithmetic: leap years and month lengths are deliberately ignored
//! so that totals match the figures produced by the legacy rule definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Days counted as one year
pub const DAYS_PER_YEAR: u64 = 365;

/// Days counted as one month
pub const DAYS_PER_MONTH: u64 = 30;

/// Months counted as one year when normalizing sums
pub const MONTHS_PER_YEAR: u32 = 12;

/// A length of service expressed as years, months and days
///
/// Values built with [`ServiceDuration::from_days`] follow the radix
/// conversion `years = n / 365`, `months = (n % 365) / 30`,
/// `days = (n % 365) % 30`, so the month component may reach 12 when the
/// leftover is 360..=364 days. Sums are normalized with [`Add`], carrying
/// days into months first and months into years second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDuration {
    years: u32,
    months: u32,
    days: u32,
}

impl ServiceDuration {
    /// The empty duration, identity element of addition
    pub const ZERO: ServiceDuration = ServiceDuration {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a duration from its components without normalizing them
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Converts a day count using the fixed 365/30 radix
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::ServiceDuration;
    ///
    /// let d = ServiceDuration::from_days(366);
    /// assert_eq!(d, ServiceDuration::new(1, 0, 1));
    /// ```
    pub fn from_days(total_days: u64) -> Self {
        let remainder = total_days % DAYS_PER_YEAR;
        Self {
            years: (total_days / DAYS_PER_YEAR) as u32,
            months: (remainder / DAYS_PER_MONTH) as u32,
            days: (remainder % DAYS_PER_MONTH) as u32,
        }
    }

    /// Measures the inclusive span between two dates
    ///
    /// Both endpoints count, so a single day yields one day of service.
    /// When `end` precedes `start` the result is [`ServiceDuration::ZERO`].
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let elapsed = (end - start).num_days();
        if elapsed < 0 {
            return Self::ZERO;
        }
        Self::from_days(elapsed as u64 + 1)
    }

    /// Returns the year component
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Returns the month component
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Returns the day component
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Total day count, the exact inverse of [`ServiceDuration::from_days`]
    pub fn to_days(&self) -> u64 {
        u64::from(self.years) * DAYS_PER_YEAR
            + u64::from(self.months) * DAYS_PER_MONTH
            + u64::from(self.days)
    }

    /// Returns true if no service time is represented
    pub fn is_zero(&self) -> bool {
        self.to_days() == 0
    }

    /// Returns true if months and days are within their carry limits
    pub fn is_normalized(&self) -> bool {
        self.months < MONTHS_PER_YEAR && u64::from(self.days) < DAYS_PER_MONTH
    }

    /// Applies a conversion factor to the day count
    ///
    /// The scaled count is `floor(days * factor)` evaluated in double
    /// precision and converted back through the radix. Double precision is
    /// part of the contract: `365 * 1.4` floors to 510, not 511.
    pub fn scaled(&self, factor: f64) -> Self {
        let scaled = (self.to_days() as f64 * factor).floor();
        Self::from_days(scaled as u64)
    }

    /// Adds two durations, carrying days into months and then months into years
    pub fn checked_add(&self, other: &ServiceDuration) -> Option<ServiceDuration> {
        let mut days = self.days.checked_add(other.days)?;
        let mut months = self.months.checked_add(other.months)?;
        let mut years = self.years.checked_add(other.years)?;

        let days_per_month = DAYS_PER_MONTH as u32;
        if days >= days_per_month {
            months = months.checked_add(days / days_per_month)?;
            days %= days_per_month;
        }

        if months >= MONTHS_PER_YEAR {
            years = years.checked_add(months / MONTHS_PER_YEAR)?;
            months %= MONTHS_PER_YEAR;
        }

        Some(Self {
            years,
            months,
            days,
        })
    }
}

impl fmt::Display for ServiceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months and {} days",
            self.years, self.months, self.days
        )
    }
}

impl Add for ServiceDuration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Overflow in ServiceDuration::add")
    }
}

impl AddAssign for ServiceDuration {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for ServiceDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ServiceDuration> for ServiceDuration {
    fn sum<I: Iterator<Item = &'a ServiceDuration>>(iter: I) -> Self {
        iter.copied().fold(Self::ZERO, Add::add)
    }
}
