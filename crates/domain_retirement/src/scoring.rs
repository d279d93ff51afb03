//! Score and benefit percentage
//!
//! Both are computed from the general contribution total. The score keeps
//! the legacy two-step rounding: the month and day fraction is rounded to two
//! decimals half-up in double precision, then the sum is truncated.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::ServiceDuration;

/// Contribution years covered by the base percentage
pub const BASE_YEARS: u32 = 20;

/// Percentage granted up to `BASE_YEARS`
pub const BASE_PERCENT: Decimal = dec!(60);

/// Percentage added for each year beyond `BASE_YEARS`
pub const PERCENT_PER_EXTRA_YEAR: Decimal = dec!(2);

/// Age plus contribution time, as whole points
///
/// # Example
///
/// ```rust
/// use core_kernel::ServiceDuration;
/// use domain_retirement::scoring::score;
///
/// // 11 months 29 days is 0.9961 of a year, which rounds up to 1.00
/// assert_eq!(score(60, &ServiceDuration::new(30, 11, 29)), 91);
/// assert_eq!(score(60, &ServiceDuration::new(30, 6, 0)), 90);
/// ```
pub fn score(age: i32, contribution: &ServiceDuration) -> i32 {
    let fraction = f64::from(contribution.months()) / 12.0 + f64::from(contribution.days()) / 365.0;
    let rounded = (fraction * 100.0 + 0.5).floor() / 100.0;
    (f64::from(age) + f64::from(contribution.years()) + rounded) as i32
}

/// Benefit percentage for a contribution total
///
/// 60% up to twenty years plus two points per additional year. There is no
/// upper cap.
pub fn benefit_percent(contribution: &ServiceDuration) -> Decimal {
    let years = contribution.years();
    if years < BASE_YEARS {
        return BASE_PERCENT;
    }
    BASE_PERCENT + Decimal::from(years - BASE_YEARS) * PERCENT_PER_EXTRA_YEAR
}
