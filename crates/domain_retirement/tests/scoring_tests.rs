//! Scoring Tests

use core_kernel::ServiceDuration;
use domain_retirement::{benefit_percent, score};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::normalized_duration_strategy;

mod score_rounding {
    use super::*;

    #[test]
    fn test_eleven_months_twenty_nine_days_rounds_to_a_year() {
        assert_eq!(score(60, &ServiceDuration::new(30, 11, 29)), 91);
    }

    #[test]
    fn test_eight_days_do_not_add_a_point() {
        assert_eq!(score(65, &ServiceDuration::new(30, 0, 8)), 95);
    }

    #[test]
    fn test_unnormalized_months_can_add_a_point() {
        // Twelve months straight from the radix conversion count as 1.00
        assert_eq!(score(60, &ServiceDuration::from_days(364)), 61);
    }
}

mod benefit {
    use super::*;

    #[test]
    fn test_floor_below_twenty_years() {
        assert_eq!(benefit_percent(&ServiceDuration::ZERO), dec!(60));
        assert_eq!(benefit_percent(&ServiceDuration::new(19, 11, 29)), dec!(60));
    }

    #[test]
    fn test_two_points_per_extra_year() {
        assert_eq!(benefit_percent(&ServiceDuration::new(21, 0, 0)), dec!(62));
        assert_eq!(benefit_percent(&ServiceDuration::new(25, 0, 0)), dec!(70));
    }
}

proptest! {
    #[test]
    fn prop_score_adds_at_most_one_point_for_the_fraction(
        age in 18i32..90,
        contribution in normalized_duration_strategy(),
    ) {
        let base = age + contribution.years() as i32;
        let points = score(age, &contribution);
        prop_assert!(points == base || points == base + 1);
    }

    #[test]
    fn prop_benefit_never_decreases(a in normalized_duration_strategy(), b in normalized_duration_strategy()) {
        let (low, high) = if a.years() <= b.years() { (a, b) } else { (b, a) };
        prop_assert!(benefit_percent(&low) <= benefit_percent(&high));
    }
}
