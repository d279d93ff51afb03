//! Tests for ServiceDuration
//!
//! Covers the fixed 365/30 radix conversion, the carry order of addition,
//! conversion scaling and the algebraic properties relied on by the
//! aggregation code.

use chrono::NaiveDate;
use core_kernel::ServiceDuration;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn normalized_duration() -> impl Strategy<Value = ServiceDuration> {
    (0u32..60, 0u32..12, 0u32..30).prop_map(|(y, m, d)| ServiceDuration::new(y, m, d))
}

mod radix_conversion {
    use super::*;

    #[test]
    fn test_from_days_zero() {
        assert_eq!(ServiceDuration::from_days(0), ServiceDuration::ZERO);
    }

    #[test]
    fn test_from_days_one_year() {
        assert_eq!(ServiceDuration::from_days(365), ServiceDuration::new(1, 0, 0));
    }

    #[test]
    fn test_from_days_leftover_can_reach_twelve_months() {
        assert_eq!(ServiceDuration::from_days(364), ServiceDuration::new(0, 12, 4));
        assert!(!ServiceDuration::from_days(364).is_normalized());
    }

    #[test]
    fn test_between_is_inclusive() {
        let d = ServiceDuration::between(date(2020, 1, 1), date(2020, 12, 31));
        assert_eq!(d.to_days(), 366);
        assert_eq!(d, ServiceDuration::new(1, 0, 1));
    }

    #[test]
    fn test_between_thirty_years() {
        let d = ServiceDuration::between(date(1990, 1, 1), date(2020, 1, 1));
        assert_eq!(d, ServiceDuration::new(30, 0, 8));
    }

    #[test]
    fn test_between_reversed_dates_is_zero() {
        let d = ServiceDuration::between(date(2020, 2, 1), date(2020, 1, 1));
        assert!(d.is_zero());
    }

    #[test]
    fn test_to_days_of_unnormalized_value() {
        assert_eq!(ServiceDuration::new(1, 13, 31).to_days(), 365 + 390 + 31);
    }
}

mod addition {
    use super::*;

    #[test]
    fn test_add_without_carry() {
        let sum = ServiceDuration::new(1, 2, 3) + ServiceDuration::new(4, 5, 6);
        assert_eq!(sum, ServiceDuration::new(5, 7, 9));
    }

    #[test]
    fn test_days_carry_into_months() {
        let sum = ServiceDuration::new(0, 0, 29) + ServiceDuration::new(0, 0, 1);
        assert_eq!(sum, ServiceDuration::new(0, 1, 0));
    }

    #[test]
    fn test_day_carry_can_trigger_month_carry() {
        let sum = ServiceDuration::new(2, 11, 25) + ServiceDuration::new(0, 0, 10);
        assert_eq!(sum, ServiceDuration::new(3, 0, 5));
    }

    #[test]
    fn test_carry_differs_from_radix_conversion() {
        let a = ServiceDuration::new(0, 6, 0);
        let b = ServiceDuration::new(0, 6, 0);
        // 360 days would be (0, 12, 0) under the radix; addition normalizes to a year.
        assert_eq!(a + b, ServiceDuration::new(1, 0, 0));
        assert_eq!(ServiceDuration::from_days((a + b).to_days()), ServiceDuration::new(1, 0, 0));
        assert_eq!(ServiceDuration::from_days(a.to_days() + b.to_days()), ServiceDuration::new(0, 12, 0));
    }

    #[test]
    fn test_unnormalized_operand_is_normalized() {
        let sum = ServiceDuration::from_days(364) + ServiceDuration::ZERO;
        assert_eq!(sum, ServiceDuration::new(1, 0, 4));
    }

    #[test]
    fn test_add_assign() {
        let mut total = ServiceDuration::ZERO;
        total += ServiceDuration::new(0, 7, 20);
        total += ServiceDuration::new(0, 7, 20);
        assert_eq!(total, ServiceDuration::new(1, 3, 10));
    }

    #[test]
    fn test_sum_of_iterator() {
        let parts = vec![
            ServiceDuration::new(1, 0, 0),
            ServiceDuration::new(0, 11, 29),
            ServiceDuration::new(0, 0, 1),
        ];
        let total: ServiceDuration = parts.iter().sum();
        assert_eq!(total, ServiceDuration::new(2, 0, 0));
    }

    #[test]
    fn test_checked_add_overflow() {
        let big = ServiceDuration::new(u32::MAX, 0, 0);
        assert!(big.checked_add(&ServiceDuration::new(1, 0, 0)).is_none());
    }
}

mod scaling {
    use super::*;

    #[test]
    fn test_scale_by_one_is_identity_on_days() {
        let d = ServiceDuration::from_days(1000);
        assert_eq!(d.scaled(1.0), d);
    }

    #[test]
    fn test_scale_floors_fractional_days() {
        // 3653 * 1.4 = 5114.2
        let d = ServiceDuration::from_days(3653);
        assert_eq!(d.scaled(1.4).to_days(), 5114);
    }

    #[test]
    fn test_scale_reproduces_double_precision_product() {
        // 365 * 1.4 evaluates to 510.99999999999994 in double precision.
        assert_eq!(ServiceDuration::from_days(365).scaled(1.4).to_days(), 510);
        assert_eq!(ServiceDuration::from_days(366).scaled(1.4).to_days(), 512);
    }

    #[test]
    fn test_scale_female_factor() {
        assert_eq!(ServiceDuration::from_days(100).scaled(1.2).to_days(), 120);
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(
            ServiceDuration::new(1, 2, 3).to_string(),
            "1 years, 2 months and 3 days"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(ServiceDuration::new(30, 0, 8)).unwrap();
        assert_eq!(json, serde_json::json!({"years": 30, "months": 0, "days": 8}));
    }
}

proptest! {
    #[test]
    fn prop_zero_is_identity(d in normalized_duration()) {
        prop_assert_eq!(d + ServiceDuration::ZERO, d);
        prop_assert_eq!(ServiceDuration::ZERO + d, d);
    }

    #[test]
    fn prop_addition_is_commutative(a in normalized_duration(), b in normalized_duration()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn prop_sum_stays_normalized(a in normalized_duration(), b in normalized_duration()) {
        prop_assert!((a + b).is_normalized());
    }

    #[test]
    fn prop_from_days_roundtrips_through_to_days(n in 0u64..100_000) {
        prop_assert_eq!(ServiceDuration::from_days(n).to_days(), n);
    }
}
