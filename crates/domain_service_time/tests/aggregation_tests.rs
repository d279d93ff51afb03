//! Aggregation Tests
//!
//! Exercises totals through `ServiceRecord` so that concomitance flags are
//! assigned the way callers see them.

use chrono::{Duration, NaiveDate};
use core_kernel::{PersonId, ServiceDuration};
use domain_party::{Person, Sex};
use domain_service_time::{
    role_time, total, total_up_to, ConversionPolicy, ServiceCategory, ServiceFilter,
    ServicePeriod, ServiceRecord,
};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn period(owner: PersonId, start: NaiveDate, end: NaiveDate, category: ServiceCategory) -> ServicePeriod {
    ServicePeriod::new(owner, start, end, "Employer", category).unwrap()
}

mod filters {
    use super::*;

    #[test]
    fn test_role_filter_matches_exact_title() {
        let owner = PersonId::new();
        let periods = vec![
            period(owner, date(2000, 1, 1), date(2000, 12, 30), ServiceCategory::Statutory)
                .with_role("Auditor"),
            period(owner, date(2001, 1, 1), date(2001, 12, 31), ServiceCategory::Statutory)
                .with_role("auditor"),
        ];

        assert_eq!(
            total(&periods, &ServiceFilter::Role("Auditor".into())),
            ServiceDuration::new(1, 0, 0)
        );
    }

    #[test]
    fn test_category_filter() {
        let owner = PersonId::new();
        let periods = vec![
            period(owner, date(2000, 1, 1), date(2000, 12, 30), ServiceCategory::Military),
            period(owner, date(2001, 1, 1), date(2001, 12, 31), ServiceCategory::Teaching),
        ];

        assert_eq!(
            total(&periods, &ServiceFilter::Category(ServiceCategory::Military)),
            ServiceDuration::new(1, 0, 0)
        );
        assert_eq!(total(&periods, &ServiceFilter::Teaching), ServiceDuration::new(1, 0, 0));
        assert_eq!(total(&periods, &ServiceFilter::PublicService), ServiceDuration::ZERO);
    }

    #[test]
    fn test_filter_json_shape() {
        let filter: ServiceFilter =
            serde_json::from_str(r#"{"kind": "role", "value": "Teacher"}"#).unwrap();
        assert_eq!(filter, ServiceFilter::Role("Teacher".into()));

        let filter: ServiceFilter = serde_json::from_str(r#"{"kind": "public_service"}"#).unwrap();
        assert_eq!(filter, ServiceFilter::PublicService);
    }
}

mod role {
    use super::*;

    #[test]
    fn test_no_current_role_is_zero() {
        let person = Person::new(date(1970, 1, 1), Sex::Female);
        let periods = vec![
            period(person.id, date(2000, 1, 1), date(2010, 1, 1), ServiceCategory::Statutory)
                .with_role("Clerk"),
        ];

        assert_eq!(role_time(&person, &periods), ServiceDuration::ZERO);
    }

    #[test]
    fn test_current_role_time() {
        let person = Person::new(date(1970, 1, 1), Sex::Female).with_current_role("Clerk");
        let periods = vec![
            period(person.id, date(2000, 1, 1), date(2000, 12, 30), ServiceCategory::Statutory)
                .with_role("Clerk"),
            period(person.id, date(2001, 1, 1), date(2005, 1, 1), ServiceCategory::Statutory)
                .with_role("Director"),
        ];

        assert_eq!(role_time(&person, &periods), ServiceDuration::new(1, 0, 0));
    }

    #[test]
    fn test_empty_role_title_is_no_role() {
        let person = Person::new(date(1970, 1, 1), Sex::Male).with_current_role("");
        let periods = vec![
            period(person.id, date(2000, 1, 1), date(2000, 12, 30), ServiceCategory::Statutory)
                .with_role(""),
        ];

        assert_eq!(role_time(&person, &periods), ServiceDuration::ZERO);
    }

    #[test]
    fn test_whitespace_role_title_matches_verbatim() {
        let person = Person::new(date(1970, 1, 1), Sex::Male).with_current_role(" ");
        let periods = vec![
            period(person.id, date(2000, 1, 1), date(2000, 12, 30), ServiceCategory::Statutory)
                .with_role(" "),
            period(person.id, date(2001, 1, 1), date(2001, 12, 31), ServiceCategory::Statutory)
                .with_role("Clerk"),
        ];

        assert_eq!(role_time(&person, &periods), ServiceDuration::new(1, 0, 0));
    }
}

mod record {
    use super::*;

    #[test]
    fn test_overlapping_time_counted_once() {
        let owner = PersonId::new();
        let mut record = ServiceRecord::new(owner);
        record
            .add_period(period(owner, date(2010, 1, 1), date(2019, 12, 31), ServiceCategory::Statutory))
            .unwrap();
        record
            .add_period(period(owner, date(2015, 1, 1), date(2015, 12, 31), ServiceCategory::Teaching))
            .unwrap();

        let contribution = record.total(&ServiceFilter::Contribution);

        assert_eq!(contribution.to_days(), 3652);
        assert_eq!(record.total(&ServiceFilter::Teaching), ServiceDuration::ZERO);
    }

    #[test]
    fn test_reschedule_clears_overlap() {
        let owner = PersonId::new();
        let mut record = ServiceRecord::new(owner);
        record
            .add_period(period(owner, date(2020, 1, 1), date(2020, 6, 30), ServiceCategory::Statutory))
            .unwrap();
        let id = record
            .add_period(period(owner, date(2020, 6, 1), date(2020, 12, 31), ServiceCategory::Statutory))
            .unwrap()
            .0
            .id();

        let flagged = record.update_period_dates(id, date(2020, 7, 1), date(2020, 12, 31)).unwrap();

        assert!(!flagged);
        assert!(!record.get(id).unwrap().is_concomitant());
    }

    #[test]
    fn test_transfer_rechecks_against_new_owner() {
        let alice = PersonId::new();
        let bob = PersonId::new();
        let mut from = ServiceRecord::new(alice);
        let mut to = ServiceRecord::new(bob);
        to.add_period(period(bob, date(2020, 1, 1), date(2020, 12, 31), ServiceCategory::Cres))
            .unwrap();
        let id = from
            .add_period(period(alice, date(2020, 3, 1), date(2020, 3, 31), ServiceCategory::Cres))
            .unwrap()
            .0
            .id();

        let flagged = from.transfer_period(id, &mut to).unwrap();

        assert!(flagged);
        assert!(from.is_empty());
        assert_eq!(to.get(id).unwrap().owner_id(), bob);
    }

    #[test]
    fn test_remove_unknown_period() {
        let mut record = ServiceRecord::new(PersonId::new());
        let stray = period(PersonId::new(), date(2020, 1, 1), date(2020, 1, 31), ServiceCategory::Cres);
        assert!(record.remove_period(stray.id()).is_err());
    }

    #[test]
    fn test_converted_period_counts_scaled_time() {
        let person = Person::new(date(1965, 1, 1), Sex::Male);
        let policy = ConversionPolicy::default();
        let mut record = ServiceRecord::new(person.id);
        let id = record
            .add_period(
                period(person.id, date(2011, 1, 1), date(2020, 12, 31), ServiceCategory::PrivateSector)
                    .with_hazardous(true),
            )
            .unwrap()
            .0
            .id();

        let converted = record.apply_conversion(id, &person, &policy).unwrap();
        assert_eq!(converted.conversion_factor(), Some(1.4));

        assert_eq!(record.total(&ServiceFilter::Contribution).to_days(), 5114);
        assert!(record.apply_conversion(id, &person, &policy).is_err());
    }

    #[test]
    fn test_conversion_for_other_person_rejected() {
        let person = Person::new(date(1965, 1, 1), Sex::Male);
        let stranger = Person::new(date(1965, 1, 1), Sex::Male);
        let mut record = ServiceRecord::new(person.id);
        let id = record
            .add_period(
                period(person.id, date(2011, 1, 1), date(2020, 12, 31), ServiceCategory::PrivateSector)
                    .with_hazardous(true),
            )
            .unwrap()
            .0
            .id();

        let result = record.apply_conversion(id, &stranger, &ConversionPolicy::default());
        assert!(result.is_err());
        assert!(!record.get(id).unwrap().is_converted());
    }

    #[test]
    fn test_totals_by_category() {
        let owner = PersonId::new();
        let mut record = ServiceRecord::new(owner);
        record
            .add_period(period(owner, date(2000, 1, 1), date(2000, 12, 30), ServiceCategory::Military))
            .unwrap();
        record
            .add_period(period(owner, date(2001, 1, 1), date(2001, 12, 31), ServiceCategory::Statutory))
            .unwrap();

        let totals = record.totals_by_category();

        assert_eq!(
            totals,
            vec![
                (ServiceCategory::Statutory, ServiceDuration::new(1, 0, 0)),
                (ServiceCategory::Military, ServiceDuration::new(1, 0, 0)),
            ]
        );
    }
}

mod as_of {
    use super::*;

    #[test]
    fn test_future_periods_ignored() {
        let owner = PersonId::new();
        let periods = vec![
            period(owner, date(2000, 1, 1), date(2000, 12, 30), ServiceCategory::Statutory),
            period(owner, date(2030, 1, 1), date(2030, 12, 31), ServiceCategory::Statutory),
        ];

        assert_eq!(
            total_up_to(&periods, &ServiceFilter::Contribution, date(2025, 1, 1)),
            ServiceDuration::new(1, 0, 0)
        );
    }

    #[test]
    fn test_start_on_as_of_counts_one_day() {
        let owner = PersonId::new();
        let periods = vec![period(owner, date(2025, 1, 1), date(2030, 1, 1), ServiceCategory::Statutory)];

        assert_eq!(
            total_up_to(&periods, &ServiceFilter::Contribution, date(2025, 1, 1)),
            ServiceDuration::new(0, 0, 1)
        );
    }
}

/// Builds back-to-back periods from (gap, length) pairs in days
fn sequential_periods(owner: PersonId, spans: &[(i64, i64)]) -> Vec<ServicePeriod> {
    let mut cursor = date(1980, 1, 1);
    spans
        .iter()
        .map(|&(gap, length)| {
            let start = cursor + Duration::days(gap);
            let end = start + Duration::days(length);
            cursor = end + Duration::days(1);
            period(owner, start, end, ServiceCategory::Statutory)
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_non_overlapping_total_is_order_independent(
        spans in prop::collection::vec((0i64..400, 0i64..2000), 1..8),
        seed in any::<u64>(),
    ) {
        let owner = PersonId::new();
        let periods = sequential_periods(owner, &spans);

        let mut shuffled = periods.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        prop_assert_eq!(
            total(&periods, &ServiceFilter::Contribution),
            total(&shuffled, &ServiceFilter::Contribution)
        );
    }

    #[test]
    fn prop_sequential_periods_never_concomitant(
        spans in prop::collection::vec((0i64..400, 0i64..2000), 1..8),
    ) {
        let owner = PersonId::new();
        let mut record = ServiceRecord::new(owner);
        for p in sequential_periods(owner, &spans) {
            let (_, flagged) = record.add_period(p).unwrap();
            prop_assert!(!flagged);
        }
    }
}
