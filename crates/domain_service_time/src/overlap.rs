//! Concomitance detection
//!
//! Two periods of the same person are concomitant when their closed date
//! ranges share at least one day. Only the period being recorded is flagged,
//! so of two overlapping periods the one entered first keeps counting.

use crate::period::ServicePeriod;

/// Returns the first period in `existing` that overlaps `candidate`
///
/// Only periods with the same owner and a different identity are compared.
pub fn find_overlap<'a>(
    candidate: &ServicePeriod,
    existing: &'a [ServicePeriod],
) -> Option<&'a ServicePeriod> {
    existing.iter().find(|other| {
        other.owner_id() == candidate.owner_id()
            && other.id() != candidate.id()
            && other.range().overlaps(&candidate.range())
    })
}

/// Returns true if `candidate` overlaps any other period of its owner
pub fn is_concomitant(candidate: &ServicePeriod, existing: &[ServicePeriod]) -> bool {
    find_overlap(candidate, existing).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::ServiceCategory;
    use chrono::NaiveDate;
    use core_kernel::PersonId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(owner: PersonId, start: NaiveDate, end: NaiveDate) -> ServicePeriod {
        ServicePeriod::new(owner, start, end, "Agency", ServiceCategory::FederalPublic).unwrap()
    }

    #[test]
    fn test_shared_boundary_day() {
        let owner = PersonId::new();
        let existing = vec![period(owner, date(2020, 1, 1), date(2020, 6, 30))];
        let candidate = period(owner, date(2020, 6, 30), date(2020, 12, 31));

        assert!(is_concomitant(&candidate, &existing));
    }

    #[test]
    fn test_next_day_is_not_concomitant() {
        let owner = PersonId::new();
        let existing = vec![period(owner, date(2020, 1, 1), date(2020, 6, 30))];
        let candidate = period(owner, date(2020, 7, 1), date(2020, 12, 31));

        assert!(!is_concomitant(&candidate, &existing));
    }

    #[test]
    fn test_other_owner_ignored() {
        let existing = vec![period(PersonId::new(), date(2020, 1, 1), date(2020, 12, 31))];
        let candidate = period(PersonId::new(), date(2020, 3, 1), date(2020, 3, 31));

        assert!(!is_concomitant(&candidate, &existing));
    }

    #[test]
    fn test_same_identity_ignored() {
        let owner = PersonId::new();
        let stored = period(owner, date(2020, 1, 1), date(2020, 12, 31));
        let existing = vec![stored.clone()];

        assert!(!is_concomitant(&stored, &existing));
    }
}
