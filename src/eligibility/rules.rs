//! Individual hard-rule predicates.

use crate::model::{GenderCounts, Group, Person};
use crate::normalize::MajorCategory;

/// Medical cohorts that may not share a group with each other.
pub const SEPARATED_COHORTS: [&str; 2] = ["24", "25"];

/// Leader age that relaxes the age ordering rule.
pub const AGE_EXCEPTION_LEADER: u32 = 37;

/// Oldest member allowed under an [`AGE_EXCEPTION_LEADER`].
pub const AGE_EXCEPTION_CAP: u32 = 39;

/// Rule 1: leader and candidate are both medical, both carry a cohort suffix
/// in [`SEPARATED_COHORTS`], and the suffixes differ.
pub fn cohorts_conflict(leader: &Person, candidate: &Person) -> bool {
    if leader.major_category() != MajorCategory::Medical
        || candidate.major_category() != MajorCategory::Medical
    {
        return false;
    }
    match (leader.cohort_suffix(), candidate.cohort_suffix()) {
        (Some(a), Some(b)) => {
            SEPARATED_COHORTS.contains(&a) && SEPARATED_COHORTS.contains(&b) && a != b
        }
        _ => false,
    }
}

/// Rule 2: another member of `group` already has the candidate's canonical
/// school.
///
/// The candidate itself is skipped, so the check also works for a member
/// already in the group. A missing school canonicalizes to `""` and
/// conflicts with another missing school like any other name.
pub fn school_taken(group: &Group, candidate: &Person) -> bool {
    let school = candidate.canonical_school();
    group
        .members()
        .iter()
        .filter(|m| m.id != candidate.id)
        .any(|m| m.canonical_school() == school)
}

/// Rule 3: the candidate is too old for the group.
///
/// Under a leader aged exactly [`AGE_EXCEPTION_LEADER`] the cap is
/// [`AGE_EXCEPTION_CAP`] inclusive; otherwise the candidate must be strictly
/// younger than the helper.
pub fn age_order_violated(leader: &Person, helper: &Person, candidate: &Person) -> bool {
    if leader.age == AGE_EXCEPTION_LEADER {
        candidate.age > AGE_EXCEPTION_CAP
    } else {
        candidate.age >= helper.age
    }
}

/// Rule 4: with the candidate added to `counts`, neither gender deviates from
/// its expected count by more than `tolerance`.
pub fn gender_within_tolerance(
    counts: GenderCounts,
    candidate: &Person,
    gender_ratio: f64,
    tolerance: u32,
) -> bool {
    let after = counts.with(candidate.gender);
    let total = after.total() as f64;
    let male_diff = (after.male as f64 - total * gender_ratio).abs();
    let female_diff = (after.female as f64 - total * (1.0 - gender_ratio)).abs();
    let tolerance = f64::from(tolerance);
    male_diff <= tolerance && female_diff <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, Role};

    fn medical(id: u32, cohort: &str) -> Person {
        Person::new(id, "p", Gender::Male, 25, Role::Member)
            .with_major("의예과")
            .with_cohort(cohort)
    }

    #[test]
    fn test_cohort_conflict_requires_both_medical() {
        let leader = medical(1, "2024");
        assert!(cohorts_conflict(&leader, &medical(2, "2025")));

        let nurse = medical(3, "2025").with_major("간호학과");
        assert!(!cohorts_conflict(&leader, &nurse));

        let leader_dental = leader.clone().with_major("치");
        assert!(!cohorts_conflict(&leader_dental, &medical(2, "2025")));
    }

    #[test]
    fn test_cohort_conflict_only_24_vs_25() {
        let leader = medical(1, "24");
        assert!(!cohorts_conflict(&leader, &medical(2, "24")));
        assert!(!cohorts_conflict(&leader, &medical(2, "23")));
        assert!(!cohorts_conflict(&medical(1, "23"), &medical(2, "25")));
    }

    #[test]
    fn test_cohort_conflict_ignores_placeholders() {
        let leader = medical(1, "24");
        assert!(!cohorts_conflict(&leader, &medical(2, "-")));
        assert!(!cohorts_conflict(&leader, &medical(2, "")));
        let mut no_cohort = medical(2, "25");
        no_cohort.cohort = None;
        assert!(!cohorts_conflict(&leader, &no_cohort));
    }

    #[test]
    fn test_age_rule_normal_leader() {
        let leader = Person::new(1, "l", Gender::Male, 30, Role::Leader);
        let helper = Person::new(2, "h", Gender::Male, 27, Role::Helper);
        let young = Person::new(3, "c", Gender::Male, 26, Role::Member);
        let same = Person::new(4, "c", Gender::Male, 27, Role::Member);
        assert!(!age_order_violated(&leader, &helper, &young));
        assert!(age_order_violated(&leader, &helper, &same));
    }

    #[test]
    fn test_age_rule_exception_leader() {
        let leader = Person::new(1, "l", Gender::Male, 37, Role::Leader);
        let helper = Person::new(2, "h", Gender::Male, 30, Role::Helper);
        let at_cap = Person::new(3, "c", Gender::Male, 39, Role::Member);
        let over = Person::new(4, "c", Gender::Male, 40, Role::Member);
        assert!(!age_order_violated(&leader, &helper, &at_cap));
        assert!(age_order_violated(&leader, &helper, &over));
    }

    #[test]
    fn test_school_taken_skips_self() {
        let mut group = Group::new(
            1,
            Person::new(1, "l", Gender::Male, 30, Role::Leader),
            Person::new(2, "h", Gender::Female, 28, Role::Helper),
        );
        let existing = Person::new(3, "a", Gender::Male, 22, Role::Member).with_school("부산대학교");
        group.push_member(existing.clone());
        group.push_member(Person::new(4, "b", Gender::Male, 22, Role::Member));

        assert!(!school_taken(&group, &existing));
        let rival = Person::new(5, "c", Gender::Female, 22, Role::Member).with_school("부산대");
        // "부산대" and "부산대학교" canonicalize differently.
        assert!(!school_taken(&group, &rival));
        let same = Person::new(6, "d", Gender::Female, 22, Role::Member).with_school("부산대학교");
        assert!(school_taken(&group, &same));
    }

    #[test]
    fn test_missing_schools_conflict_with_each_other() {
        let mut group = Group::new(
            1,
            Person::new(1, "l", Gender::Male, 30, Role::Leader),
            Person::new(2, "h", Gender::Female, 28, Role::Helper),
        );
        let first = Person::new(3, "a", Gender::Male, 22, Role::Member);
        assert!(!school_taken(&group, &first));
        group.push_member(first.clone());
        assert!(!school_taken(&group, &first));

        let second = Person::new(4, "b", Gender::Female, 22, Role::Member);
        assert!(school_taken(&group, &second));
        let blank = Person::new(5, "c", Gender::Female, 22, Role::Member).with_school("  ");
        assert!(school_taken(&group, &blank));
        let named = Person::new(6, "d", Gender::Female, 22, Role::Member).with_school("전북대");
        assert!(!school_taken(&group, &named));
    }

    #[test]
    fn test_gender_tolerance_boundaries() {
        let counts = GenderCounts { male: 2, female: 1 };
        let male = Person::new(1, "m", Gender::Male, 20, Role::Member);
        let female = Person::new(2, "f", Gender::Female, 20, Role::Member);

        // 3/1 against 2/2: deviation 1.
        assert!(gender_within_tolerance(counts, &male, 0.5, 1));
        assert!(!gender_within_tolerance(counts, &male, 0.5, 0));
        // 2/2 against 2/2: deviation 0.
        assert!(gender_within_tolerance(counts, &female, 0.5, 0));
    }
}
