//! The six named per-group conditions.

use std::collections::BTreeMap;
use std::fmt;

use crate::eligibility::{
    age_order_violated, cohorts_conflict, school_taken, AGE_EXCEPTION_CAP, AGE_EXCEPTION_LEADER,
};
use crate::model::{GenderCounts, Group};
use crate::normalize::{MajorCategory, Region};

/// Largest allowed gap between male and female counts.
pub const MAX_GENDER_GAP: usize = 2;

/// Distinct regions a group needs to count as diverse. The "other" bucket
/// counts here, unlike in the region score.
pub const MIN_REGIONS: usize = 3;

/// Persons a present priority major needs.
pub const MIN_PRIORITY_COUNT: usize = 2;

/// One of the six conditions checked on a finalized group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConditionKind {
    CohortSeparation,
    SchoolExclusivity,
    AgeOrdering,
    GenderBalance,
    MajorDistribution,
    RegionDiversity,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 6] = [
        ConditionKind::CohortSeparation,
        ConditionKind::SchoolExclusivity,
        ConditionKind::AgeOrdering,
        ConditionKind::GenderBalance,
        ConditionKind::MajorDistribution,
        ConditionKind::RegionDiversity,
    ];

    /// Column-style identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKind::CohortSeparation => "cohort_separation",
            ConditionKind::SchoolExclusivity => "school_exclusivity",
            ConditionKind::AgeOrdering => "age_ordering",
            ConditionKind::GenderBalance => "gender_balance",
            ConditionKind::MajorDistribution => "major_distribution",
            ConditionKind::RegionDiversity => "region_diversity",
        }
    }

    /// Whether the condition mirrors one of the hard eligibility rules.
    pub fn is_hard_rule(self) -> bool {
        matches!(
            self,
            ConditionKind::CohortSeparation
                | ConditionKind::SchoolExclusivity
                | ConditionKind::AgeOrdering
        )
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConditionKind::CohortSeparation => "medical cohort separation",
            ConditionKind::SchoolExclusivity => "school exclusivity",
            ConditionKind::AgeOrdering => "age ordering",
            ConditionKind::GenderBalance => "gender balance",
            ConditionKind::MajorDistribution => "major distribution",
            ConditionKind::RegionDiversity => "region diversity",
        })
    }
}

/// Pass/fail result of one condition with a readable explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionOutcome {
    pub kind: ConditionKind,
    pub passed: bool,
    pub explanation: String,
}

impl ConditionOutcome {
    fn new(kind: ConditionKind, passed: bool, explanation: String) -> Self {
        Self {
            kind,
            passed,
            explanation,
        }
    }

    /// `"✓"` or `"✗"`.
    pub fn mark(&self) -> &'static str {
        if self.passed {
            "✓"
        } else {
            "✗"
        }
    }
}

/// Formats a histogram as `"name: count, name: count"`.
pub(super) fn format_histogram<K: fmt::Display>(histogram: &BTreeMap<K, usize>) -> String {
    histogram
        .iter()
        .map(|(k, n)| format!("{k}: {n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn cohort_separation(group: &Group) -> ConditionOutcome {
    let offenders: Vec<String> = group
        .members()
        .iter()
        .filter(|m| cohorts_conflict(group.leader(), m))
        .map(|m| format!("{} ({})", m.name, m.cohort.as_deref().unwrap_or("-")))
        .collect();

    if offenders.is_empty() {
        ConditionOutcome::new(
            ConditionKind::CohortSeparation,
            true,
            "medical cohorts 24 and 25 are not mixed".into(),
        )
    } else {
        ConditionOutcome::new(
            ConditionKind::CohortSeparation,
            false,
            format!(
                "medical cohorts 24 and 25 are mixed: leader {} ({}), members {}",
                group.leader().name,
                group.leader().cohort.as_deref().unwrap_or("-"),
                offenders.join(", ")
            ),
        )
    }
}

pub(super) fn school_exclusivity(group: &Group) -> ConditionOutcome {
    let mut shared: Vec<String> = group
        .members()
        .iter()
        .filter(|m| school_taken(group, m))
        .map(|m| {
            let school = m.canonical_school();
            if school.is_empty() {
                "(no school)".to_string()
            } else {
                school
            }
        })
        .collect();
    shared.sort();
    shared.dedup();

    if shared.is_empty() {
        ConditionOutcome::new(
            ConditionKind::SchoolExclusivity,
            true,
            "no two members share a school".into(),
        )
    } else {
        ConditionOutcome::new(
            ConditionKind::SchoolExclusivity,
            false,
            format!("schools shared by several members: {}", shared.join(", ")),
        )
    }
}

pub(super) fn age_ordering(group: &Group) -> ConditionOutcome {
    let offenders: Vec<String> = group
        .members()
        .iter()
        .filter(|m| age_order_violated(group.leader(), group.helper(), m))
        .map(|m| format!("{} ({})", m.name, m.age))
        .collect();

    if offenders.is_empty() {
        ConditionOutcome::new(
            ConditionKind::AgeOrdering,
            true,
            "members are younger than the helper or within the 37-year-old leader exception"
                .into(),
        )
    } else {
        let rule = if group.leader().age == AGE_EXCEPTION_LEADER {
            format!(
                "members older than {AGE_EXCEPTION_CAP} under a {AGE_EXCEPTION_LEADER}-year-old leader"
            )
        } else {
            format!("members not younger than the helper ({})", group.helper().age)
        };
        ConditionOutcome::new(
            ConditionKind::AgeOrdering,
            false,
            format!("{rule}: {}", offenders.join(", ")),
        )
    }
}

pub(super) fn gender_balance(counts: GenderCounts) -> ConditionOutcome {
    let passed = counts.gap() <= MAX_GENDER_GAP;
    let verdict = if passed { "balanced" } else { "unbalanced" };
    ConditionOutcome::new(
        ConditionKind::GenderBalance,
        passed,
        format!(
            "gender {verdict} (male: {}, female: {}, gap: {})",
            counts.male,
            counts.female,
            counts.gap()
        ),
    )
}

pub(super) fn major_distribution(majors: &BTreeMap<MajorCategory, usize>) -> ConditionOutcome {
    let issues: Vec<String> = majors
        .iter()
        .filter(|&(m, &n)| m.is_priority() && n > 0 && n < MIN_PRIORITY_COUNT)
        .map(|(m, n)| format!("{m}: {n} (needs ≥{MIN_PRIORITY_COUNT})"))
        .collect();
    let detail = format_histogram(majors);

    if issues.is_empty() {
        ConditionOutcome::new(
            ConditionKind::MajorDistribution,
            true,
            format!("major distribution is fine: {detail}"),
        )
    } else {
        ConditionOutcome::new(
            ConditionKind::MajorDistribution,
            false,
            format!("{} | distribution: {detail}", issues.join(", ")),
        )
    }
}

pub(super) fn region_diversity(regions: &BTreeMap<Region, usize>) -> ConditionOutcome {
    let distinct = regions.values().filter(|&&n| n > 0).count();
    let detail = format_histogram(regions);

    if distinct >= MIN_REGIONS {
        ConditionOutcome::new(
            ConditionKind::RegionDiversity,
            true,
            format!("{distinct} regions represented: {detail}"),
        )
    } else {
        ConditionOutcome::new(
            ConditionKind::RegionDiversity,
            false,
            format!(
                "only {distinct} regions represented (needs ≥{MIN_REGIONS}) | distribution: {detail}"
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, Person, Role};

    fn group(leader_age: u32, helper_age: u32) -> Group {
        Group::new(
            1,
            Person::new(1, "Lee", Gender::Male, leader_age, Role::Leader)
                .with_major("의예과")
                .with_cohort("2024"),
            Person::new(2, "Park", Gender::Female, helper_age, Role::Helper),
        )
    }

    #[test]
    fn test_cohort_separation_names_offenders() {
        let mut g = group(30, 28);
        g.push_member(
            Person::new(3, "Choi", Gender::Male, 21, Role::Member)
                .with_major("의학과")
                .with_cohort("2025"),
        );
        let outcome = cohort_separation(&g);
        assert!(!outcome.passed);
        assert!(outcome.explanation.contains("Choi (2025)"), "{}", outcome.explanation);
        assert_eq!(outcome.mark(), "✗");
    }

    #[test]
    fn test_school_exclusivity_lists_shared_school_once() {
        let mut g = group(30, 28);
        g.push_member(Person::new(3, "a", Gender::Male, 21, Role::Member).with_school("경북대학교"));
        g.push_member(Person::new(4, "b", Gender::Female, 21, Role::Member).with_school("경북대학"));
        g.push_member(Person::new(5, "c", Gender::Male, 21, Role::Member).with_school("전북대"));

        let outcome = school_exclusivity(&g);
        assert!(!outcome.passed);
        assert_eq!(outcome.explanation, "schools shared by several members: 경북");
    }

    #[test]
    fn test_age_ordering_respects_exception() {
        let mut g = group(37, 30);
        g.push_member(Person::new(3, "a", Gender::Male, 39, Role::Member));
        assert!(age_ordering(&g).passed);

        g.push_member(Person::new(4, "b", Gender::Male, 40, Role::Member));
        let outcome = age_ordering(&g);
        assert!(!outcome.passed);
        assert_eq!(
            outcome.explanation,
            "members older than 39 under a 37-year-old leader: b (40)"
        );
    }

    #[test]
    fn test_age_ordering_names_helper_age() {
        let mut g = group(30, 28);
        g.push_member(Person::new(3, "a", Gender::Male, 28, Role::Member));
        let outcome = age_ordering(&g);
        assert!(!outcome.passed);
        assert_eq!(outcome.explanation, "members not younger than the helper (28): a (28)");
    }

    #[test]
    fn test_school_exclusivity_flags_missing_schools() {
        let mut g = group(30, 28);
        g.push_member(Person::new(3, "a", Gender::Male, 21, Role::Member));
        assert!(school_exclusivity(&g).passed);

        g.push_member(Person::new(4, "b", Gender::Female, 21, Role::Member));
        let outcome = school_exclusivity(&g);
        assert!(!outcome.passed);
        assert_eq!(outcome.explanation, "schools shared by several members: (no school)");
    }

    #[test]
    fn test_gender_balance_gap() {
        assert!(gender_balance(GenderCounts { male: 5, female: 3 }).passed);
        let outcome = gender_balance(GenderCounts { male: 6, female: 3 });
        assert!(!outcome.passed);
        assert_eq!(outcome.explanation, "gender unbalanced (male: 6, female: 3, gap: 3)");
    }

    #[test]
    fn test_major_distribution_singletons_fail() {
        let mut majors = BTreeMap::new();
        majors.insert(MajorCategory::Medical, 2);
        majors.insert(MajorCategory::Other, 1);
        assert!(major_distribution(&majors).passed, "other singletons are fine");

        majors.insert(MajorCategory::Nursing, 1);
        let outcome = major_distribution(&majors);
        assert!(!outcome.passed);
        assert!(
            outcome.explanation.starts_with("nursing: 1 (needs ≥2)"),
            "{}",
            outcome.explanation
        );
    }

    #[test]
    fn test_region_diversity_counts_other_bucket() {
        let mut regions = BTreeMap::new();
        regions.insert(Region::CapitalArea, 3);
        regions.insert(Region::Other, 4);
        let outcome = region_diversity(&regions);
        assert!(!outcome.passed);
        assert!(
            outcome.explanation.starts_with("only 2 regions represented (needs ≥3)"),
            "{}",
            outcome.explanation
        );

        regions.insert(Region::Jeonbuk, 1);
        let outcome = region_diversity(&regions);
        assert!(outcome.passed, "{}", outcome.explanation);
        assert!(outcome.explanation.starts_with("3 regions represented"));
    }

    #[test]
    fn test_region_diversity_on_built_group() {
        let mut g = Group::new(
            1,
            Person::new(1, "l", Gender::Male, 35, Role::Leader).with_school("서울대"),
            Person::new(2, "h", Gender::Female, 30, Role::Helper).with_school("부산대"),
        );
        g.push_member(Person::new(3, "a", Gender::Male, 21, Role::Member).with_school("제주대"));

        let mut regions = BTreeMap::new();
        for person in g.persons() {
            *regions.entry(person.region_category()).or_insert(0) += 1;
        }
        assert_eq!(regions.get(&Region::Other), Some(&1));
        assert!(region_diversity(&regions).passed);
    }
}
