//! Hard-constraint eligibility.
//!
//! Decides whether a candidate may join a group in its current state.
//! Four rules are evaluated in order and the first failure short-circuits:
//!
//! 1. **Cohort separation**: a medical candidate whose 24/25 cohort differs
//!    from a medical leader's 24/25 cohort is rejected.
//! 2. **School exclusivity**: no two members share a canonical school.
//! 3. **Age ordering**: members are younger than the helper; under a
//!    37-year-old leader members may be up to 39.
//! 4. **Gender ratio**: after adding the candidate, neither gender count
//!    deviates from its expected share by more than the tolerance.
//!
//! The same predicates back the hard-rule conditions of the
//! [`report`](crate::report) module.

mod rules;

pub use rules::{
    age_order_violated, cohorts_conflict, gender_within_tolerance, school_taken,
    AGE_EXCEPTION_CAP, AGE_EXCEPTION_LEADER, SEPARATED_COHORTS,
};

use std::fmt;

use crate::model::{Group, Person};

/// One of the four hard eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HardRule {
    CohortSeparation,
    SchoolExclusivity,
    AgeOrdering,
    GenderRatio,
}

impl fmt::Display for HardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HardRule::CohortSeparation => "medical cohort separation",
            HardRule::SchoolExclusivity => "school exclusivity",
            HardRule::AgeOrdering => "age ordering",
            HardRule::GenderRatio => "gender ratio",
        })
    }
}

/// Returns the first rule `candidate` breaks against `group`, or `None` if
/// the candidate is eligible.
///
/// `gender_ratio` is the target male share and `tolerance` the allowed
/// deviation, in persons, of either gender count from its expected value.
pub fn first_violation(
    group: &Group,
    candidate: &Person,
    gender_ratio: f64,
    tolerance: u32,
) -> Option<HardRule> {
    if cohorts_conflict(group.leader(), candidate) {
        return Some(HardRule::CohortSeparation);
    }
    if school_taken(group, candidate) {
        return Some(HardRule::SchoolExclusivity);
    }
    if age_order_violated(group.leader(), group.helper(), candidate) {
        return Some(HardRule::AgeOrdering);
    }
    if !gender_within_tolerance(group.gender_counts(), candidate, gender_ratio, tolerance) {
        return Some(HardRule::GenderRatio);
    }
    None
}

/// Whether `candidate` may join `group` in its current state.
///
/// Pure: the group is not modified.
pub fn is_eligible(group: &Group, candidate: &Person, gender_ratio: f64, tolerance: u32) -> bool {
    first_violation(group, candidate, gender_ratio, tolerance).is_none()
}
