//! Statistics and conditions of one finalized group.

use std::collections::BTreeMap;

use super::conditions::{self, format_histogram, ConditionKind, ConditionOutcome};
use crate::model::Group;
use crate::normalize::{MajorCategory, Region};

/// Per-group statistics recomputed from the final membership.
///
/// Counts and histograms cover leader, helper and members alike.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupReport {
    pub group: u32,
    /// Leader, helper and members.
    pub total: usize,
    /// Members only.
    pub members: usize,
    pub male: usize,
    pub female: usize,
    pub majors: BTreeMap<MajorCategory, usize>,
    pub regions: BTreeMap<Region, usize>,
    /// One outcome per [`ConditionKind`], in [`ConditionKind::ALL`] order.
    pub conditions: Vec<ConditionOutcome>,
}

impl GroupReport {
    pub fn build(group: &Group) -> Self {
        let genders = group.gender_counts();
        let mut majors = BTreeMap::new();
        let mut regions = BTreeMap::new();
        for person in group.persons() {
            *majors.entry(person.major_category()).or_insert(0) += 1;
            *regions.entry(person.region_category()).or_insert(0) += 1;
        }

        let conditions = vec![
            conditions::cohort_separation(group),
            conditions::school_exclusivity(group),
            conditions::age_ordering(group),
            conditions::gender_balance(genders),
            conditions::major_distribution(&majors),
            conditions::region_diversity(&regions),
        ];

        Self {
            group: group.number(),
            total: genders.total(),
            members: group.len(),
            male: genders.male,
            female: genders.female,
            majors,
            regions,
            conditions,
        }
    }

    pub fn outcome(&self, kind: ConditionKind) -> Option<&ConditionOutcome> {
        self.conditions.iter().find(|c| c.kind == kind)
    }

    /// Whether `kind` passed. A missing outcome counts as failed.
    pub fn passed(&self, kind: ConditionKind) -> bool {
        self.outcome(kind).is_some_and(|c| c.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.conditions.iter().all(|c| c.passed)
    }

    /// Kinds of the failed conditions.
    pub fn failed(&self) -> impl Iterator<Item = ConditionKind> + '_ {
        self.conditions.iter().filter(|c| !c.passed).map(|c| c.kind)
    }

    pub fn summary_row(&self) -> SummaryRow {
        let mark = |kind| {
            self.outcome(kind)
                .map(ConditionOutcome::mark)
                .unwrap_or("✗")
        };
        let explain = |kind| {
            self.outcome(kind)
                .map(|c| c.explanation.clone())
                .unwrap_or_default()
        };

        SummaryRow {
            group: self.group,
            total: self.total,
            male: self.male,
            female: self.female,
            cohort_separation: mark(ConditionKind::CohortSeparation),
            school_exclusivity: mark(ConditionKind::SchoolExclusivity),
            age_ordering: mark(ConditionKind::AgeOrdering),
            gender_balance: mark(ConditionKind::GenderBalance),
            major_distribution: mark(ConditionKind::MajorDistribution),
            region_diversity: mark(ConditionKind::RegionDiversity),
            major_detail: format_histogram(&self.majors),
            region_detail: format_histogram(&self.regions),
            cohort_separation_note: explain(ConditionKind::CohortSeparation),
            school_exclusivity_note: explain(ConditionKind::SchoolExclusivity),
            age_ordering_note: explain(ConditionKind::AgeOrdering),
            gender_balance_note: explain(ConditionKind::GenderBalance),
            major_distribution_note: explain(ConditionKind::MajorDistribution),
            region_diversity_note: explain(ConditionKind::RegionDiversity),
        }
    }
}

/// Flat summary of one group, ready for a CSV or spreadsheet writer.
///
/// Condition columns hold `"✓"` or `"✗"`; the `*_note` columns explain them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryRow {
    pub group: u32,
    pub total: usize,
    pub male: usize,
    pub female: usize,
    pub cohort_separation: &'static str,
    pub school_exclusivity: &'static str,
    pub age_ordering: &'static str,
    pub gender_balance: &'static str,
    pub major_distribution: &'static str,
    pub region_diversity: &'static str,
    pub major_detail: String,
    pub region_detail: String,
    pub cohort_separation_note: String,
    pub school_exclusivity_note: String,
    pub age_ordering_note: String,
    pub gender_balance_note: String,
    pub major_distribution_note: String,
    pub region_diversity_note: String,
}
