//! Run-level aggregation over all finalized groups.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::conditions::ConditionKind;
use super::group::{GroupReport, SummaryRow};
use crate::engine::{AssignResult, BoundViolation};

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// One report per group, in group order.
    pub groups: Vec<GroupReport>,
    /// Leaders, helpers and members.
    pub total_persons: usize,
    pub total_members: usize,
    /// Members placed without any rule check in phase 1.
    pub fallback_count: usize,
    pub move_count: usize,
    pub swap_count: usize,
    /// Groups outside the size bounds right after rebalancing.
    pub rebalance_violations: Vec<BoundViolation>,
    /// Groups outside the size bounds at the end of the run.
    pub bound_violations: Vec<BoundViolation>,
    /// Failing groups per condition; every kind is present.
    pub condition_failures: BTreeMap<ConditionKind, usize>,
}

impl RunReport {
    pub fn build(result: &AssignResult) -> Self {
        #[cfg(feature = "parallel")]
        let groups: Vec<GroupReport> = result.groups.par_iter().map(GroupReport::build).collect();
        #[cfg(not(feature = "parallel"))]
        let groups: Vec<GroupReport> = result.groups.iter().map(GroupReport::build).collect();

        let mut condition_failures: BTreeMap<ConditionKind, usize> =
            ConditionKind::ALL.iter().map(|&k| (k, 0)).collect();
        for report in &groups {
            for kind in report.failed() {
                *condition_failures.entry(kind).or_insert(0) += 1;
            }
        }

        Self {
            total_persons: groups.iter().map(|g| g.total).sum(),
            total_members: groups.iter().map(|g| g.members).sum(),
            groups,
            fallback_count: result.fallback_count(),
            move_count: result.move_count(),
            swap_count: result.swap_count(),
            rebalance_violations: result.rebalance_violations.clone(),
            bound_violations: result.bound_violations.clone(),
            condition_failures,
        }
    }

    /// Number of groups failing `kind`.
    pub fn failures(&self, kind: ConditionKind) -> usize {
        self.condition_failures.get(&kind).copied().unwrap_or(0)
    }

    /// Every group within bounds and passing every condition.
    pub fn is_fully_satisfied(&self) -> bool {
        self.bound_violations.is_empty() && self.groups.iter().all(GroupReport::all_passed)
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.groups.iter().map(GroupReport::summary_row).collect()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} groups, {} persons ({} members)",
            self.groups.len(),
            self.total_persons,
            self.total_members
        )?;
        writeln!(
            f,
            "fallbacks: {}, moves: {}, swaps: {}",
            self.fallback_count, self.move_count, self.swap_count
        )?;

        write!(f, "{:>5} {:>5} {:>4} {:>4}", "group", "total", "M", "F")?;
        for kind in ConditionKind::ALL {
            write!(f, " {:>4}", abbreviation(kind))?;
        }
        writeln!(f)?;
        for g in &self.groups {
            write!(f, "{:>5} {:>5} {:>4} {:>4}", g.group, g.total, g.male, g.female)?;
            for kind in ConditionKind::ALL {
                let mark = if g.passed(kind) { "✓" } else { "✗" };
                write!(f, " {mark:>4}")?;
            }
            writeln!(f)?;
        }

        for kind in ConditionKind::ALL {
            let n = self.failures(kind);
            if n > 0 {
                writeln!(f, "{kind}: {n} group(s) failing")?;
            }
        }
        for violation in &self.bound_violations {
            writeln!(f, "out of bounds: {violation}")?;
        }
        Ok(())
    }
}

fn abbreviation(kind: ConditionKind) -> &'static str {
    match kind {
        ConditionKind::CohortSeparation => "coh",
        ConditionKind::SchoolExclusivity => "sch",
        ConditionKind::AgeOrdering => "age",
        ConditionKind::GenderBalance => "gen",
        ConditionKind::MajorDistribution => "maj",
        ConditionKind::RegionDiversity => "reg",
    }
}
