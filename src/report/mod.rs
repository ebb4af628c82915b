//! Reporting over a finalized assignment.
//!
//! Every figure is recomputed from the frozen groups, never taken from the
//! engine's working state:
//!
//! - [`GroupReport`]: totals, gender counts, major and region histograms,
//!   and six [`ConditionOutcome`]s with readable explanations.
//! - [`SummaryRow`] / [`AssignmentRow`]: flat rows for external writers.
//! - [`RunReport`]: per-run aggregation, including fallback placements and
//!   groups left outside the size bounds.
//!
//! The cohort, school and age conditions re-check each member with the
//! same predicates as [`eligibility`](crate::eligibility), so violations
//! introduced by fallback placements are caught here.

mod conditions;
mod group;
mod rows;
mod run;

pub use conditions::{
    ConditionKind, ConditionOutcome, MAX_GENDER_GAP, MIN_PRIORITY_COUNT, MIN_REGIONS,
};
pub use group::{GroupReport, SummaryRow};
pub use rows::AssignmentRow;
pub use run::RunReport;
