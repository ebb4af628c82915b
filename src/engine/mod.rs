//! Three-phase allocation engine.
//!
//! # Algorithm
//!
//! 1. **Allocation**: members are bucketed into 5-year age bands; bands are
//!    processed youngest first, shuffled within each band. Each member joins
//!    the eligible group with room that has the strictly highest composite
//!    score (first group wins ties). With no such group, the member falls
//!    back to the group with the fewest members and no rule is checked.
//! 2. **Rebalancing**: under-minimum groups take eligible members from
//!    over-maximum groups. Groups still out of bounds are reported, not
//!    raised.
//! 3. **Refinement**: a fixed number of passes, each pulling eligible
//!    members into under-minimum groups from groups above the minimum, then
//!    performing first-improvement one-for-one swaps between groups at or
//!    above the minimum.
//!
//! The engine is a greedy heuristic with local search. It does not promise
//! a global optimum, and the fallback in phase 1 can leave hard-rule
//! violations that only the [`report`](crate::report) flags.

mod allocate;
mod config;
mod moves;
mod rebalance;
mod refine;
mod runner;
mod types;

pub use config::AssignConfig;
pub use runner::{derive_gender_ratio, AssignResult, AssignRunner};
pub use types::{AssignEvent, BoundViolation, Phase, SizeBound};

use crate::eligibility::is_eligible;
use crate::model::{Group, Person};
use crate::scoring::Scorer;

/// Settings shared by all phases of one run.
pub(crate) struct Context<'a> {
    pub config: &'a AssignConfig,
    pub scorer: Scorer,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a AssignConfig, gender_ratio: f64) -> Self {
        Self {
            config,
            scorer: Scorer::new(gender_ratio, config.weights),
        }
    }

    pub fn eligible(&self, group: &Group, person: &Person) -> bool {
        is_eligible(
            group,
            person,
            self.scorer.gender_ratio(),
            self.config.gender_tolerance,
        )
    }
}
