//! Phase 2: move members from over-maximum to under-minimum groups.

use tracing::{info, warn};

use super::moves::transfer;
use super::types::{AssignEvent, BoundViolation, Phase};
use super::Context;
use crate::model::Group;

/// Fills under-minimum groups from over-maximum groups and returns the
/// groups still outside the bounds afterwards.
///
/// A donor gives at most `min(needed, movable, len − min_members)` members,
/// where `movable` counts its members eligible for the receiver when the
/// donor is first scanned. Eligibility is re-checked before every move. A
/// donor leaves the pool once it is back within the maximum.
pub(super) fn rebalance(
    groups: &mut [Group],
    ctx: &Context<'_>,
    events: &mut Vec<AssignEvent>,
) -> Vec<BoundViolation> {
    let min = ctx.config.min_members;
    let max = ctx.config.max_members;

    let under: Vec<usize> = (0..groups.len())
        .filter(|&i| groups[i].len() < min)
        .collect();
    let mut over: Vec<usize> = (0..groups.len())
        .filter(|&i| groups[i].len() > max)
        .collect();

    if !under.is_empty() || !over.is_empty() {
        info!(
            under = under.len(),
            over = over.len(),
            "rebalancing group sizes"
        );
    }

    for &receiver in &under {
        let mut needed = min - groups[receiver].len();
        let mut k = 0;
        while k < over.len() && needed > 0 {
            let donor = over[k];
            let movable = groups[donor]
                .members()
                .iter()
                .filter(|m| ctx.eligible(&groups[receiver], m))
                .count();
            let surplus = groups[donor].len().saturating_sub(min);
            let quota = needed.min(movable).min(surplus);

            for _ in 0..quota {
                let position = groups[donor]
                    .members()
                    .iter()
                    .position(|m| ctx.eligible(&groups[receiver], m));
                let Some(position) = position else {
                    break;
                };
                transfer(groups, donor, position, receiver, Phase::Rebalance, events);
                needed -= 1;
            }

            if groups[donor].len() <= max {
                over.remove(k);
            } else {
                k += 1;
            }
        }
    }

    let remaining = bound_violations(groups, min, max);
    for violation in &remaining {
        warn!(
            group = violation.group,
            members = violation.members,
            "{violation} after rebalancing"
        );
    }
    remaining
}

/// Groups whose member count lies outside `[min, max]`.
pub(super) fn bound_violations(groups: &[Group], min: usize, max: usize) -> Vec<BoundViolation> {
    groups
        .iter()
        .filter_map(|g| BoundViolation::check(g.number(), g.len(), min, max))
        .collect()
}
