//! Phase 3: balance moves and first-improvement swaps.

use tracing::{debug, info};

use super::moves::{pair_mut, transfer};
use super::types::{AssignEvent, Phase};
use super::Context;
use crate::model::Group;
use crate::scoring::Composition;

/// Minimum summed gain for a swap to count as an improvement.
const SWAP_EPSILON: f64 = 1e-12;

/// Runs up to `refinement_passes` passes and returns how many ran.
///
/// With `early_exit` set, stops after the first pass that neither moved nor
/// swapped anyone.
pub(super) fn refine(
    groups: &mut [Group],
    ctx: &Context<'_>,
    events: &mut Vec<AssignEvent>,
) -> usize {
    let passes = ctx.config.refinement_passes;
    for pass in 1..=passes {
        let moved = balance(groups, ctx, events);
        let swapped = swap(groups, ctx, events);
        debug!(pass, moved, swapped, "refinement pass finished");

        if ctx.config.early_exit && moved == 0 && swapped == 0 {
            info!(pass, "refinement converged early");
            return pass;
        }
    }
    passes
}

/// Pulls members into under-minimum groups, at most one from each donor
/// strictly above the minimum. Returns the number of moves.
fn balance(groups: &mut [Group], ctx: &Context<'_>, events: &mut Vec<AssignEvent>) -> usize {
    let min = ctx.config.min_members;
    let mut moved = 0;

    for receiver in 0..groups.len() {
        if groups[receiver].len() >= min {
            continue;
        }
        for donor in 0..groups.len() {
            if donor == receiver || groups[donor].len() <= min {
                continue;
            }
            let position = groups[donor]
                .members()
                .iter()
                .position(|m| ctx.eligible(&groups[receiver], m));
            if let Some(position) = position {
                transfer(groups, donor, position, receiver, Phase::Refinement, events);
                moved += 1;
            }
            if groups[receiver].len() >= min {
                break;
            }
        }
    }
    moved
}

/// One sweep of first-improvement swaps over every ordered pair of groups
/// at or above the minimum. Returns the number of swaps.
fn swap(groups: &mut [Group], ctx: &Context<'_>, events: &mut Vec<AssignEvent>) -> usize {
    let min = ctx.config.min_members;
    let mut swaps = 0;

    for g in 0..groups.len() {
        if groups[g].len() < min {
            continue;
        }
        for o in 0..groups.len() {
            if o == g || groups[o].len() < min {
                continue;
            }
            for i in 0..groups[g].len() {
                let Some((j, gain)) = improving_partner(&groups[g], i, &groups[o], ctx) else {
                    continue;
                };
                let (group, other) = pair_mut(groups, g, o);
                let event = AssignEvent::Swapped {
                    first: group.members()[i].id,
                    first_group: group.number(),
                    second: other.members()[j].id,
                    second_group: other.number(),
                    gain,
                };
                debug!(
                    first = %group.members()[i].id,
                    second = %other.members()[j].id,
                    first_group = group.number(),
                    second_group = other.number(),
                    gain,
                    "members swapped"
                );
                group.swap_member(i, other, j);
                events.push(event);
                swaps += 1;
            }
        }
    }
    swaps
}

/// First member of `other` that `group`'s member at `i` can trade places
/// with for a strictly higher summed composite score, and the gain.
///
/// Both persons must be eligible for the group they would join, judged
/// against that group as it stands before the swap.
fn improving_partner(
    group: &Group,
    i: usize,
    other: &Group,
    ctx: &Context<'_>,
) -> Option<(usize, f64)> {
    let outgoing = &group.members()[i];
    if !ctx.eligible(other, outgoing) {
        return None;
    }

    let here = Composition::of(group);
    let there = Composition::of(other);
    let before = ctx.scorer.composition_score(&here) + ctx.scorer.composition_score(&there);

    other
        .members()
        .iter()
        .enumerate()
        .find_map(|(j, incoming)| {
            if !ctx.eligible(group, incoming) {
                return None;
            }
            let after = ctx
                .scorer
                .composition_score(&here.replaced(i, outgoing, incoming))
                + ctx
                    .scorer
                    .composition_score(&there.replaced(j, incoming, outgoing));
            let gain = after - before;
            (gain > SWAP_EPSILON).then_some((j, gain))
        })
}
