//! Phase 1: greedy allocation by age band.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use super::types::AssignEvent;
use super::Context;
use crate::model::{age_band, Group, Person};

/// Places every member of `pool` into a group.
///
/// `groups` must not be empty.
pub(super) fn allocate<R: Rng>(
    groups: &mut [Group],
    pool: Vec<Person>,
    ctx: &Context<'_>,
    rng: &mut R,
    events: &mut Vec<AssignEvent>,
) {
    debug_assert!(!groups.is_empty());

    let mut bands: BTreeMap<u32, Vec<Person>> = BTreeMap::new();
    for person in pool {
        bands.entry(age_band(person.age)).or_default().push(person);
    }
    info!(
        bands = bands.len(),
        groups = groups.len(),
        "allocating members by age band"
    );

    for (band, mut cohort) in bands {
        cohort.shuffle(rng);
        debug!(band, members = cohort.len(), "allocating band");

        for person in cohort {
            match best_group(groups, &person, ctx) {
                Some((index, score)) => {
                    events.push(AssignEvent::Placed {
                        person: person.id,
                        group: groups[index].number(),
                        score,
                    });
                    groups[index].push_member(person);
                }
                None => {
                    let index = smallest_group(groups);
                    warn!(
                        person = %person.id,
                        name = %person.name,
                        group = groups[index].number(),
                        "no eligible group with room; placed in smallest group without rule checks"
                    );
                    events.push(AssignEvent::Fallback {
                        person: person.id,
                        group: groups[index].number(),
                    });
                    groups[index].push_member(person);
                }
            }
        }
    }
}

/// Index and composite score of the best eligible group with room.
///
/// Only a strictly higher score replaces the current best, so the first of
/// several equal groups wins.
pub(super) fn best_group(
    groups: &[Group],
    person: &Person,
    ctx: &Context<'_>,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, group) in groups.iter().enumerate() {
        if group.len() >= ctx.config.max_members || !ctx.eligible(group, person) {
            continue;
        }
        let score = ctx.scorer.candidate_score(group, person);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best
}

/// Index of the group with the fewest members; the first one on ties.
pub(super) fn smallest_group(groups: &[Group]) -> usize {
    groups
        .iter()
        .enumerate()
        .min_by_key(|(_, g)| g.len())
        .map(|(index, _)| index)
        .unwrap_or(0)
}
