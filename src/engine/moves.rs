//! Member transfers between groups.

use tracing::debug;

use super::types::{AssignEvent, Phase};
use crate::model::Group;

/// Mutable references to two distinct groups.
pub(super) fn pair_mut(groups: &mut [Group], a: usize, b: usize) -> (&mut Group, &mut Group) {
    assert_ne!(a, b, "pair_mut needs two distinct groups");
    if a < b {
        let (left, right) = groups.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = groups.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Moves the member at `position` of `groups[from]` to the end of
/// `groups[to]`.
pub(super) fn transfer(
    groups: &mut [Group],
    from: usize,
    position: usize,
    to: usize,
    phase: Phase,
    events: &mut Vec<AssignEvent>,
) {
    let person = groups[from].remove_member(position);
    let event = AssignEvent::Moved {
        person: person.id,
        from: groups[from].number(),
        to: groups[to].number(),
        phase,
    };
    debug!(
        person = %person.id,
        name = %person.name,
        from = groups[from].number(),
        to = groups[to].number(),
        ?phase,
        "member moved"
    );
    groups[to].push_member(person);
    events.push(event);
}
