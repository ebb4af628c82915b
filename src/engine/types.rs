//! Events and bound violations recorded during a run.

use std::fmt;

use crate::model::PersonId;

/// Engine phase that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    Allocation,
    Rebalance,
    Refinement,
}

/// A placement decision taken by the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AssignEvent {
    /// Phase 1 placed a member in its best-scoring eligible group.
    Placed {
        person: PersonId,
        group: u32,
        score: f64,
    },
    /// Phase 1 found no eligible group with room and placed the member in
    /// the smallest group without checking any hard rule.
    Fallback { person: PersonId, group: u32 },
    /// A member moved between groups during rebalancing or refinement.
    Moved {
        person: PersonId,
        from: u32,
        to: u32,
        phase: Phase,
    },
    /// Two members exchanged groups and the summed composite score rose by
    /// `gain`.
    Swapped {
        first: PersonId,
        first_group: u32,
        second: PersonId,
        second_group: u32,
        gain: f64,
    },
}

/// Which size bound a group misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "bound", content = "limit", rename_all = "snake_case"))]
pub enum SizeBound {
    Under(usize),
    Over(usize),
}

/// A group whose member count lies outside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundViolation {
    pub group: u32,
    pub members: usize,
    pub bound: SizeBound,
}

impl BoundViolation {
    /// Violation of `group` with `members` members under `[min, max]`, if any.
    pub fn check(group: u32, members: usize, min: usize, max: usize) -> Option<Self> {
        let bound = if members < min {
            SizeBound::Under(min)
        } else if members > max {
            SizeBound::Over(max)
        } else {
            return None;
        };
        Some(Self {
            group,
            members,
            bound,
        })
    }
}

impl fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound {
            SizeBound::Under(min) => write!(
                f,
                "group {} has {} members (minimum {})",
                self.group, self.members, min
            ),
            SizeBound::Over(max) => write!(
                f,
                "group {} has {} members (maximum {})",
                self.group, self.members, max
            ),
        }
    }
}
