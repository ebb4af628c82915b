//! Error type for assignment runs.

use thiserror::Error;

/// Failures that abort a run before any member is placed.
///
/// Constraint shortfalls discovered during the run (groups left outside the
/// size bounds, fallback placements that break a hard rule) are not errors;
/// they surface as [`AssignEvent`](crate::engine::AssignEvent)s and failing
/// report conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// No group has both a leader and a helper.
    #[error("no valid leader/helper pair found; at least one group is required")]
    NoGroups,

    /// The configuration or the input records break a precondition.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AssignError>;
