//! Assignment run configuration.

use crate::error::{AssignError, Result};
use crate::scoring::ScoreWeights;

/// Configuration parameters for an assignment run.
///
/// # Examples
///
/// ```
/// use u_cohort::engine::AssignConfig;
///
/// let config = AssignConfig::default()
///     .with_member_bounds(5, 7)
///     .with_gender_tolerance(2)
///     .with_seed(42);
/// assert_eq!(config.min_members, 5);
/// assert_eq!(config.max_members, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssignConfig {
    /// Fewest members per group, leader and helper excluded.
    pub min_members: usize,
    /// Most members per group, leader and helper excluded.
    pub max_members: usize,
    /// Allowed deviation, in persons, of either gender count from its
    /// expected value.
    pub gender_tolerance: u32,
    /// Target male share. `None` derives it from the member pool.
    pub gender_ratio: Option<f64>,
    /// Refinement passes in phase 3.
    pub refinement_passes: usize,
    /// Stop phase 3 after a pass that moves and swaps nobody.
    pub early_exit: bool,
    /// Composite score weights.
    pub weights: ScoreWeights,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            min_members: 6,
            max_members: 8,
            gender_tolerance: 1,
            gender_ratio: None,
            refinement_passes: 3,
            early_exit: true,
            weights: ScoreWeights::default(),
            seed: None,
        }
    }
}

impl AssignConfig {
    /// Sets the member count bounds.
    pub fn with_member_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_members = min;
        self.max_members = max;
        self
    }

    /// Sets the gender deviation tolerance.
    pub fn with_gender_tolerance(mut self, tolerance: u32) -> Self {
        self.gender_tolerance = tolerance;
        self
    }

    /// Fixes the target male share, clamped to `[0, 1]`.
    pub fn with_gender_ratio(mut self, ratio: f64) -> Self {
        self.gender_ratio = Some(ratio.clamp(0.0, 1.0));
        self
    }

    /// Sets the number of refinement passes.
    pub fn with_refinement_passes(mut self, passes: usize) -> Self {
        self.refinement_passes = passes;
        self
    }

    /// Enables or disables the early exit on a pass without changes.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Sets the composite score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small groups: 4 to 6 members.
    pub fn compact() -> Self {
        Self::default().with_member_bounds(4, 6)
    }

    /// Preset for large groups: 8 to 10 members.
    pub fn roomy() -> Self {
        Self::default().with_member_bounds(8, 10)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_members == 0 {
            return Err(AssignError::InvalidConfig(
                "max_members must be at least 1".into(),
            ));
        }
        if self.min_members > self.max_members {
            return Err(AssignError::InvalidConfig(format!(
                "min_members ({}) exceeds max_members ({})",
                self.min_members, self.max_members
            )));
        }
        if let Some(ratio) = self.gender_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(AssignError::InvalidConfig(format!(
                    "gender_ratio must be within [0, 1], got {ratio}"
                )));
            }
        }
        self.weights.validate().map_err(AssignError::InvalidConfig)
    }
}
