//! Multi-objective group scoring.
//!
//! Four independent sub-scores, each nominally in `[0, 1]` and higher-is-better:
//!
//! - **Gender**: step function of the largest deviation from the target
//!   male/female split.
//! - **Age**: variance of member ages plus the share of distinct 5-year bands,
//!   scaled by 1/100. Not clamped; large variances exceed 1.
//! - **Major**: priority majors with at least two persons, out of 5.
//! - **Region**: known regions with at least two persons, out of 5.
//!
//! The composite is the weighted sum under [`ScoreWeights`] (default
//! 0.4 / 0.25 / 0.2 / 0.15).
//!
//! Every score is re-derived from a [`Composition`] snapshot of the group,
//! so moves and swaps can never leave cached tallies out of step with the
//! member list.

mod composition;
mod objectives;
mod weights;

pub use composition::Composition;
pub use objectives::{age_score, gender_score, major_score, region_score, DIVERSITY_SCALE};
pub use weights::ScoreWeights;

use crate::model::{Group, Person};

/// The four sub-scores of one group, with or without a hypothetical addition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    pub gender: f64,
    pub age: f64,
    pub major: f64,
    pub region: f64,
}

impl ScoreBreakdown {
    /// Weighted sum of the sub-scores.
    pub fn composite(&self, weights: &ScoreWeights) -> f64 {
        self.gender * weights.gender
            + self.age * weights.age
            + self.major * weights.major
            + self.region * weights.region
    }
}

/// Scores groups against a fixed gender target and weight set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    gender_ratio: f64,
    weights: ScoreWeights,
}

impl Scorer {
    /// `gender_ratio` is the target male share in `[0, 1]`.
    pub fn new(gender_ratio: f64, weights: ScoreWeights) -> Self {
        Self {
            gender_ratio,
            weights,
        }
    }

    pub fn gender_ratio(&self) -> f64 {
        self.gender_ratio
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Sub-scores of `group` if `candidate` were added.
    ///
    /// Major and region credit count the group as it is now, plus one if the
    /// candidate brings a priority major or a known region.
    pub fn candidate_breakdown(&self, group: &Group, candidate: &Person) -> ScoreBreakdown {
        let current = Composition::of(group);
        let mut ages = current.ages.clone();
        ages.push(candidate.age);

        ScoreBreakdown {
            gender: gender_score(
                current.genders.with(candidate.gender).deviation(self.gender_ratio),
            ),
            age: age_score(&ages),
            major: major_score(&current.majors, Some(candidate.major_category())),
            region: region_score(&current.regions, Some(candidate.region_category())),
        }
    }

    /// Composite score of `group` if `candidate` were added.
    pub fn candidate_score(&self, group: &Group, candidate: &Person) -> f64 {
        self.candidate_breakdown(group, candidate)
            .composite(&self.weights)
    }

    /// Sub-scores of a composition with no hypothetical addition.
    pub fn composition_breakdown(&self, composition: &Composition) -> ScoreBreakdown {
        ScoreBreakdown {
            gender: gender_score(composition.genders.deviation(self.gender_ratio)),
            age: age_score(&composition.ages),
            major: major_score(&composition.majors, None),
            region: region_score(&composition.regions, None),
        }
    }

    pub fn composition_score(&self, composition: &Composition) -> f64 {
        self.composition_breakdown(composition)
            .composite(&self.weights)
    }

    /// Sub-scores of `group` as it stands.
    pub fn group_breakdown(&self, group: &Group) -> ScoreBreakdown {
        self.composition_breakdown(&Composition::of(group))
    }

    /// Composite score of `group` as it stands.
    pub fn group_score(&self, group: &Group) -> f64 {
        self.composition_score(&Composition::of(group))
    }
}
