//! The four sub-score functions.

use std::collections::HashSet;

use crate::model::age_band;
use crate::normalize::{MajorCategory, Region};

/// Denominator of the major and region diversity scores.
pub const DIVERSITY_SCALE: f64 = 5.0;

/// Deviation within this distance of zero counts as a perfect split.
const ZERO_DEVIATION: f64 = 1e-9;

/// Persons a category needs to earn diversity credit.
const DIVERSITY_MIN_COUNT: usize = 2;

/// Maps the largest gender-count deviation to a score.
///
/// | deviation | score |
/// |-----------|-------|
/// | 0         | 1.0   |
/// | ≤ 0.5     | 0.9   |
/// | ≤ 1.0     | 0.7   |
/// | ≤ 1.5     | 0.5   |
/// | otherwise | 0.1   |
pub fn gender_score(deviation: f64) -> f64 {
    if deviation <= ZERO_DEVIATION {
        1.0
    } else if deviation <= 0.5 {
        0.9
    } else if deviation <= 1.0 {
        0.7
    } else if deviation <= 1.5 {
        0.5
    } else {
        0.1
    }
}

/// Age diversity of member ages: `(0.7 × variance + 0.3 × band ratio) / 100`.
///
/// `variance` is the population variance and `band ratio` the number of
/// distinct 5-year bands divided by the number of ages. One age or fewer
/// scores 1.0. The result is not clamped to `[0, 1]`.
pub fn age_score(ages: &[u32]) -> f64 {
    if ages.len() <= 1 {
        return 1.0;
    }
    let n = ages.len() as f64;
    let mean = ages.iter().map(|&a| f64::from(a)).sum::<f64>() / n;
    let variance = ages
        .iter()
        .map(|&a| {
            let d = f64::from(a) - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let bands: HashSet<u32> = ages.iter().map(|&a| age_band(a)).collect();
    let band_ratio = bands.len() as f64 / n;

    (0.7 * variance + 0.3 * band_ratio) / 100.0
}

/// Priority majors with at least two persons, plus one if `candidate` is a
/// priority major, over [`DIVERSITY_SCALE`], capped at 1.0.
pub fn major_score(
    counts: &[usize; MajorCategory::COUNT],
    candidate: Option<MajorCategory>,
) -> f64 {
    let mut credit = MajorCategory::PRIORITY
        .iter()
        .filter(|m| counts[m.index()] >= DIVERSITY_MIN_COUNT)
        .count();
    if candidate.is_some_and(MajorCategory::is_priority) {
        credit += 1;
    }
    (credit as f64 / DIVERSITY_SCALE).min(1.0)
}

/// Known regions with at least two persons, plus one if `candidate` is a
/// known region, over [`DIVERSITY_SCALE`], capped at 1.0.
pub fn region_score(counts: &[usize; Region::COUNT], candidate: Option<Region>) -> f64 {
    let mut credit = Region::ALL
        .iter()
        .filter(|r| r.is_known() && counts[r.index()] >= DIVERSITY_MIN_COUNT)
        .count();
    if candidate.is_some_and(Region::is_known) {
        credit += 1;
    }
    (credit as f64 / DIVERSITY_SCALE).min(1.0)
}
