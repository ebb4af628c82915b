//! Composite score weights.

/// Weights of the four sub-scores in the composite score.
///
/// # Examples
///
/// ```
/// use u_cohort::scoring::ScoreWeights;
///
/// let weights = ScoreWeights::default().with_region(0.3);
/// assert_eq!(weights.gender, 0.4);
/// assert_eq!(weights.region, 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreWeights {
    pub gender: f64,
    pub age: f64,
    pub major: f64,
    pub region: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            gender: 0.4,
            age: 0.25,
            major: 0.2,
            region: 0.15,
        }
    }
}

impl ScoreWeights {
    pub fn new(gender: f64, age: f64, major: f64, region: f64) -> Self {
        Self {
            gender,
            age,
            major,
            region,
        }
    }

    pub fn with_gender(mut self, w: f64) -> Self {
        self.gender = w;
        self
    }

    pub fn with_age(mut self, w: f64) -> Self {
        self.age = w;
        self
    }

    pub fn with_major(mut self, w: f64) -> Self {
        self.major = w;
        self
    }

    pub fn with_region(mut self, w: f64) -> Self {
        self.region = w;
        self
    }

    pub fn total(&self) -> f64 {
        self.gender + self.age + self.major + self.region
    }

    /// Validates the weights.
    ///
    /// Returns `Err` with a description if any weight is negative or not
    /// finite, or if all weights are zero.
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            ("gender", self.gender),
            ("age", self.age),
            ("major", self.major),
            ("region", self.region),
        ];
        for (name, w) in all {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} weight must be finite and non-negative, got {w}"));
            }
        }
        if self.total() <= 0.0 {
            return Err("at least one score weight must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = ScoreWeights::default();
        assert!((w.gender - 0.4).abs() < 1e-12);
        assert!((w.age - 0.25).abs() < 1e-12);
        assert!((w.major - 0.2).abs() < 1e-12);
        assert!((w.region - 0.15).abs() < 1e-12);
        assert!((w.total() - 1.0).abs() < 1e-12);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let w = ScoreWeights::default()
            .with_gender(1.0)
            .with_age(0.0)
            .with_major(0.5)
            .with_region(0.5);
        assert_eq!(w, ScoreWeights::new(1.0, 0.0, 0.5, 0.5));
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert!(ScoreWeights::default().with_age(-0.1).validate().is_err());
        assert!(ScoreWeights::default().with_major(f64::NAN).validate().is_err());
        assert!(ScoreWeights::new(0.0, 0.0, 0.0, 0.0).validate().is_err());
    }
}
