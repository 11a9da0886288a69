use serde::{Deserialize, Serialize};

/// Relative weight of each top-level score in the confidence blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    pub psychological: f64,
    pub technical: f64,
    pub wiscar: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            psychological: 1.0,
            technical: 1.0,
            wiscar: 1.0,
        }
    }
}

impl ConfidenceWeights {
    /// Parses `"psychological,technical,wiscar"`, e.g. `"1,1,1"`.
    pub fn parse(raw: &str) -> Result<Self, ScoringConfigError> {
        let parts = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ScoringConfigError::Malformed(raw.to_string()))?;

        let &[psychological, technical, wiscar] = parts.as_slice() else {
            return Err(ScoringConfigError::Malformed(raw.to_string()));
        };

        let weights = Self {
            psychological,
            technical,
            wiscar,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Negative weights would make the blend non-monotonic, so they are rejected.
    /// Large finite weights are fine; the blend rescales by the largest one.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let weights = [self.psychological, self.technical, self.wiscar];
        for weight in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringConfigError::InvalidWeight(weight));
            }
        }

        if !weights.iter().any(|&weight| weight > 0.0) {
            return Err(ScoringConfigError::ZeroWeights);
        }

        Ok(())
    }
}

/// Tunable inputs to the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub confidence_weights: ConfidenceWeights,
}

impl ScoringConfig {
    pub fn new(confidence_weights: ConfidenceWeights) -> Result<Self, ScoringConfigError> {
        confidence_weights.validate()?;
        Ok(Self { confidence_weights })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("confidence weights must be finite and non-negative (found {0})")]
    InvalidWeight(f64),
    #[error("confidence weights must not all be zero")]
    ZeroWeights,
    #[error("expected three comma-separated confidence weights, found '{0}'")]
    Malformed(String),
}
