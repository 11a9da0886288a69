use super::config::ConfidenceWeights;
use super::rules::{round_percent, weighted_mean};
use serde::{Deserialize, Serialize};

/// Minimum confidence score for a `Yes` recommendation.
pub const YES_THRESHOLD: u8 = 70;
/// Minimum confidence score for a `Maybe` recommendation.
pub const MAYBE_THRESHOLD: u8 = 50;

/// Categorical outcome of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn ordered() -> [Self; 3] {
        [Self::Yes, Self::Maybe, Self::No]
    }

    /// Boundary values fall into the higher tier.
    pub const fn for_confidence(confidence_score: u8) -> Self {
        if confidence_score >= YES_THRESHOLD {
            Self::Yes
        } else if confidence_score >= MAYBE_THRESHOLD {
            Self::Maybe
        } else {
            Self::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Recommended",
            Self::Maybe => "Conditional Fit",
            Self::No => "Not Recommended",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Yes => "Excellent! You show strong potential for a successful career in Snowflake data engineering. Your aptitude, motivation, and alignment make you an ideal candidate.",
            Self::Maybe => "You have promising potential for Snowflake, but some areas need development. Focus on the suggested next steps to strengthen your readiness.",
            Self::No => "Snowflake might not be the best fit right now. Consider exploring adjacent fields or building foundational skills before revisiting this path.",
        }
    }
}

/// Weighted blend of the three top-level scores.
///
/// Weights are validated non-negative with a positive sum, so the result is
/// monotonic in each input.
pub(crate) fn blend_confidence(
    psychological_fit: u8,
    technical_readiness: u8,
    overall_confidence: u8,
    weights: &ConfidenceWeights,
) -> u8 {
    let pairs = [
        (f64::from(psychological_fit), weights.psychological),
        (f64::from(technical_readiness), weights.technical),
        (f64::from(overall_confidence), weights.wiscar),
    ];

    weighted_mean(&pairs).map_or(0, round_percent)
}
