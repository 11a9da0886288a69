use crate::assessment::domain::WiscarDimension;
use crate::assessment::scoring::Recommendation;
use serde::Serialize;

/// Qualitative band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCardKind {
    PsychologicalFit,
    TechnicalReadiness,
    WiscarOverall,
}

impl ScoreCardKind {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::PsychologicalFit,
            Self::TechnicalReadiness,
            Self::WiscarOverall,
        ]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::PsychologicalFit => "Psychological Fit",
            Self::TechnicalReadiness => "Technical Readiness",
            Self::WiscarOverall => "WISCAR Overall",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::PsychologicalFit => {
                "Your personality traits, motivation, and mindset alignment with data engineering roles."
            }
            Self::TechnicalReadiness => {
                "Your current technical knowledge and aptitude for Snowflake concepts."
            }
            Self::WiscarOverall => "Comprehensive evaluation across six key dimensions.",
        }
    }

    pub const fn band_label(self, band: ScoreBand) -> &'static str {
        match (self, band) {
            (Self::PsychologicalFit, ScoreBand::High) => "Strong",
            (Self::PsychologicalFit, ScoreBand::Medium) => "Moderate",
            (Self::PsychologicalFit, ScoreBand::Low) => "Weak",
            (Self::TechnicalReadiness, ScoreBand::High) => "Ready",
            (Self::TechnicalReadiness, ScoreBand::Medium) => "Developing",
            (Self::TechnicalReadiness, ScoreBand::Low) => "Beginner",
            (Self::WiscarOverall, ScoreBand::High) => "High",
            (Self::WiscarOverall, ScoreBand::Medium) => "Medium",
            (Self::WiscarOverall, ScoreBand::Low) => "Low",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub recommendation: Recommendation,
    pub badge: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCardView {
    pub kind: ScoreCardKind,
    pub title: &'static str,
    pub score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionView {
    pub dimension: WiscarDimension,
    pub code: &'static str,
    pub label: &'static str,
    pub score: u8,
    pub band: ScoreBand,
}
