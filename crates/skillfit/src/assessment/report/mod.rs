pub mod views;

use super::scoring::{AssessmentResults, MAYBE_THRESHOLD, YES_THRESHOLD};
use chrono::NaiveDate;
use serde::Serialize;
use views::{DimensionView, RecommendationView, ScoreBand, ScoreCardKind, ScoreCardView};

impl ScoreBand {
    /// Uses the recommendation cut points so bands and tiers agree.
    pub const fn for_score(score: u8) -> Self {
        if score >= YES_THRESHOLD {
            Self::High
        } else if score >= MAYBE_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Presentation-neutral view of an assessment's results.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_on: NaiveDate,
    pub confidence_score: u8,
    pub recommendation: RecommendationView,
    pub score_cards: Vec<ScoreCardView>,
    pub wiscar: Vec<DimensionView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_areas: Vec<&'static str>,
    pub next_steps: Vec<String>,
    pub career_alignment: Vec<String>,
    pub ideal_path: Vec<String>,
}

impl AssessmentReport {
    pub fn new(results: &AssessmentResults, generated_on: NaiveDate) -> Self {
        let recommendation = RecommendationView {
            recommendation: results.recommendation,
            badge: results.recommendation.label(),
            message: results.recommendation.summary(),
        };

        let score_cards = ScoreCardKind::ordered()
            .into_iter()
            .map(|kind| {
                let score = match kind {
                    ScoreCardKind::PsychologicalFit => results.psychological_fit,
                    ScoreCardKind::TechnicalReadiness => results.technical_readiness,
                    ScoreCardKind::WiscarOverall => results.wiscar.overall_confidence,
                };
                let band = ScoreBand::for_score(score);
                ScoreCardView {
                    kind,
                    title: kind.title(),
                    score,
                    band,
                    band_label: kind.band_label(band),
                    description: kind.description(),
                }
            })
            .collect();

        let wiscar: Vec<DimensionView> = results
            .wiscar
            .dimensions()
            .into_iter()
            .map(|(dimension, score)| DimensionView {
                dimension,
                code: dimension.code(),
                label: dimension.label(),
                score,
                band: ScoreBand::for_score(score),
            })
            .collect();

        let strengths = wiscar
            .iter()
            .filter(|view| view.band == ScoreBand::High)
            .map(|view| view.label)
            .collect();
        let focus_areas = wiscar
            .iter()
            .filter(|view| view.band == ScoreBand::Low)
            .map(|view| view.label)
            .collect();

        Self {
            generated_on,
            confidence_score: results.confidence_score,
            recommendation,
            score_cards,
            wiscar,
            strengths,
            focus_areas,
            next_steps: results.next_steps.clone(),
            career_alignment: results.career_alignment.clone(),
            ideal_path: results.ideal_path.clone(),
        }
    }
}
