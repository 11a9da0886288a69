mod config;
mod normalize;
mod policy;
mod rules;

pub use config::{ConfidenceWeights, ScoringConfig, ScoringConfigError};
pub use normalize::{SkipReason, NEUTRAL_SCORE};
pub use policy::{Recommendation, MAYBE_THRESHOLD, YES_THRESHOLD};

use super::answers::AnswerSet;
use super::bank::QuestionBank;
use super::domain::{Category, QuestionId, WiscarDimension};
use super::guidance::{guidance_for, owned};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer that applies a scoring configuration to a question bank.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: QuestionBank,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(bank: QuestionBank, config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        config.confidence_weights.validate()?;
        Ok(Self { bank, config })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a complete answer set. Total: unscorable answers are skipped, never fatal.
    pub fn score(&self, answers: &AnswerSet) -> AssessmentResults {
        let trail = rules::score_answers(answers, &self.bank);
        results_from(&trail.components, &self.config)
    }

    /// Per-question audit trail behind [`ScoringEngine::score`].
    pub fn breakdown(&self, answers: &AnswerSet) -> ScoreBreakdown {
        let trail = rules::score_answers(answers, &self.bank);
        let results = results_from(&trail.components, &self.config);

        ScoreBreakdown {
            results,
            components: trail.components,
            skipped: trail.skipped,
        }
    }
}

/// Scores `answers` against `bank` with the default equal-weight confidence blend.
pub fn compute_results(answers: &AnswerSet, bank: &QuestionBank) -> AssessmentResults {
    let trail = rules::score_answers(answers, bank);
    results_from(&trail.components, &ScoringConfig::default())
}

fn results_from(components: &[ScoreComponent], config: &ScoringConfig) -> AssessmentResults {
    let psychological_fit = rules::category_score(components, &Category::Psychological);
    let technical_readiness = rules::category_score(components, &Category::Technical);
    let wiscar = WiscarScores::from_components(components);

    let confidence_score = policy::blend_confidence(
        psychological_fit,
        technical_readiness,
        wiscar.overall_confidence,
        &config.confidence_weights,
    );
    let recommendation = Recommendation::for_confidence(confidence_score);
    let guidance = guidance_for(recommendation);

    debug!(
        psychological_fit,
        technical_readiness,
        wiscar_overall = wiscar.overall_confidence,
        confidence_score,
        ?recommendation,
        "assessment scored"
    );

    AssessmentResults {
        psychological_fit,
        technical_readiness,
        wiscar,
        confidence_score,
        recommendation,
        next_steps: owned(guidance.next_steps),
        career_alignment: owned(guidance.career_alignment),
        ideal_path: owned(guidance.ideal_path),
    }
}

/// Six WISCAR dimension scores plus their unweighted mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    #[serde(rename = "W")]
    pub will: u8,
    #[serde(rename = "I")]
    pub interest: u8,
    #[serde(rename = "S")]
    pub skill: u8,
    #[serde(rename = "C")]
    pub cognitive: u8,
    #[serde(rename = "A")]
    pub ability_to_learn: u8,
    #[serde(rename = "R")]
    pub real_world_fit: u8,
    pub overall_confidence: u8,
}

impl WiscarScores {
    /// Builds the scores from six dimension values, deriving the overall confidence.
    pub fn from_dimensions(scores: [u8; 6]) -> Self {
        let [will, interest, skill, cognitive, ability_to_learn, real_world_fit] =
            scores.map(|score| score.min(100));
        let overall_confidence = rules::mean_score(&[
            will,
            interest,
            skill,
            cognitive,
            ability_to_learn,
            real_world_fit,
        ]);

        Self {
            will,
            interest,
            skill,
            cognitive,
            ability_to_learn,
            real_world_fit,
            overall_confidence,
        }
    }

    fn from_components(components: &[ScoreComponent]) -> Self {
        Self::from_dimensions(
            WiscarDimension::ordered()
                .map(|dimension| rules::category_score(components, &Category::Wiscar(dimension))),
        )
    }

    pub const fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldFit => self.real_world_fit,
        }
    }

    pub fn dimensions(&self) -> [(WiscarDimension, u8); 6] {
        WiscarDimension::ordered().map(|dimension| (dimension, self.get(dimension)))
    }
}

/// Final output of an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub psychological_fit: u8,
    pub technical_readiness: u8,
    pub wiscar: WiscarScores,
    pub confidence_score: u8,
    pub recommendation: Recommendation,
    pub next_steps: Vec<String>,
    pub career_alignment: Vec<String>,
    pub ideal_path: Vec<String>,
}

/// Discrete contribution of one answer, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub question_id: QuestionId,
    pub category: Category,
    pub score: f64,
    pub weight: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedAnswer {
    pub question_id: QuestionId,
    #[serde(flatten)]
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub results: AssessmentResults,
    pub components: Vec<ScoreComponent>,
    pub skipped: Vec<SkippedAnswer>,
}
