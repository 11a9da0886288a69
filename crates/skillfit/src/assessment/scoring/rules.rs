use super::normalize::{normalize, SkipReason};
use super::{ScoreComponent, SkippedAnswer};
use crate::assessment::answers::AnswerSet;
use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::Category;
use tracing::{debug, warn};

pub(crate) struct ScoreTrail {
    pub(crate) components: Vec<ScoreComponent>,
    pub(crate) skipped: Vec<SkippedAnswer>,
}

/// Normalizes every answer against its question; answers that cannot be scored are recorded as skipped.
pub(crate) fn score_answers(answers: &AnswerSet, bank: &QuestionBank) -> ScoreTrail {
    let mut components = Vec::with_capacity(answers.len());
    let mut skipped = Vec::new();

    for (question_id, value) in answers.iter() {
        let Some(question) = bank.question(question_id) else {
            warn!(%question_id, "ignoring answer for a question outside the bank");
            skipped.push(SkippedAnswer {
                question_id: question_id.clone(),
                reason: SkipReason::UnknownQuestion,
            });
            continue;
        };

        match normalize(&question.format, value) {
            Ok(normalized) => components.push(ScoreComponent {
                question_id: question_id.clone(),
                category: question.category.clone(),
                score: normalized.score,
                weight: question.effective_weight(),
                notes: normalized.note,
            }),
            Err(reason) => {
                debug!(%question_id, %reason, "answer skipped during normalization");
                skipped.push(SkippedAnswer {
                    question_id: question_id.clone(),
                    reason,
                });
            }
        }
    }

    ScoreTrail {
        components,
        skipped,
    }
}

/// Weighted mean of the category's normalized scores, rounded; 0 when nothing contributes.
pub(crate) fn category_score(components: &[ScoreComponent], category: &Category) -> u8 {
    let pairs: Vec<(f64, f64)> = components
        .iter()
        .filter(|component| &component.category == category)
        .map(|component| (component.score, component.weight))
        .collect();

    weighted_mean(&pairs).map_or(0, round_percent)
}

/// Mean of `(score, weight)` pairs; `None` when no pair carries weight.
///
/// Weights are divided by the largest one before summing, so any mix of finite
/// weights yields a finite mean.
pub(crate) fn weighted_mean(pairs: &[(f64, f64)]) -> Option<f64> {
    let largest = pairs
        .iter()
        .map(|&(_, weight)| weight)
        .filter(|weight| weight.is_finite())
        .fold(0.0, f64::max);
    if largest <= 0.0 {
        return None;
    }

    let (sum, total) = pairs
        .iter()
        .filter(|(_, weight)| weight.is_finite() && *weight > 0.0)
        .fold((0.0, 0.0), |(sum, total), &(score, weight)| {
            let share = weight / largest;
            (sum + score * share, total + share)
        });

    Some(sum / total)
}

/// Unweighted mean of already-rounded scores.
pub(crate) fn mean_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let sum: u32 = scores.iter().map(|&score| u32::from(score)).sum();
    round_percent(f64::from(sum) / scores.len() as f64)
}

pub(crate) fn round_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.round().clamp(0.0, 100.0) as u8
}
