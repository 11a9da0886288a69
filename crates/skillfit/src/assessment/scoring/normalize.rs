use crate::assessment::domain::{AnswerValue, ResponseFormat, LIKERT_MAX, LIKERT_MIN};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Score assigned to a choice answer whose text is not in the option map.
pub const NEUTRAL_SCORE: f64 = 50.0;

pub(crate) struct NormalizedAnswer {
    pub(crate) score: f64,
    pub(crate) note: String,
}

/// Why an answer could not be placed on the 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    UnknownQuestion,
    NotNumeric { format: &'static str },
    DegenerateSliderBounds { min_value: f64, max_value: f64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownQuestion => write!(f, "question is not in the bank"),
            SkipReason::NotNumeric { format } => {
                write!(f, "{format} answers must be numeric")
            }
            SkipReason::DegenerateSliderBounds {
                min_value,
                max_value,
            } => write!(f, "slider bounds {min_value}..{max_value} are degenerate"),
        }
    }
}

pub(crate) fn normalize(
    format: &ResponseFormat,
    value: &AnswerValue,
) -> Result<NormalizedAnswer, SkipReason> {
    match format {
        ResponseFormat::Likert { .. } => {
            let raw = value.as_number().ok_or(SkipReason::NotNumeric {
                format: format.kind(),
            })?;
            Ok(NormalizedAnswer {
                score: likert(raw),
                note: format!("likert {raw} of {LIKERT_MAX}"),
            })
        }
        ResponseFormat::Slider {
            min_value,
            max_value,
            ..
        } => {
            let raw = value.as_number().ok_or(SkipReason::NotNumeric {
                format: format.kind(),
            })?;
            let score = slider(raw, *min_value, *max_value).ok_or(
                SkipReason::DegenerateSliderBounds {
                    min_value: *min_value,
                    max_value: *max_value,
                },
            )?;
            Ok(NormalizedAnswer {
                score,
                note: format!("slider {raw} within {min_value}..{max_value}"),
            })
        }
        ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options } => {
            Ok(choice(options, value))
        }
    }
}

fn likert(raw: f64) -> f64 {
    clamp_percent((raw - LIKERT_MIN) / (LIKERT_MAX - LIKERT_MIN) * 100.0)
}

fn slider(raw: f64, min_value: f64, max_value: f64) -> Option<f64> {
    let span = max_value - min_value;
    if !span.is_finite() || span <= 0.0 {
        return None;
    }

    Some(clamp_percent((raw - min_value) / span * 100.0))
}

fn choice(options: &IndexMap<String, f64>, value: &AnswerValue) -> NormalizedAnswer {
    let selected = value.as_text();
    match options.get(&selected).filter(|score| score.is_finite()) {
        Some(score) => NormalizedAnswer {
            score: clamp_percent(*score),
            note: format!("selected '{selected}'"),
        },
        None => NormalizedAnswer {
            score: NEUTRAL_SCORE,
            note: format!("'{selected}' is not a listed option; using neutral midpoint"),
        },
    }
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
