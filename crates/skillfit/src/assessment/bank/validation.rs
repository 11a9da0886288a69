use super::Section;
use crate::assessment::domain::{Category, QuestionId, ResponseFormat};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Soft problem with a single question; the bank still loads and scoring degrades around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankDiagnostic {
    pub question_id: QuestionId,
    pub issue: BankIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BankIssue {
    UnrecognizedCategory { tag: String },
    DegenerateSliderBounds { min_value: f64, max_value: f64 },
    MissingOptions,
    NonPositiveWeight { weight: f64 },
    OversizedWeight { weight: f64, category_total: f64 },
}

impl fmt::Display for BankIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankIssue::UnrecognizedCategory { tag } => {
                write!(f, "category '{tag}' is not scored")
            }
            BankIssue::DegenerateSliderBounds {
                min_value,
                max_value,
            } => write!(
                f,
                "slider bounds {min_value}..{max_value} leave no range to normalize"
            ),
            BankIssue::MissingOptions => write!(f, "choice question has no options"),
            BankIssue::NonPositiveWeight { weight } => {
                write!(f, "weight {weight} excludes the question from aggregation")
            }
            BankIssue::OversizedWeight {
                weight,
                category_total,
            } => write!(
                f,
                "weight {weight} brings the category total to {category_total}, too large for a plain weighted sum; weights are rescaled before averaging"
            ),
        }
    }
}

pub(super) fn inspect(sections: &[Section]) -> Vec<BankDiagnostic> {
    let mut diagnostics = Vec::new();

    for question in sections.iter().flat_map(|section| section.questions.iter()) {
        let mut push = |issue| {
            diagnostics.push(BankDiagnostic {
                question_id: question.id.clone(),
                issue,
            })
        };

        if let Category::Unrecognized(tag) = &question.category {
            push(BankIssue::UnrecognizedCategory { tag: tag.clone() });
        }

        match &question.format {
            ResponseFormat::Slider {
                min_value,
                max_value,
                ..
            } if !(max_value > min_value) => push(BankIssue::DegenerateSliderBounds {
                min_value: *min_value,
                max_value: *max_value,
            }),
            ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options }
                if options.is_empty() =>
            {
                push(BankIssue::MissingOptions)
            }
            _ => {}
        }

        if question.effective_weight() == 0.0 {
            push(BankIssue::NonPositiveWeight {
                weight: question.weight,
            });
        }
    }

    diagnostics.extend(oversized_weights(sections));
    diagnostics
}

/// Flags the heaviest question of each category whose weighted sum at full marks
/// would overflow an `f64`.
fn oversized_weights(sections: &[Section]) -> Vec<BankDiagnostic> {
    let mut totals: HashMap<&Category, (f64, Option<(&QuestionId, f64)>)> = HashMap::new();

    for question in sections.iter().flat_map(|section| section.questions.iter()) {
        let weight = question.effective_weight();
        let (total, heaviest) = totals.entry(&question.category).or_insert((0.0, None));
        *total += weight;
        if heaviest.map_or(true, |(_, current)| weight > current) {
            *heaviest = Some((&question.id, weight));
        }
    }

    let mut flagged: Vec<BankDiagnostic> = totals
        .into_values()
        .filter(|(total, _)| !(total * 100.0).is_finite())
        .filter_map(|(total, heaviest)| {
            heaviest.map(|(id, weight)| BankDiagnostic {
                question_id: id.clone(),
                issue: BankIssue::OversizedWeight {
                    weight,
                    category_total: total,
                },
            })
        })
        .collect();
    flagged.sort_by(|left, right| left.question_id.cmp(&right.question_id));
    flagged
}
