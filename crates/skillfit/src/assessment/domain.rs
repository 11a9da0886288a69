use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LIKERT_MIN: f64 = 1.0;
pub const LIKERT_MAX: f64 = 5.0;

const DEFAULT_SLIDER_MIN: f64 = 0.0;
const DEFAULT_SLIDER_MAX: f64 = 100.0;

/// Identifier wrapper for questions in a bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The six readiness dimensions of the WISCAR model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WiscarDimension {
    #[serde(rename = "W")]
    Will,
    #[serde(rename = "I")]
    Interest,
    #[serde(rename = "S")]
    Skill,
    #[serde(rename = "C")]
    Cognitive,
    #[serde(rename = "A")]
    AbilityToLearn,
    #[serde(rename = "R")]
    RealWorldFit,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::AbilityToLearn,
            Self::RealWorldFit,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Will => "W",
            Self::Interest => "I",
            Self::Skill => "S",
            Self::Cognitive => "C",
            Self::AbilityToLearn => "A",
            Self::RealWorldFit => "R",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::AbilityToLearn => "Ability to Learn",
            Self::RealWorldFit => "Real-World Fit",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.code().eq_ignore_ascii_case(code))
    }
}

/// Aggregation tag carried by every question.
///
/// Tags that do not match a known category are preserved as `Unrecognized` so a
/// hand-edited bank still loads; such questions never contribute to a score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Psychological,
    Technical,
    Wiscar(WiscarDimension),
    Unrecognized(String),
}

impl Category {
    /// Every category that feeds a score, in report order.
    pub fn scored() -> Vec<Self> {
        let mut categories = vec![Self::Psychological, Self::Technical];
        categories.extend(WiscarDimension::ordered().into_iter().map(Self::Wiscar));
        categories
    }

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lowered = trimmed.to_ascii_lowercase();
        match lowered.as_str() {
            "psychological" => Self::Psychological,
            "technical" => Self::Technical,
            _ => lowered
                .strip_prefix("wiscar-")
                .and_then(WiscarDimension::from_code)
                .map(Self::Wiscar)
                .unwrap_or_else(|| Self::Unrecognized(trimmed.to_string())),
        }
    }

    pub fn tag(&self) -> String {
        match self {
            Self::Psychological => "psychological".to_string(),
            Self::Technical => "technical".to_string(),
            Self::Wiscar(dimension) => format!("wiscar-{}", dimension.code()),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.tag()
    }
}

/// How a question collects its answer, with the data each format needs to normalize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ResponseFormat {
    Likert {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_label: Option<String>,
    },
    Slider {
        #[serde(default = "default_slider_min")]
        min_value: f64,
        #[serde(default = "default_slider_max")]
        max_value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_label: Option<String>,
    },
    MultipleChoice {
        #[serde(default)]
        options: IndexMap<String, f64>,
    },
    Scenario {
        #[serde(default)]
        options: IndexMap<String, f64>,
    },
}

impl ResponseFormat {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Likert { .. } => "likert",
            Self::Slider { .. } => "slider",
            Self::MultipleChoice { .. } => "multiple-choice",
            Self::Scenario { .. } => "scenario",
        }
    }

    /// Option text mapped to its pre-assigned score, for the choice formats.
    pub fn options(&self) -> Option<&IndexMap<String, f64>> {
        match self {
            Self::MultipleChoice { options } | Self::Scenario { options } => Some(options),
            Self::Likert { .. } | Self::Slider { .. } => None,
        }
    }

    pub fn labels(&self) -> (Option<&str>, Option<&str>) {
        match self {
            Self::Likert {
                min_label,
                max_label,
            }
            | Self::Slider {
                min_label,
                max_label,
                ..
            } => (min_label.as_deref(), max_label.as_deref()),
            Self::MultipleChoice { .. } | Self::Scenario { .. } => (None, None),
        }
    }
}

fn default_slider_min() -> f64 {
    DEFAULT_SLIDER_MIN
}

fn default_slider_max() -> f64 {
    DEFAULT_SLIDER_MAX
}

fn default_weight() -> f64 {
    1.0
}

/// Immutable question definition supplied by the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub category: Category,
    #[serde(flatten)]
    pub format: ResponseFormat,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Question {
    /// Weight used during aggregation; non-finite or negative weights count as zero.
    pub fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            0.0
        }
    }
}

/// Raw response captured for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Numeric reading of the answer; text is accepted when it parses as a number.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        };
        value.filter(|value| value.is_finite())
    }

    /// Textual reading of the answer, used for option lookups.
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.trim().to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single response keyed by question id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(alias = "questionId")]
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}
