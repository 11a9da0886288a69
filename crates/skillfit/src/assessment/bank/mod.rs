mod standard;
mod validation;

pub use validation::{BankDiagnostic, BankIssue};

use super::domain::{Category, Question, QuestionId, ResponseFormat};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Structural problems that make a bank unusable.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question bank has no sections")]
    NoSections,
    #[error("section '{title}' has no questions")]
    EmptySection { title: String },
    #[error("question id '{0}' appears more than once")]
    DuplicateQuestion(QuestionId),
}

/// Ordered group of questions presented together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub number: usize,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct BankDocument {
    sections: Vec<SectionDocument>,
}

#[derive(Debug, Deserialize)]
struct SectionDocument {
    title: String,
    #[serde(default)]
    description: String,
    questions: Vec<Question>,
}

/// Static question catalogue, indexed by question id.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    sections: Vec<Section>,
    index: HashMap<QuestionId, (usize, usize)>,
    diagnostics: Vec<BankDiagnostic>,
}

impl QuestionBank {
    /// The built-in Snowflake readiness bank.
    pub fn standard() -> Self {
        Self::assemble(number_sections(standard::standard_sections()))
    }

    /// Builds a bank from `(title, description, questions)` parts, numbering sections from 1.
    pub fn from_parts(
        parts: Vec<(String, String, Vec<Question>)>,
    ) -> Result<Self, QuestionBankError> {
        Self::new(number_sections(parts))
    }

    pub fn new(sections: Vec<Section>) -> Result<Self, QuestionBankError> {
        if sections.is_empty() {
            return Err(QuestionBankError::NoSections);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if section.questions.is_empty() {
                return Err(QuestionBankError::EmptySection {
                    title: section.title.clone(),
                });
            }

            for question in &section.questions {
                if !seen.insert(&question.id) {
                    return Err(QuestionBankError::DuplicateQuestion(question.id.clone()));
                }
            }
        }

        Ok(Self::assemble(sections))
    }

    fn assemble(mut sections: Vec<Section>) -> Self {
        trim_option_keys(&mut sections);

        let mut index = HashMap::new();
        for (section_position, section) in sections.iter().enumerate() {
            for (question_position, question) in section.questions.iter().enumerate() {
                index
                    .entry(question.id.clone())
                    .or_insert((section_position, question_position));
            }
        }

        let diagnostics = validation::inspect(&sections);
        for diagnostic in &diagnostics {
            warn!(question_id = %diagnostic.question_id, issue = %diagnostic.issue, "question bank diagnostic");
        }

        Self {
            sections,
            index,
            diagnostics,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionBankError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        let document: BankDocument = serde_json::from_reader(reader)?;
        let parts = document
            .sections
            .into_iter()
            .map(|section| (section.title, section.description, section.questions))
            .collect();
        Self::from_parts(parts)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section by its 1-based number.
    pub fn section(&self, number: usize) -> Option<&Section> {
        number
            .checked_sub(1)
            .and_then(|position| self.sections.get(position))
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.index
            .get(id)
            .map(|&(section, position)| &self.sections[section].questions[position])
    }

    /// All questions in presentation order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
    }

    pub fn questions_in<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions()
            .filter(move |question| &question.category == category)
    }

    pub fn total_questions(&self) -> usize {
        self.index.len()
    }

    /// Non-fatal problems found while loading the bank.
    pub fn diagnostics(&self) -> &[BankDiagnostic] {
        &self.diagnostics
    }
}

fn number_sections(parts: Vec<(String, String, Vec<Question>)>) -> Vec<Section> {
    parts
        .into_iter()
        .enumerate()
        .map(|(position, (title, description, questions))| Section {
            number: position + 1,
            title,
            description,
            questions,
        })
        .collect()
}

/// Answers are matched trimmed, so option keys are stored the same way.
fn trim_option_keys(sections: &mut [Section]) {
    for question in sections
        .iter_mut()
        .flat_map(|section| section.questions.iter_mut())
    {
        if let ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options } =
            &mut question.format
        {
            *options = std::mem::take(options)
                .into_iter()
                .map(|(text, score)| (text.trim().to_string(), score))
                .collect();
        }
    }
}

impl Serialize for QuestionBank {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("QuestionBank", 1)?;
        state.serialize_field("sections", &self.sections)?;
        state.end()
    }
}
