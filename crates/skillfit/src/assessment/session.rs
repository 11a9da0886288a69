use super::answers::AnswerSet;
use super::bank::{QuestionBank, Section};
use super::domain::{AnswerValue, Question, ResponseFormat, LIKERT_MAX, LIKERT_MIN};
use super::scoring::{AssessmentResults, ScoringEngine};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

const INTRODUCTION_LABEL: &str = "Introduction";
const RESULTS_LABEL: &str = "Your Results";

/// Where the respondent is in the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum SessionStage {
    Introduction,
    Section { number: usize, question_index: usize },
    Results,
}

impl fmt::Display for SessionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStage::Introduction => write!(f, "on the introduction"),
            SessionStage::Section {
                number,
                question_index,
            } => write!(f, "on section {number}, question {}", question_index + 1),
            SessionStage::Results => write!(f, "showing results"),
        }
    }
}

/// What a submitted answer led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    NextQuestion,
    SectionComplete { next_section: usize },
    Completed,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot {action} while {stage}")]
    InvalidStage {
        action: &'static str,
        stage: SessionStage,
    },
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("invalid answer for '{question_id}': {reason}")]
    InvalidAnswer { question_id: String, reason: String },
}

/// Tab summary mirroring the assessment's progress header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTab {
    pub label: String,
    pub active: bool,
    pub completed: bool,
}

/// Linear assessment flow: introduction, each bank section in order, then results.
///
/// Answers accumulate incrementally and the scoring engine runs exactly once,
/// after the final question of the final section is answered.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    engine: ScoringEngine,
    stage: SessionStage,
    answers: AnswerSet,
    completed_sections: Vec<usize>,
    results: Option<AssessmentResults>,
}

impl AssessmentSession {
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            engine,
            stage: SessionStage::Introduction,
            answers: AnswerSet::new(),
            completed_sections: Vec::new(),
            results: None,
        }
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    pub fn bank(&self) -> &QuestionBank {
        self.engine.bank()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    pub fn completed_sections(&self) -> &[usize] {
        &self.completed_sections
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.stage != SessionStage::Introduction {
            return Err(self.invalid_stage("start the assessment"));
        }

        self.stage = SessionStage::Section {
            number: 1,
            question_index: 0,
        };
        info!(total_questions = self.bank().total_questions(), "assessment started");
        Ok(())
    }

    pub fn current_section(&self) -> Option<&Section> {
        match self.stage {
            SessionStage::Section { number, .. } => self.bank().section(number),
            SessionStage::Introduction | SessionStage::Results => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.stage {
            SessionStage::Section { question_index, .. } => self
                .current_section()
                .and_then(|section| section.questions.get(question_index)),
            SessionStage::Introduction | SessionStage::Results => None,
        }
    }

    /// Previously recorded answer for the question on screen, if any.
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|question| self.answers.get(&question.id))
    }

    /// Records an answer for the current question and advances the flow.
    pub fn submit(&mut self, value: impl Into<AnswerValue>) -> Result<SubmitOutcome, SessionError> {
        let SessionStage::Section {
            number,
            question_index,
        } = self.stage
        else {
            return Err(self.invalid_stage("submit an answer"));
        };

        let (question_id, section_len) = {
            let section = self
                .engine
                .bank()
                .section(number)
                .ok_or_else(|| self.invalid_stage("submit an answer"))?;
            let question = section
                .questions
                .get(question_index)
                .ok_or_else(|| self.invalid_stage("submit an answer"))?;
            let value = value.into();
            validate_answer(question, &value)?;
            self.answers.record(question.id.clone(), value);
            (question.id.clone(), section.questions.len())
        };
        debug!(%question_id, answered = self.answers.len(), "answer recorded");

        if question_index + 1 < section_len {
            self.stage = SessionStage::Section {
                number,
                question_index: question_index + 1,
            };
            return Ok(SubmitOutcome::NextQuestion);
        }

        if !self.completed_sections.contains(&number) {
            self.completed_sections.push(number);
        }

        if number < self.bank().sections().len() {
            self.stage = SessionStage::Section {
                number: number + 1,
                question_index: 0,
            };
            return Ok(SubmitOutcome::SectionComplete {
                next_section: number + 1,
            });
        }

        let results = self.engine.score(&self.answers);
        info!(
            confidence_score = results.confidence_score,
            recommendation = ?results.recommendation,
            "assessment complete"
        );
        self.results = Some(results);
        self.stage = SessionStage::Results;
        Ok(SubmitOutcome::Completed)
    }

    pub fn can_go_previous(&self) -> bool {
        matches!(
            self.stage,
            SessionStage::Section { number, question_index } if number > 1 || question_index > 0
        )
    }

    /// Steps back one question, crossing into the previous section when needed.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        let SessionStage::Section {
            number,
            question_index,
        } = self.stage
        else {
            return Err(self.invalid_stage("go back"));
        };

        if question_index > 0 {
            self.stage = SessionStage::Section {
                number,
                question_index: question_index - 1,
            };
            return Ok(());
        }

        if number <= 1 {
            return Err(SessionError::AtFirstQuestion);
        }

        let previous = number - 1;
        let last_index = self
            .bank()
            .section(previous)
            .map(|section| section.questions.len().saturating_sub(1))
            .unwrap_or(0);
        self.stage = SessionStage::Section {
            number: previous,
            question_index: last_index,
        };
        Ok(())
    }

    /// Discards all progress and returns to the introduction.
    pub fn restart(&mut self) {
        self.stage = SessionStage::Introduction;
        self.answers.clear();
        self.completed_sections.clear();
        self.results = None;
        info!("assessment reset");
    }

    pub fn progress_percent(&self) -> f64 {
        let total = self.bank().total_questions();
        if total == 0 {
            return 0.0;
        }
        self.answers.len() as f64 / total as f64 * 100.0
    }

    /// 1-based number of the next question to answer.
    pub fn question_number(&self) -> usize {
        self.answers.len() + 1
    }

    pub fn tabs(&self) -> Vec<StageTab> {
        let results_stage = self.bank().sections().len() + 1;
        let active_index = match self.stage {
            SessionStage::Introduction => 0,
            SessionStage::Section { number, .. } => number,
            SessionStage::Results => results_stage,
        };

        let mut labels = vec![INTRODUCTION_LABEL.to_string()];
        labels.extend(self.bank().sections().iter().map(|section| section.title.clone()));
        labels.push(RESULTS_LABEL.to_string());

        labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| StageTab {
                label,
                active: index == active_index,
                completed: self.completed_sections.contains(&index),
            })
            .collect()
    }

    fn invalid_stage(&self, action: &'static str) -> SessionError {
        SessionError::InvalidStage {
            action,
            stage: self.stage,
        }
    }
}

/// Checks a response against the question format before it is recorded.
fn validate_answer(question: &Question, value: &AnswerValue) -> Result<(), SessionError> {
    let reject = |reason: String| SessionError::InvalidAnswer {
        question_id: question.id.to_string(),
        reason,
    };

    if value.is_blank() {
        return Err(reject("answer is empty".to_string()));
    }

    match &question.format {
        ResponseFormat::Likert { .. } => {
            let raw = value
                .as_number()
                .ok_or_else(|| reject(format!("expected a number from {LIKERT_MIN} to {LIKERT_MAX}")))?;
            if raw.fract() != 0.0 || !(LIKERT_MIN..=LIKERT_MAX).contains(&raw) {
                return Err(reject(format!(
                    "expected a whole number from {LIKERT_MIN} to {LIKERT_MAX}, got {raw}"
                )));
            }
        }
        ResponseFormat::Slider {
            min_value,
            max_value,
            ..
        } => {
            let raw = value
                .as_number()
                .ok_or_else(|| reject("expected a number".to_string()))?;
            if max_value > min_value && !(*min_value..=*max_value).contains(&raw) {
                return Err(reject(format!(
                    "expected a value from {min_value} to {max_value}, got {raw}"
                )));
            }
        }
        ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options } => {
            let selected = value.as_text();
            if !options.is_empty() && !options.contains_key(&selected) {
                return Err(reject(format!("'{selected}' is not one of the options")));
            }
        }
    }

    Ok(())
}
