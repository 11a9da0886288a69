//! Career-fit assessment: question bank, answer capture, scoring, and reporting.
//!
//! Scoring is a pure function of an answer set and a question bank. The session
//! drives the linear introduction → sections → results flow and calls the
//! scoring engine once, when the final question is answered.

pub mod answers;
pub mod bank;
pub mod domain;
pub mod guidance;
pub mod import;
pub mod report;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use bank::{BankDiagnostic, BankIssue, QuestionBank, QuestionBankError, Section};
pub use domain::{
    Answer, AnswerValue, Category, Question, QuestionId, ResponseFormat, WiscarDimension,
};
pub use guidance::{guidance_for, Guidance};
pub use import::{AnswerFormat, AnswerImportError, AnswerImporter};
pub use report::views::{
    DimensionView, RecommendationView, ScoreBand, ScoreCardKind, ScoreCardView,
};
pub use report::AssessmentReport;
pub use scoring::{
    compute_results, AssessmentResults, ConfidenceWeights, Recommendation, ScoreBreakdown,
    ScoreComponent, ScoringConfig, ScoringConfigError, ScoringEngine, SkipReason, SkippedAnswer,
    WiscarScores,
};
pub use session::{AssessmentSession, SessionError, SessionStage, StageTab, SubmitOutcome};
