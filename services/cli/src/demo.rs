use crate::infra::{self, OutputFormat};
use crate::render::render_report;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use skillfit::assessment::{
    AnswerValue, AssessmentReport, AssessmentSession, Question, QuestionId, ResponseFormat,
    SubmitOutcome,
};
use skillfit::config::AssessmentSettings;
use skillfit::error::AppError;
use std::path::PathBuf;
use tracing::info;

/// Scripted respondent used to walk through a full session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    #[default]
    Strong,
    Moderate,
    Weak,
}

impl DemoProfile {
    const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong candidate",
            Self::Moderate => "developing candidate",
            Self::Weak => "exploring candidate",
        }
    }

    const fn likert(self) -> u8 {
        match self {
            Self::Strong => 5,
            Self::Moderate => 4,
            Self::Weak => 2,
        }
    }

    /// Position within a slider's range, as a fraction.
    const fn slider_fraction(self) -> f64 {
        match self {
            Self::Strong => 0.9,
            Self::Moderate => 0.6,
            Self::Weak => 0.2,
        }
    }

    /// Option score the profile gravitates toward.
    const fn choice_target(self) -> f64 {
        match self {
            Self::Strong => 100.0,
            Self::Moderate => 58.0,
            Self::Weak => 0.0,
        }
    }

    fn answer(self, question: &Question) -> AnswerValue {
        match &question.format {
            ResponseFormat::Likert { .. } => AnswerValue::from(self.likert()),
            ResponseFormat::Slider {
                min_value,
                max_value,
                ..
            } => {
                let span = (max_value - min_value).max(0.0);
                AnswerValue::Number((min_value + span * self.slider_fraction()).round())
            }
            ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options } => {
                let target = self.choice_target();
                options
                    .iter()
                    .min_by(|(_, left), (_, right)| {
                        (*left - target).abs().total_cmp(&(*right - target).abs())
                    })
                    .map(|(text, _)| AnswerValue::Text(text.clone()))
                    .unwrap_or_else(|| AnswerValue::Text("No preference".to_string()))
            }
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scripted respondent to simulate
    #[arg(long, value_enum, default_value_t = DemoProfile::Strong)]
    pub(crate) profile: DemoProfile,
    /// Question bank JSON (defaults to SKILLFIT_QUESTION_BANK, then the built-in bank)
    #[arg(long)]
    pub(crate) bank: Option<PathBuf>,
    /// Output format for the final report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs, settings: &AssessmentSettings) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        bank,
        format,
        today,
    } = args;

    let engine = infra::build_engine(bank.as_deref(), settings)?;
    let mut session = AssessmentSession::new(engine);
    let transcript = play(&mut session, profile)?;

    let Some(results) = session.results() else {
        return Ok(());
    };
    let report = AssessmentReport::new(results, infra::report_date(today));
    info!(profile = ?profile, confidence_score = report.confidence_score, "demo complete");

    match format {
        OutputFormat::Json => infra::emit(None, &infra::to_pretty_json(&report)?),
        OutputFormat::Text => {
            let mut text = format!("Assessment demo: {}\n", profile.label());
            for (position, (question_id, value)) in transcript.iter().enumerate() {
                text.push_str(&format!("{:>2}. {} -> {}\n", position + 1, question_id, value));
            }
            text.push('\n');

            let mut rendered = Vec::new();
            render_report(&mut rendered, &report)?;
            text.push_str(&String::from_utf8_lossy(&rendered));
            infra::emit(None, &text)
        }
    }
}

/// Answers every question in order and returns what was submitted.
fn play(
    session: &mut AssessmentSession,
    profile: DemoProfile,
) -> Result<Vec<(QuestionId, AnswerValue)>, AppError> {
    session.start()?;
    let mut transcript = Vec::with_capacity(session.bank().total_questions());

    while let Some(question) = session.current_question().cloned() {
        let value = profile.answer(&question);
        transcript.push((question.id.clone(), value.clone()));
        if session.submit(value)? == SubmitOutcome::Completed {
            break;
        }
    }

    Ok(transcript)
}
