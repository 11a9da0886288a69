use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;
use skillfit::assessment::{QuestionBank, ScoringEngine};
use skillfit::config::AssessmentSettings;
use skillfit::error::AppError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line `--bank` wins over `SKILLFIT_QUESTION_BANK`; otherwise the built-in bank.
pub(crate) fn load_bank(
    flag: Option<&Path>,
    settings: &AssessmentSettings,
) -> Result<QuestionBank, AppError> {
    match flag.or(settings.question_bank.as_deref()) {
        Some(path) => {
            let bank = QuestionBank::from_path(path)?;
            info!(
                path = %path.display(),
                questions = bank.total_questions(),
                "loaded question bank"
            );
            Ok(bank)
        }
        None => {
            debug!("using the built-in question bank");
            Ok(QuestionBank::standard())
        }
    }
}

pub(crate) fn build_engine(
    bank_flag: Option<&Path>,
    settings: &AssessmentSettings,
) -> Result<ScoringEngine, AppError> {
    let bank = load_bank(bank_flag, settings)?;
    Ok(ScoringEngine::with_config(bank, settings.scoring.clone())?)
}

pub(crate) fn report_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes `contents` to `path` when given, otherwise to stdout.
pub(crate) fn emit(path: Option<&PathBuf>, contents: &str) -> Result<(), AppError> {
    match path {
        Some(path) => {
            std::fs::write(path, contents)?;
            info!(path = %path.display(), "wrote output file");
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
