use crate::demo::{run_demo, DemoArgs};
use crate::infra::{self, OutputFormat};
use crate::interactive::{run_session, SessionExit};
use crate::render::{render_breakdown, render_questions, render_report};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use skillfit::assessment::{AnswerImporter, AssessmentReport, AssessmentSession};
use skillfit::config::{AppConfig, AssessmentSettings};
use skillfit::error::AppError;
use skillfit::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "skillfit",
    about = "Assess readiness for a Snowflake data engineering career",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the question bank
    Questions(QuestionsArgs),
    /// Score a recorded answer file
    Score(ScoreArgs),
    /// Take the assessment interactively (default command)
    Take(TakeArgs),
    /// Walk through a scripted session for demos
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Question bank JSON (defaults to SKILLFIT_QUESTION_BANK, then the built-in bank)
    #[arg(long)]
    pub(crate) bank: Option<PathBuf>,
    /// Print the bank as JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer file (.json or .csv)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Question bank JSON (defaults to SKILLFIT_QUESTION_BANK, then the built-in bank)
    #[arg(long)]
    pub(crate) bank: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Write output to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Include the per-question score trail
    #[arg(long)]
    pub(crate) explain: bool,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Question bank JSON (defaults to SKILLFIT_QUESTION_BANK, then the built-in bank)
    #[arg(long)]
    pub(crate) bank: Option<PathBuf>,
    /// Also save the results as JSON to this path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Take(TakeArgs::default()));

    match command {
        Command::Questions(args) => run_questions(args, &config.assessment),
        Command::Score(args) => run_score(args, &config.assessment),
        Command::Take(args) => run_take(args, &config.assessment),
        Command::Demo(args) => run_demo(args, &config.assessment),
    }
}

fn run_questions(args: QuestionsArgs, settings: &AssessmentSettings) -> Result<(), AppError> {
    let bank = infra::load_bank(args.bank.as_deref(), settings)?;

    if args.json {
        return infra::emit(None, &infra::to_pretty_json(&bank)?);
    }

    let mut listing = Vec::new();
    render_questions(&mut listing, &bank)?;
    infra::emit(None, &String::from_utf8_lossy(&listing))
}

fn run_score(args: ScoreArgs, settings: &AssessmentSettings) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        bank,
        format,
        output,
        explain,
        today,
    } = args;

    let engine = infra::build_engine(bank.as_deref(), settings)?;
    let answer_set = AnswerImporter::from_path(&answers)?;
    let breakdown = engine.breakdown(&answer_set);
    info!(
        answers = answer_set.len(),
        skipped = breakdown.skipped.len(),
        confidence_score = breakdown.results.confidence_score,
        "answers scored"
    );

    let contents = match format {
        OutputFormat::Json if explain => infra::to_pretty_json(&breakdown)?,
        OutputFormat::Json => infra::to_pretty_json(&breakdown.results)?,
        OutputFormat::Text => {
            let report = AssessmentReport::new(&breakdown.results, infra::report_date(today));
            let mut text = Vec::new();
            render_report(&mut text, &report)?;
            if explain {
                render_breakdown(&mut text, &breakdown)?;
            }
            String::from_utf8_lossy(&text).into_owned()
        }
    };

    infra::emit(output.as_ref(), &contents)
}

fn run_take(args: TakeArgs, settings: &AssessmentSettings) -> Result<(), AppError> {
    let TakeArgs {
        bank,
        output,
        today,
    } = args;

    let engine = infra::build_engine(bank.as_deref(), settings)?;
    let mut session = AssessmentSession::new(engine);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let exit = run_session(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    let (SessionExit::Completed, Some(results)) = (exit, session.results()) else {
        info!(answered = session.answers().len(), "assessment abandoned");
        return Ok(());
    };

    let report = AssessmentReport::new(results, infra::report_date(today));
    let mut text = vec![b'\n'];
    render_report(&mut text, &report)?;
    infra::emit(None, &String::from_utf8_lossy(&text))?;

    if let Some(path) = output {
        infra::emit(Some(&path), &infra::to_pretty_json(results)?)?;
    }

    Ok(())
}
