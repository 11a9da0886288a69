use crate::render::render_format_hint;
use skillfit::assessment::{
    AnswerValue, AssessmentSession, Question, ResponseFormat, SessionError, SubmitOutcome,
};
use skillfit::error::AppError;
use std::io::{BufRead, Write};
use tracing::debug;

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionExit {
    Completed,
    Quit,
}

enum Input {
    Back,
    Quit,
    Answer(AnswerValue),
}

/// Drives `session` from line-based input until results are ready or the user quits.
///
/// `b` steps back a question and `q` (or end of input) quits without scoring.
pub(crate) fn run_session<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    input: &mut R,
    out: &mut W,
) -> Result<SessionExit, AppError> {
    session.start()?;
    writeln!(
        out,
        "Snowflake career readiness assessment: {} questions in {} sections.",
        session.bank().total_questions(),
        session.bank().sections().len()
    )?;
    writeln!(out, "Type 'b' to go back or 'q' to quit.")?;
    announce_section(session, out)?;

    loop {
        let Some(question) = session.current_question().cloned() else {
            return Ok(SessionExit::Completed);
        };
        prompt(session, &question, out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(SessionExit::Quit);
        }

        match parse_input(&question, &line) {
            Input::Quit => return Ok(SessionExit::Quit),
            Input::Back => match session.previous() {
                Ok(()) => announce_section(session, out)?,
                Err(SessionError::AtFirstQuestion) => {
                    writeln!(out, "Already at the first question.")?
                }
                Err(err) => return Err(err.into()),
            },
            Input::Answer(value) => match session.submit(value) {
                Ok(SubmitOutcome::NextQuestion) => {}
                Ok(SubmitOutcome::SectionComplete { next_section }) => {
                    debug!(next_section, "section complete");
                    announce_section(session, out)?;
                }
                Ok(SubmitOutcome::Completed) => return Ok(SessionExit::Completed),
                Err(SessionError::InvalidAnswer { reason, .. }) => {
                    writeln!(out, "Invalid answer: {reason}")?
                }
                Err(err) => return Err(err.into()),
            },
        }
    }
}

fn announce_section<W: Write>(session: &AssessmentSession, out: &mut W) -> Result<(), AppError> {
    if let Some(section) = session.current_section() {
        writeln!(out, "\n== {}. {} ==", section.number, section.title)?;
        if !section.description.is_empty() {
            writeln!(out, "{}", section.description)?;
        }
    }
    Ok(())
}

fn prompt<W: Write>(
    session: &AssessmentSession,
    question: &Question,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(
        out,
        "\nQuestion {} of {} ({:.0}% complete)",
        session.question_number().min(session.bank().total_questions()),
        session.bank().total_questions(),
        session.progress_percent()
    )?;
    writeln!(out, "{}", question.prompt)?;
    render_format_hint(out, question, "  ")?;
    if let Some(previous) = session.current_answer() {
        writeln!(out, "  (current answer: {previous})")?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Choice questions accept the option number as a shortcut for its text.
fn parse_input(question: &Question, line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Input::Quit;
    }
    if trimmed.eq_ignore_ascii_case("b") {
        return Input::Back;
    }

    match &question.format {
        ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options } => {
            let by_number = trimmed
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| options.get_index(index))
                .map(|(text, _)| text.clone());
            Input::Answer(AnswerValue::Text(
                by_number.unwrap_or_else(|| trimmed.to_string()),
            ))
        }
        ResponseFormat::Likert { .. } | ResponseFormat::Slider { .. } => {
            match trimmed.parse::<f64>() {
                Ok(number) => Input::Answer(AnswerValue::Number(number)),
                Err(_) => Input::Answer(AnswerValue::Text(trimmed.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillfit::assessment::{QuestionBank, Recommendation, ScoringEngine, SessionStage};
    use std::io::Cursor;

    fn session() -> AssessmentSession {
        AssessmentSession::new(ScoringEngine::new(QuestionBank::standard()))
    }

    fn top_answers(bank: &QuestionBank) -> String {
        bank.questions()
            .map(|question| match &question.format {
                ResponseFormat::Likert { .. } => "5".to_string(),
                ResponseFormat::Slider { max_value, .. } => max_value.to_string(),
                ResponseFormat::MultipleChoice { .. } | ResponseFormat::Scenario { .. } => {
                    "1".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn answering_every_question_completes_the_session() {
        let mut session = session();
        let script = top_answers(session.bank());
        let mut output = Vec::new();

        let exit = run_session(&mut session, &mut Cursor::new(script), &mut output)
            .expect("session runs");

        assert_eq!(exit, SessionExit::Completed);
        let results = session.results().expect("scored");
        assert_eq!(results.recommendation, Recommendation::Yes);
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("== 3. WISCAR Analysis =="));
    }

    #[test]
    fn invalid_input_reprompts_and_back_revisits() {
        let mut session = session();
        let mut output = Vec::new();
        let script = "9\n4\nb\n2\nq\n";

        let exit = run_session(&mut session, &mut Cursor::new(script), &mut output)
            .expect("session runs");

        assert_eq!(exit, SessionExit::Quit);
        assert_eq!(
            session.stage(),
            SessionStage::Section {
                number: 1,
                question_index: 1
            }
        );
        assert_eq!(session.answers().len(), 1);
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Invalid answer: expected a whole number from 1 to 5, got 9"));
        assert!(text.contains("(current answer: 4)"));
    }

    #[test]
    fn option_numbers_select_option_text() {
        let bank = QuestionBank::standard();
        let question = bank
            .question(&"tech_warehouse".into())
            .expect("question present");

        match parse_input(question, " 1 \n") {
            Input::Answer(AnswerValue::Text(text)) => {
                assert_eq!(text, "Providing compute resources to run queries")
            }
            _ => panic!("expected option text"),
        }
        match parse_input(question, "7") {
            Input::Answer(AnswerValue::Text(text)) => assert_eq!(text, "7"),
            _ => panic!("expected raw text"),
        }
    }

    #[test]
    fn end_of_input_quits_without_scoring() {
        let mut session = session();
        let mut output = Vec::new();

        let exit = run_session(&mut session, &mut Cursor::new(""), &mut output)
            .expect("session runs");

        assert_eq!(exit, SessionExit::Quit);
        assert!(session.results().is_none());
    }

    #[test]
    fn back_on_the_first_question_is_reported() {
        let mut session = session();
        let mut output = Vec::new();

        run_session(&mut session, &mut Cursor::new("b\nq\n"), &mut output).expect("session runs");

        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Already at the first question."));
    }
}
