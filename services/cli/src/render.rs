use skillfit::assessment::{
    AssessmentReport, Question, QuestionBank, ResponseFormat, ScoreBreakdown,
};
use std::io::{self, Write};

pub(crate) fn render_questions<W: Write>(out: &mut W, bank: &QuestionBank) -> io::Result<()> {
    writeln!(
        out,
        "Question bank: {} sections, {} questions",
        bank.sections().len(),
        bank.total_questions()
    )?;

    for section in bank.sections() {
        writeln!(out, "\n{}. {}", section.number, section.title)?;
        if !section.description.is_empty() {
            writeln!(out, "   {}", section.description)?;
        }
        for question in &section.questions {
            writeln!(
                out,
                "- [{}] {} ({}, {})",
                question.id,
                question.prompt,
                question.format.kind(),
                question.category
            )?;
            render_format_hint(out, question, "    ")?;
        }
    }

    if !bank.diagnostics().is_empty() {
        writeln!(out, "\nDiagnostics")?;
        for diagnostic in bank.diagnostics() {
            writeln!(out, "- {}: {}", diagnostic.question_id, diagnostic.issue)?;
        }
    }

    Ok(())
}

/// Scale labels or numbered options for a question, one per line.
pub(crate) fn render_format_hint<W: Write>(
    out: &mut W,
    question: &Question,
    indent: &str,
) -> io::Result<()> {
    match &question.format {
        ResponseFormat::Likert { .. } => {
            let (min_label, max_label) = question.format.labels();
            writeln!(
                out,
                "{indent}1 = {} ... 5 = {}",
                min_label.unwrap_or("Strongly disagree"),
                max_label.unwrap_or("Strongly agree")
            )
        }
        ResponseFormat::Slider {
            min_value,
            max_value,
            ..
        } => {
            let (min_label, max_label) = question.format.labels();
            match (min_label, max_label) {
                (Some(min_label), Some(max_label)) => writeln!(
                    out,
                    "{indent}{min_value} = {min_label} ... {max_value} = {max_label}"
                ),
                _ => writeln!(out, "{indent}range {min_value} to {max_value}"),
            }
        }
        ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options } => {
            for (position, text) in options.keys().enumerate() {
                writeln!(out, "{indent}{}) {}", position + 1, text)?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_report<W: Write>(out: &mut W, report: &AssessmentReport) -> io::Result<()> {
    writeln!(out, "Snowflake career readiness report ({})", report.generated_on)?;
    writeln!(
        out,
        "Overall confidence: {}% | {}",
        report.confidence_score, report.recommendation.badge
    )?;
    writeln!(out, "{}", report.recommendation.message)?;

    writeln!(out, "\nScores")?;
    for card in &report.score_cards {
        writeln!(
            out,
            "- {}: {}% ({})",
            card.title, card.score, card.band_label
        )?;
        writeln!(out, "  {}", card.description)?;
    }

    writeln!(out, "\nWISCAR dimensions")?;
    for dimension in &report.wiscar {
        writeln!(
            out,
            "- {} ({}): {}%",
            dimension.label, dimension.code, dimension.score
        )?;
    }

    if !report.strengths.is_empty() {
        writeln!(out, "\nStrengths: {}", report.strengths.join(", "))?;
    }
    if !report.focus_areas.is_empty() {
        writeln!(out, "Focus areas: {}", report.focus_areas.join(", "))?;
    }

    render_list(out, "Next steps", &report.next_steps)?;
    render_list(out, "Career alignment", &report.career_alignment)?;
    render_list(out, "Ideal learning path", &report.ideal_path)
}

pub(crate) fn render_breakdown<W: Write>(
    out: &mut W,
    breakdown: &ScoreBreakdown,
) -> io::Result<()> {
    writeln!(out, "\nScore components")?;
    for component in &breakdown.components {
        writeln!(
            out,
            "- {} [{}]: {:.1} x{} ({})",
            component.question_id,
            component.category,
            component.score,
            component.weight,
            component.notes
        )?;
    }

    if breakdown.skipped.is_empty() {
        writeln!(out, "\nSkipped answers: none")
    } else {
        writeln!(out, "\nSkipped answers")?;
        for skipped in &breakdown.skipped {
            writeln!(out, "- {}: {}", skipped.question_id, skipped.reason)?;
        }
        Ok(())
    }
}

fn render_list<W: Write>(out: &mut W, title: &str, items: &[String]) -> io::Result<()> {
    writeln!(out, "\n{title}")?;
    for (position, item) in items.iter().enumerate() {
        writeln!(out, "{}. {}", position + 1, item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skillfit::assessment::{AnswerSet, ScoringEngine};

    fn rendered<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn report_lists_scores_and_guidance() {
        let engine = ScoringEngine::new(QuestionBank::standard());
        let results = engine.score(&AnswerSet::new());
        let report = AssessmentReport::new(
            &results,
            NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date"),
        );

        let text = rendered(|out| render_report(out, &report));

        assert!(text.contains("(2025-10-01)"));
        assert!(text.contains("Overall confidence: 0% | Not Recommended"));
        assert!(text.contains("- Psychological Fit: 0% (Weak)"));
        assert!(text.contains("- Real-World Fit (R): 0%"));
        assert!(text.contains("Focus areas: Will, Interest"));
        assert!(text.contains("\nNext steps\n1. "));
    }

    #[test]
    fn question_listing_numbers_choice_options() {
        let bank = QuestionBank::standard();

        let text = rendered(|out| render_questions(out, &bank));

        assert!(text.starts_with("Question bank: 3 sections, 23 questions"));
        assert!(text.contains("\n1. Psychological Fit\n"));
        assert!(text.contains("    1) Providing compute resources to run queries"));
        assert!(text.contains("    1 = Strongly disagree ... 5 = Strongly agree"));
        assert!(!text.contains("Diagnostics"));
    }

    #[test]
    fn breakdown_lists_skipped_answers() {
        let engine = ScoringEngine::new(QuestionBank::standard());
        let answers = AnswerSet::new()
            .with("psych_detail", 4u8)
            .with("retired_question", 3u8);

        let text = rendered(|out| render_breakdown(out, &engine.breakdown(&answers)));

        assert!(text.contains("- psych_detail [psychological]: 75.0 x1"));
        assert!(text.contains("\nSkipped answers\n- retired_question: "));
    }
}
