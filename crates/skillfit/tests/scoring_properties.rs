use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use skillfit::assessment::{
    compute_results, AnswerSet, AnswerValue, AssessmentResults, QuestionBank, QuestionId,
    Recommendation, ResponseFormat,
};

fn likert_ids(bank: &QuestionBank) -> Vec<QuestionId> {
    bank.questions()
        .filter(|question| matches!(question.format, ResponseFormat::Likert { .. }))
        .map(|question| question.id.clone())
        .collect()
}

fn answer_value() -> impl Strategy<Value = AnswerValue> {
    prop_oneof![
        (-1000.0f64..1000.0).prop_map(AnswerValue::Number),
        ".{0,12}".prop_map(AnswerValue::Text),
    ]
}

fn likert_answers(bank: &QuestionBank, values: &[u8]) -> AnswerSet {
    likert_ids(bank)
        .into_iter()
        .zip(values.iter().copied())
        .fold(AnswerSet::new(), |answers, (id, value)| answers.with(id, value))
}

/// Every question answered: likert values, slider fractions and option picks cycle.
fn full_answers(bank: &QuestionBank, likert: &[u8], fractions: &[f64], picks: &[usize]) -> AnswerSet {
    let (mut likert_seen, mut slider_seen, mut choice_seen) = (0, 0, 0);
    let mut answers = AnswerSet::new();

    for question in bank.questions() {
        let value = match &question.format {
            ResponseFormat::Likert { .. } => {
                likert_seen += 1;
                AnswerValue::from(likert[(likert_seen - 1) % likert.len()])
            }
            ResponseFormat::Slider {
                min_value,
                max_value,
                ..
            } => {
                slider_seen += 1;
                let fraction = fractions[(slider_seen - 1) % fractions.len()];
                AnswerValue::Number(min_value + fraction * (max_value - min_value))
            }
            ResponseFormat::MultipleChoice { options } | ResponseFormat::Scenario { options } => {
                choice_seen += 1;
                let pick = picks[(choice_seen - 1) % picks.len()] % options.len();
                match options.get_index(pick) {
                    Some((text, _)) => AnswerValue::from(text.as_str()),
                    None => continue,
                }
            }
        };
        answers.record(question.id.clone(), value);
    }

    answers
}

fn sliders(bank: &QuestionBank) -> Vec<(QuestionId, f64, f64)> {
    bank.questions()
        .filter_map(|question| match question.format {
            ResponseFormat::Slider {
                min_value,
                max_value,
                ..
            } => Some((question.id.clone(), min_value, max_value)),
            _ => None,
        })
        .collect()
}

fn choices(bank: &QuestionBank) -> Vec<(QuestionId, Vec<(String, f64)>)> {
    bank.questions()
        .filter_map(|question| {
            let options = question.format.options()?;
            let options = options
                .iter()
                .map(|(text, score)| (text.clone(), *score))
                .collect();
            Some((question.id.clone(), options))
        })
        .collect()
}

fn assert_not_lower(
    before: &AssessmentResults,
    after: &AssessmentResults,
) -> Result<(), TestCaseError> {
    prop_assert!(after.psychological_fit >= before.psychological_fit);
    prop_assert!(after.technical_readiness >= before.technical_readiness);
    let dimensions = before.wiscar.dimensions().into_iter().zip(after.wiscar.dimensions());
    for ((dimension, old), (_, new)) in dimensions {
        prop_assert!(new >= old, "{:?} dropped from {} to {}", dimension, old, new);
    }
    prop_assert!(after.wiscar.overall_confidence >= before.wiscar.overall_confidence);
    prop_assert!(after.confidence_score >= before.confidence_score);
    Ok(())
}

proptest! {
    #[test]
    fn scores_stay_within_bounds(values in prop::collection::vec(answer_value(), 32)) {
        let bank = QuestionBank::standard();
        let answers = bank
            .questions()
            .map(|question| question.id.clone())
            .zip(values)
            .fold(AnswerSet::new(), |answers, (id, value)| answers.with(id, value));

        let results = compute_results(&answers, &bank);

        prop_assert!(results.psychological_fit <= 100);
        prop_assert!(results.technical_readiness <= 100);
        prop_assert!(results.confidence_score <= 100);
        for (_, score) in results.wiscar.dimensions() {
            prop_assert!(score <= 100);
        }
        prop_assert_eq!(
            results.recommendation,
            Recommendation::for_confidence(results.confidence_score)
        );
    }

    #[test]
    fn raising_a_likert_answer_never_lowers_scores(
        values in prop::collection::vec(1u8..=4, 16),
        position in 0usize..16,
    ) {
        let bank = QuestionBank::standard();
        let position = position % likert_ids(&bank).len();
        let mut raised = values.clone();
        raised[position] += 1;

        let before = compute_results(&likert_answers(&bank, &values), &bank);
        let after = compute_results(&likert_answers(&bank, &raised), &bank);

        assert_not_lower(&before, &after)?;
    }

    #[test]
    fn raising_a_slider_answer_never_lowers_scores(
        likert in prop::collection::vec(1u8..=5, 10),
        fractions in prop::collection::vec(0.0f64..1.0, 3),
        picks in prop::collection::vec(0usize..4, 10),
        position in 0usize..3,
        raise in 0.0f64..1.0,
    ) {
        let bank = QuestionBank::standard();
        let sliders = sliders(&bank);
        let (id, min_value, max_value) = &sliders[position % sliders.len()];
        let answers = full_answers(&bank, &likert, &fractions, &picks);

        let current = answers
            .get(id)
            .and_then(AnswerValue::as_number)
            .unwrap_or(*min_value);
        let raised_value = (current + raise * (max_value - min_value)).min(*max_value);
        let raised = answers.clone().with(id.clone(), raised_value);

        assert_not_lower(&compute_results(&answers, &bank), &compute_results(&raised, &bank))?;
    }

    #[test]
    fn switching_to_a_higher_scored_option_never_lowers_scores(
        likert in prop::collection::vec(1u8..=5, 10),
        fractions in prop::collection::vec(0.0f64..1.0, 3),
        picks in prop::collection::vec(0usize..4, 10),
        position in 0usize..10,
        first in 0usize..4,
        second in 0usize..4,
    ) {
        let bank = QuestionBank::standard();
        let choices = choices(&bank);
        let (id, options) = &choices[position % choices.len()];
        let first = &options[first % options.len()];
        let second = &options[second % options.len()];
        let (lower, higher) = if first.1 <= second.1 { (first, second) } else { (second, first) };

        let answers = full_answers(&bank, &likert, &fractions, &picks);
        let before = answers.clone().with(id.clone(), lower.0.as_str());
        let after = answers.with(id.clone(), higher.0.as_str());

        assert_not_lower(&compute_results(&before, &bank), &compute_results(&after, &bank))?;
    }

    #[test]
    fn scoring_is_idempotent(values in prop::collection::vec(1u8..=5, 16)) {
        let bank = QuestionBank::standard();
        let answers = likert_answers(&bank, &values);

        prop_assert_eq!(compute_results(&answers, &bank), compute_results(&answers, &bank));
    }

    #[test]
    fn unknown_questions_are_ignored(
        values in prop::collection::vec(1u8..=5, 16),
        stranger in "[a-z]{1,8}",
        value in answer_value(),
    ) {
        let bank = QuestionBank::standard();
        let answers = likert_answers(&bank, &values);
        let with_stranger = answers.clone().with(format!("unlisted_{stranger}"), value);

        prop_assert_eq!(
            compute_results(&answers, &bank),
            compute_results(&with_stranger, &bank)
        );
    }
}
