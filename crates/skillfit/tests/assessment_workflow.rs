use chrono::NaiveDate;
use skillfit::assessment::{
    AnswerFormat, AnswerImporter, AnswerSet, AssessmentReport, AssessmentSession, BankIssue,
    Category, QuestionBank, QuestionId, Recommendation, ResponseFormat, ScoringEngine,
    SessionStage, SubmitOutcome,
};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid report date")
}

fn strong_answers() -> AnswerSet {
    let data = include_bytes!("../fixtures/strong_answers.csv");
    AnswerImporter::from_reader(&data[..], AnswerFormat::Csv).expect("fixture answers import")
}

#[test]
fn imported_answers_produce_a_recommended_report() {
    let engine = ScoringEngine::new(QuestionBank::standard());
    let answers = strong_answers();
    assert_eq!(answers.len(), engine.bank().total_questions());

    let results = engine.score(&answers);

    assert_eq!(results.psychological_fit, 96);
    assert_eq!(results.technical_readiness, 91);
    assert_eq!(results.wiscar.will, 88);
    assert_eq!(results.wiscar.skill, 65);
    assert_eq!(results.wiscar.overall_confidence, 90);
    assert_eq!(results.confidence_score, 92);
    assert_eq!(results.recommendation, Recommendation::Yes);

    let report = AssessmentReport::new(&results, report_date());
    assert_eq!(report.recommendation.badge, "Recommended");
    assert_eq!(report.score_cards[0].band_label, "Strong");
    assert_eq!(report.score_cards[1].band_label, "Ready");
    assert_eq!(report.score_cards[2].band_label, "High");
    assert!(report.focus_areas.is_empty());
    assert!(!report.career_alignment.is_empty());
}

#[test]
fn results_serialize_with_single_letter_wiscar_keys() {
    let engine = ScoringEngine::new(QuestionBank::standard());
    let results = engine.score(&strong_answers());

    let json = serde_json::to_value(&results).expect("serialize results");

    for key in ["W", "I", "S", "C", "A", "R", "overall_confidence"] {
        assert!(json["wiscar"].get(key).is_some(), "missing wiscar key {key}");
    }
    assert_eq!(json["recommendation"], "Yes");
    assert_eq!(json["confidence_score"], 92);
}

#[test]
fn custom_bank_loads_from_json_with_diagnostics() {
    let data = include_bytes!("../fixtures/compact_bank.json");
    let bank = QuestionBank::from_reader(&data[..]).expect("compact bank loads");

    assert_eq!(bank.sections().len(), 3);
    assert_eq!(bank.total_questions(), 5);
    assert_eq!(bank.sections()[1].description, "");

    let slider = bank
        .question(&QuestionId::from("sql_years"))
        .expect("slider question present");
    assert_eq!(slider.weight, 2.0);
    match &slider.format {
        ResponseFormat::Slider {
            min_value,
            max_value,
            ..
        } => assert_eq!((*min_value, *max_value), (0.0, 10.0)),
        other => panic!("expected slider, got {other:?}"),
    }

    assert_eq!(bank.diagnostics().len(), 1);
    match &bank.diagnostics()[0].issue {
        BankIssue::UnrecognizedCategory { tag } => assert_eq!(tag, "culture"),
        other => panic!("expected unrecognized category, got {other:?}"),
    }
    assert_eq!(
        bank.question(&QuestionId::from("team_culture"))
            .map(|question| question.category.clone()),
        Some(Category::Unrecognized("culture".to_string()))
    );
}

#[test]
fn session_over_a_custom_bank_scores_on_completion() {
    let data = include_bytes!("../fixtures/compact_bank.json");
    let bank = QuestionBank::from_reader(&data[..]).expect("compact bank loads");
    let mut session = AssessmentSession::new(ScoringEngine::new(bank));

    session.start().expect("start");
    assert_eq!(
        session.submit(4u8),
        Ok(SubmitOutcome::SectionComplete { next_section: 2 })
    );
    assert_eq!(
        session.submit(6.0),
        Ok(SubmitOutcome::SectionComplete { next_section: 3 })
    );
    session.submit(5u8).expect("will");
    session.submit("Data platforms").expect("interest");
    assert_eq!(session.submit(1u8), Ok(SubmitOutcome::Completed));

    assert_eq!(session.stage(), SessionStage::Results);
    let results = session.results().expect("scored");
    assert_eq!(results.psychological_fit, 75);
    assert_eq!(results.technical_readiness, 60);
    assert_eq!(results.wiscar.will, 100);
    assert_eq!(results.wiscar.interest, 100);
    assert_eq!(results.wiscar.overall_confidence, 33);
    assert_eq!(results.confidence_score, 56);
    assert_eq!(results.recommendation, Recommendation::Maybe);
}

#[test]
fn missing_answer_file_reports_io_error() {
    let path = std::env::temp_dir().join("skillfit-missing-answers.json");
    let err = AnswerImporter::from_path(&path).expect_err("missing file");

    assert!(err.to_string().contains("failed to read answer file"));
}
