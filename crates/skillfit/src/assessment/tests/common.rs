use crate::assessment::answers::AnswerSet;
use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{Category, Question, QuestionId, ResponseFormat, WiscarDimension};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::session::AssessmentSession;
use indexmap::IndexMap;

pub(super) fn likert(id: &str, category: Category) -> Question {
    Question {
        id: QuestionId::from(id),
        prompt: format!("Prompt for {id}"),
        category,
        format: ResponseFormat::Likert {
            min_label: Some("Strongly Disagree".to_string()),
            max_label: Some("Strongly Agree".to_string()),
        },
        weight: 1.0,
    }
}

pub(super) fn percent_slider(id: &str, category: Category) -> Question {
    Question {
        id: QuestionId::from(id),
        prompt: format!("Prompt for {id}"),
        category,
        format: ResponseFormat::Slider {
            min_value: 0.0,
            max_value: 100.0,
            min_label: None,
            max_label: None,
        },
        weight: 1.0,
    }
}

pub(super) fn choice(id: &str, category: Category, options: &[(&str, f64)]) -> Question {
    Question {
        id: QuestionId::from(id),
        prompt: format!("Prompt for {id}"),
        category,
        format: ResponseFormat::MultipleChoice {
            options: options
                .iter()
                .map(|(text, score)| (text.to_string(), *score))
                .collect::<IndexMap<_, _>>(),
        },
        weight: 1.0,
    }
}

/// Five psychological likert questions, `psych_1` through `psych_5`.
pub(super) fn psychological_bank() -> QuestionBank {
    let questions = (1..=5)
        .map(|n| likert(&format!("psych_{n}"), Category::Psychological))
        .collect();
    QuestionBank::from_parts(vec![(
        "Psychological Fit".to_string(),
        String::new(),
        questions,
    )])
    .expect("valid psychological bank")
}

/// One 0–100 slider for each scored category, so every top-level score
/// equals whatever value the slider receives.
pub(super) fn slider_bank() -> QuestionBank {
    let wiscar = WiscarDimension::ordered()
        .into_iter()
        .map(|dimension| {
            percent_slider(
                &format!("wiscar_{}", dimension.code().to_ascii_lowercase()),
                Category::Wiscar(dimension),
            )
        })
        .collect();

    QuestionBank::from_parts(vec![
        (
            "Psychological Fit".to_string(),
            String::new(),
            vec![percent_slider("psych_slider", Category::Psychological)],
        ),
        (
            "Technical Aptitude".to_string(),
            String::new(),
            vec![percent_slider("tech_slider", Category::Technical)],
        ),
        ("WISCAR Analysis".to_string(), String::new(), wiscar),
    ])
    .expect("valid slider bank")
}

pub(super) fn uniform_answers(bank: &QuestionBank, value: f64) -> AnswerSet {
    bank.questions()
        .fold(AnswerSet::new(), |answers, question| {
            answers.with(question.id.clone(), value)
        })
}

/// Three short sections: two psychological questions, a technical choice,
/// and two WISCAR likert items.
pub(super) fn short_bank() -> QuestionBank {
    QuestionBank::from_parts(vec![
        (
            "Psychological Fit".to_string(),
            "How you like to work".to_string(),
            vec![
                likert("psych_focus", Category::Psychological),
                likert("psych_detail", Category::Psychological),
            ],
        ),
        (
            "Technical Aptitude".to_string(),
            "What you already know".to_string(),
            vec![choice(
                "tech_warehouse",
                Category::Technical,
                &[("Compute clusters", 100.0), ("Not sure", 0.0)],
            )],
        ),
        (
            "WISCAR Analysis".to_string(),
            "Six dimensions of readiness".to_string(),
            vec![
                likert("wiscar_will", Category::Wiscar(WiscarDimension::Will)),
                likert("wiscar_skill", Category::Wiscar(WiscarDimension::Skill)),
            ],
        ),
    ])
    .expect("valid short bank")
}

pub(super) fn short_session() -> AssessmentSession {
    AssessmentSession::new(ScoringEngine::new(short_bank()))
}
