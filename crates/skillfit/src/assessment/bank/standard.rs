use crate::assessment::domain::{Category, Question, QuestionId, ResponseFormat, WiscarDimension};
use indexmap::IndexMap;

const AGREE_MIN: &str = "Strongly disagree";
const AGREE_MAX: &str = "Strongly agree";

pub(super) fn standard_sections() -> Vec<(String, String, Vec<Question>)> {
    vec![
        (
            "Psychological Fit".to_string(),
            "Evaluate your personality traits, motivation, and mindset alignment with data engineering roles."
                .to_string(),
            psychological_questions(),
        ),
        (
            "Technical Aptitude".to_string(),
            "Assess your current technical knowledge and aptitude for Snowflake concepts.".to_string(),
            technical_questions(),
        ),
        (
            "WISCAR Analysis".to_string(),
            "Comprehensive evaluation across six readiness dimensions: Will, Interest, Skill, Cognitive, Ability to learn, and Real-world fit."
                .to_string(),
            wiscar_questions(),
        ),
    ]
}

fn psychological_questions() -> Vec<Question> {
    vec![
        agreement(
            "psych_structured_work",
            "I enjoy working with structured data and organizing information systematically.",
            Category::Psychological,
        ),
        agreement(
            "psych_problem_solving",
            "I find satisfaction in solving complex logical problems step by step.",
            Category::Psychological,
        ),
        agreement(
            "psych_detail",
            "I pay close attention to detail, even in repetitive tasks.",
            Category::Psychological,
        ),
        agreement(
            "psych_learning",
            "I actively keep up with new cloud and data technologies.",
            Category::Psychological,
        ),
        scenario(
            "psych_pipeline_failure",
            "A nightly data pipeline fails an hour before a stakeholder report is due. What do you do first?",
            Category::Psychological,
            &[
                ("Read the logs, isolate the failing step, and share an ETA", 100.0),
                ("Rerun the whole pipeline and hope it passes", 40.0),
                ("Tell stakeholders the report will be late and investigate tomorrow", 20.0),
                ("Escalate to someone senior without looking into it", 10.0),
            ],
        ),
        weighted(
            multiple_choice(
                "psych_work_style",
                "Which kind of work energizes you the most?",
                Category::Psychological,
                &[
                    ("Designing reliable processes that run without me", 100.0),
                    ("Collaborating with analysts on data questions", 75.0),
                    ("Building user interfaces and visual products", 35.0),
                    ("Hands-on work away from computers", 0.0),
                ],
            ),
            1.5,
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    vec![
        weighted(
            slider(
                "tech_sql_comfort",
                "How comfortable are you writing SQL with joins and aggregations?",
                Category::Technical,
                (0.0, 100.0),
                ("Never written SQL", "Write complex SQL daily"),
            ),
            1.5,
        ),
        multiple_choice(
            "tech_warehouse",
            "What is the primary purpose of a virtual warehouse in Snowflake?",
            Category::Technical,
            &[
                ("Providing compute resources to run queries", 100.0),
                ("Storing table data permanently", 25.0),
                ("Managing user authentication", 10.0),
                ("I'm not sure", 0.0),
            ],
        ),
        multiple_choice(
            "tech_storage_compute",
            "What does separating storage from compute make possible?",
            Category::Technical,
            &[
                ("Scaling query capacity independently of data volume", 100.0),
                ("Running queries without writing SQL", 10.0),
                ("Storing data without encryption", 0.0),
                ("I'm not sure", 0.0),
            ],
        ),
        agreement(
            "tech_cloud_experience",
            "I have hands-on experience with at least one cloud platform (AWS, Azure, or GCP).",
            Category::Technical,
        ),
        scenario(
            "tech_time_travel",
            "A teammate deleted rows from a production table 20 minutes ago. What would you try first?",
            Category::Technical,
            &[
                ("Query the table's earlier state with Time Travel and restore the rows", 100.0),
                ("Restore last week's backup over the table", 40.0),
                ("Ask the teammate to re-enter the data by hand", 15.0),
                ("I'm not sure", 0.0),
            ],
        ),
    ]
}

fn wiscar_questions() -> Vec<Question> {
    use WiscarDimension::*;

    vec![
        agreement(
            "wiscar_will_persistence",
            "I keep working on a difficult problem even when progress is slow.",
            Category::Wiscar(Will),
        ),
        slider(
            "wiscar_will_hours",
            "How many hours per week could you commit to learning Snowflake?",
            Category::Wiscar(Will),
            (0.0, 20.0),
            ("0 hours", "20+ hours"),
        ),
        agreement(
            "wiscar_interest_data",
            "I am curious about how large organizations store and analyze their data.",
            Category::Wiscar(Interest),
        ),
        multiple_choice(
            "wiscar_interest_reading",
            "Which topic would you most like to read about in your free time?",
            Category::Wiscar(Interest),
            &[
                ("How companies build modern data platforms", 100.0),
                ("Dashboard and analytics case studies", 70.0),
                ("General technology news", 40.0),
                ("Topics unrelated to technology", 10.0),
            ],
        ),
        slider(
            "wiscar_skill_scripting",
            "Rate your current scripting skills (Python, shell, or similar).",
            Category::Wiscar(Skill),
            (0.0, 10.0),
            ("None", "Expert"),
        ),
        multiple_choice(
            "wiscar_skill_modeling",
            "Which best describes your data modeling experience?",
            Category::Wiscar(Skill),
            &[
                ("Designed star or snowflake schemas for analytics", 100.0),
                ("Created tables for an application database", 60.0),
                ("Worked with spreadsheets only", 25.0),
                ("No experience", 0.0),
            ],
        ),
        multiple_choice(
            "wiscar_cognitive_sequence",
            "What comes next in the sequence 2, 6, 12, 20, 30, ...?",
            Category::Wiscar(Cognitive),
            &[("42", 100.0), ("40", 20.0), ("36", 10.0), ("44", 10.0)],
        ),
        agreement(
            "wiscar_cognitive_decompose",
            "I naturally break large problems into smaller, testable pieces.",
            Category::Wiscar(Cognitive),
        ),
        agreement(
            "wiscar_ability_feedback",
            "I adjust my approach quickly when given critical feedback.",
            Category::Wiscar(AbilityToLearn),
        ),
        scenario(
            "wiscar_ability_new_tool",
            "Your next project starts in a week and uses a tool you have never seen. How do you prepare?",
            Category::Wiscar(AbilityToLearn),
            &[
                ("Work through the official docs and build a small prototype", 100.0),
                ("Watch a few overview videos", 60.0),
                ("Wait and learn on the job", 30.0),
                ("Ask to be moved to a different project", 0.0),
            ],
        ),
        multiple_choice(
            "wiscar_real_role",
            "Which day-to-day role sounds most appealing?",
            Category::Wiscar(RealWorldFit),
            &[
                ("Building and automating data pipelines", 100.0),
                ("Designing data platform architecture", 90.0),
                ("Creating business dashboards", 70.0),
                ("Something outside of data", 10.0),
            ],
        ),
        agreement(
            "wiscar_real_environment",
            "I would enjoy a job where data reliability is business-critical.",
            Category::Wiscar(RealWorldFit),
        ),
    ]
}

fn agreement(id: &str, prompt: &str, category: Category) -> Question {
    question(
        id,
        prompt,
        category,
        ResponseFormat::Likert {
            min_label: Some(AGREE_MIN.to_string()),
            max_label: Some(AGREE_MAX.to_string()),
        },
    )
}

fn slider(
    id: &str,
    prompt: &str,
    category: Category,
    (min_value, max_value): (f64, f64),
    (min_label, max_label): (&str, &str),
) -> Question {
    question(
        id,
        prompt,
        category,
        ResponseFormat::Slider {
            min_value,
            max_value,
            min_label: Some(min_label.to_string()),
            max_label: Some(max_label.to_string()),
        },
    )
}

fn multiple_choice(id: &str, prompt: &str, category: Category, options: &[(&str, f64)]) -> Question {
    question(
        id,
        prompt,
        category,
        ResponseFormat::MultipleChoice {
            options: option_map(options),
        },
    )
}

fn scenario(id: &str, prompt: &str, category: Category, options: &[(&str, f64)]) -> Question {
    question(
        id,
        prompt,
        category,
        ResponseFormat::Scenario {
            options: option_map(options),
        },
    )
}

fn weighted(mut question: Question, weight: f64) -> Question {
    question.weight = weight;
    question
}

fn option_map(options: &[(&str, f64)]) -> IndexMap<String, f64> {
    options
        .iter()
        .map(|(text, score)| (text.to_string(), *score))
        .collect()
}

fn question(id: &str, prompt: &str, category: Category, format: ResponseFormat) -> Question {
    Question {
        id: QuestionId::new(id),
        prompt: prompt.to_string(),
        category,
        format,
        weight: 1.0,
    }
}
