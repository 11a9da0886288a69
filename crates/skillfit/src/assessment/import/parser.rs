use crate::assessment::answers::AnswerSet;
use crate::assessment::domain::{Answer, AnswerValue};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<AnswerSet, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = AnswerSet::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        if let Some(value) = row.value {
            answers.record(row.question_id, parse_value(&value));
        }
    }

    Ok(answers)
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<AnswerSet, serde_json::Error> {
    let document: AnswerDocument = serde_json::from_reader(reader)?;
    Ok(match document {
        AnswerDocument::List(answers) => answers.into_iter().collect(),
        AnswerDocument::Map(answers) => answers,
    })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerDocument {
    List(Vec<Answer>),
    Map(AnswerSet),
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(alias = "questionId")]
    question_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_value(raw: &str) -> AnswerValue {
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => AnswerValue::Number(number),
        _ => AnswerValue::Text(raw.to_string()),
    }
}
