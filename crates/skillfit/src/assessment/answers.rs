use super::domain::{Answer, AnswerValue, QuestionId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Accumulated responses, one per question id.
///
/// Recording a second answer for the same id replaces the first in place, so the
/// set always holds the latest response in first-answered order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: IndexMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `question_id`, returning the answer it replaced.
    pub fn record(
        &mut self,
        question_id: impl Into<QuestionId>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.entries.insert(question_id.into(), value.into())
    }

    /// Builder form of [`AnswerSet::record`].
    pub fn with(mut self, question_id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.record(question_id, value);
        self
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.entries.get(question_id)
    }

    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.entries.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.entries.iter()
    }

    pub fn to_answers(&self) -> Vec<Answer> {
        self.entries
            .iter()
            .map(|(question_id, value)| Answer {
                question_id: question_id.clone(),
                value: value.clone(),
            })
            .collect()
    }
}

impl Extend<Answer> for AnswerSet {
    fn extend<T: IntoIterator<Item = Answer>>(&mut self, iter: T) {
        for answer in iter {
            self.record(answer.question_id, answer.value);
        }
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        let mut answers = Self::new();
        answers.extend(iter);
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_answers_overwrite_earlier_ones_in_place() {
        let mut answers = AnswerSet::new().with("a", 1u8).with("b", 2u8);

        let replaced = answers.record("a", 5u8);

        assert_eq!(replaced, Some(AnswerValue::Number(1.0)));
        assert_eq!(answers.len(), 2);
        let order: Vec<&str> = answers.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(answers.get(&QuestionId::new("a")), Some(&AnswerValue::Number(5.0)));
    }

    #[test]
    fn collecting_answers_keeps_the_last_value_per_id() {
        let answers: AnswerSet = vec![
            Answer::new("tech_warehouse", "I'm not sure"),
            Answer::new("tech_warehouse", "Providing compute resources to run queries"),
        ]
        .into_iter()
        .collect();

        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers.get(&QuestionId::new("tech_warehouse")),
            Some(&AnswerValue::from(
                "Providing compute resources to run queries"
            ))
        );
    }

    #[test]
    fn serializes_as_a_plain_object() {
        let answers = AnswerSet::new().with("a", 3u8).with("b", "yes");
        let json = serde_json::to_value(&answers).expect("serializes");
        assert_eq!(json, serde_json::json!({ "a": 3.0, "b": "yes" }));
    }
}
