use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::question::Question;

/// A respondent's choices: question id -> chosen option id.
///
/// Backed by an ordered map so the serialized form is byte-stable. Iteration
/// order carries no meaning for scoring; the question list drives that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice, returning the option it replaced if the question was already answered.
    pub fn answer(&mut self, question_id: impl Into<String>, option_id: impl Into<String>) -> Option<String> {
        self.0.insert(question_id.into(), option_id.into())
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(q, o)| (q.as_str(), o.as_str()))
    }

    /// Ids of configured questions that have no answer yet, in question order.
    pub fn unanswered<'a>(&self, questions: &'a [Question]) -> Vec<&'a str> {
        questions
            .iter()
            .filter(|q| !self.0.contains_key(&q.id))
            .map(|q| q.id.as_str())
            .collect()
    }

    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.0.contains_key(&q.id))
    }

    /// Number of answers that name a configured question and one of its options.
    pub fn recognized(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .filter(|q| self.get(&q.id).map_or(false, |option_id| q.option(option_id).is_some()))
            .count()
    }
}

impl<Q: Into<String>, O: Into<String>> FromIterator<(Q, O)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (Q, O)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(q, o)| (q.into(), o.into())).collect())
    }
}
