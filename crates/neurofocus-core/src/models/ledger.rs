use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerValue;

/// Answers collected during one assessment run, keyed by question id.
///
/// A map, not a log: recording an answer for a question that already has one
/// replaces it. Missing entries mean "unanswered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseLedger {
    #[ts(type = "Record<string, number>")]
    answers: BTreeMap<String, AnswerValue>,
}

impl ResponseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer for `question_id`.
    /// Returns the previous answer, if any.
    pub fn record(&mut self, question_id: impl Into<String>, value: AnswerValue) -> Option<AnswerValue> {
        self.answers.insert(question_id.into(), value)
    }

    pub fn get(&self, question_id: &str) -> Option<AnswerValue> {
        self.answers.get(question_id).copied()
    }

    /// Answer for `question_id`, with unanswered questions counting as "Never".
    pub fn answer_or_never(&self, question_id: &str) -> AnswerValue {
        self.get(question_id).unwrap_or(AnswerValue::NEVER)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for ResponseLedger {
    fn from_iter<I: IntoIterator<Item = (K, AnswerValue)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (id, value) in iter {
            ledger.record(id, value);
        }
        ledger
    }
}
