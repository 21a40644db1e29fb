use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::question::Question;

/// Display accent for profiles and result bands. The shell maps these to
/// concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Accent {
    Blue,
    Purple,
    Orange,
    Indigo,
    Yellow,
    Green,
    Gray,
}

/// One screening instrument: metadata plus an ordered question list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentProfile {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub badge: Option<String>,
    pub accent: Accent,
    pub questions: Vec<Question>,
}

impl AssessmentProfile {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains_question(&self, id: &str) -> bool {
        self.question(id).is_some()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category) {
                seen.push(q.category);
            }
        }
        seen
    }

    /// Ids that appear more than once in this profile. Empty for a well-formed profile.
    pub fn duplicate_question_ids(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();
        for (i, q) in self.questions.iter().enumerate() {
            let repeated = self.questions[..i].iter().any(|earlier| earlier.id == q.id);
            if repeated && !dups.contains(&q.id.as_str()) {
                dups.push(&q.id);
            }
        }
        dups
    }
}
