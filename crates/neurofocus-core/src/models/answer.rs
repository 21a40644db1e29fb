use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The five-point frequency scale shared by every question.
/// A label's index is its severity value.
pub const ANSWER_SCALE: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Very Often"];

/// Severity value of the top of the scale ("Very Often").
pub const MAX_ANSWER_VALUE: u8 = 4;

/// A single answer: a severity value in `[0, 4]`.
///
/// Can only be constructed through [`AnswerValue::new`] (or `TryFrom<u8>`),
/// so every stored value indexes [`ANSWER_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const NEVER: AnswerValue = AnswerValue(0);
    pub const VERY_OFTEN: AnswerValue = AnswerValue(MAX_ANSWER_VALUE);

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > MAX_ANSWER_VALUE {
            return Err(CoreError::AnswerOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        ANSWER_SCALE[usize::from(self.0)]
    }

    /// Parse a scale label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        let wanted = label.trim();
        ANSWER_SCALE
            .iter()
            .position(|l| l.eq_ignore_ascii_case(wanted))
            .map(|idx| Self(idx as u8))
            .ok_or_else(|| CoreError::UnknownAnswerLabel(label.to_string()))
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
