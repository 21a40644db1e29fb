//! One in-progress assessment: the response ledger plus the current step.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neurofocus_core::models::answer::AnswerValue;
use neurofocus_core::models::diagnosis::DiagnosisResult;
use neurofocus_core::models::ledger::ResponseLedger;
use neurofocus_core::models::profile::AssessmentProfile;
use neurofocus_core::models::question::Question;

use crate::error::InstrumentError;
use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum RunState {
    InProgress { step: usize },
    Completed,
}

/// Drives a single profile from the first question to completion.
///
/// The step only moves forward. Hosts that offer back-navigation rewrite
/// earlier answers with [`AssessmentRun::revise`], which leaves the step alone.
#[derive(Debug, Clone)]
pub struct AssessmentRun<'p> {
    profile: &'p AssessmentProfile,
    ledger: ResponseLedger,
    state: RunState,
}

impl<'p> AssessmentRun<'p> {
    pub fn start(profile: &'p AssessmentProfile) -> Result<Self, InstrumentError> {
        if profile.questions.is_empty() {
            return Err(InstrumentError::InvalidProfile {
                profile_id: profile.id.clone(),
            });
        }
        Ok(Self {
            profile,
            ledger: ResponseLedger::new(),
            state: RunState::InProgress { step: 0 },
        })
    }

    pub fn profile(&self) -> &'p AssessmentProfile {
        self.profile
    }

    pub fn ledger(&self) -> &ResponseLedger {
        &self.ledger
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == RunState::Completed
    }

    /// The question awaiting an answer, or `None` once completed.
    pub fn current_question(&self) -> Option<&'p Question> {
        match self.state {
            RunState::InProgress { step } => self.profile.questions.get(step),
            RunState::Completed => None,
        }
    }

    /// Fraction of the profile stepped through, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        match self.state {
            RunState::InProgress { step } => step as f64 / self.profile.questions.len() as f64,
            RunState::Completed => 1.0,
        }
    }

    /// Answer the current question and advance. Answering the last question
    /// completes the run.
    pub fn answer(&mut self, value: AnswerValue) -> Result<RunState, InstrumentError> {
        let step = match self.state {
            RunState::InProgress { step } => step,
            RunState::Completed => {
                return Err(InstrumentError::RunCompleted {
                    profile_id: self.profile.id.clone(),
                });
            }
        };

        let question = &self.profile.questions[step];
        self.ledger.record(question.id.clone(), value);

        self.state = if step + 1 >= self.profile.questions.len() {
            RunState::Completed
        } else {
            RunState::InProgress { step: step + 1 }
        };
        Ok(self.state)
    }

    /// Overwrite the answer to any question in the profile without moving the step.
    pub fn revise(&mut self, question_id: &str, value: AnswerValue) -> Result<(), InstrumentError> {
        if !self.profile.contains_question(question_id) {
            return Err(InstrumentError::UnknownQuestion {
                profile_id: self.profile.id.clone(),
                question_id: question_id.to_string(),
            });
        }
        self.ledger.record(question_id, value);
        Ok(())
    }

    /// Finish early. Unanswered questions score as "Never".
    pub fn complete(&mut self) {
        self.state = RunState::Completed;
    }

    /// Discard every answer and return to the first question.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.state = RunState::InProgress { step: 0 };
    }

    /// Score the current ledger snapshot.
    pub fn diagnosis(&self) -> Result<DiagnosisResult, InstrumentError> {
        scoring::compute(self.profile, &self.ledger)
    }
}
