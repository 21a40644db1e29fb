//! neurofocus-instruments
//!
//! Screener definitions, reading modules, the scoring engine and the
//! assessment-run state machine. Pure data and pure functions — no I/O.

pub mod education;
pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use neurofocus_core::models::diagnosis::DiagnosisResult;
use neurofocus_core::models::ledger::ResponseLedger;
use neurofocus_core::models::profile::AssessmentProfile;

use error::InstrumentError;
use scoring::LedgerIssue;

/// Trait implemented by each built-in screener.
pub trait Screener: Send + Sync {
    /// The static profile backing this screener.
    fn profile(&self) -> &AssessmentProfile;

    /// Unique identifier (e.g., "nhs_adult", "deep_dive").
    fn id(&self) -> &str {
        &self.profile().id
    }

    /// Human-readable title (e.g., "NHS Adult Screener").
    fn title(&self) -> &str {
        &self.profile().title
    }

    /// Report ledger entries that do not belong to this screener.
    ///
    /// Scoring ignores such entries; hosts taking answers from outside input
    /// use this to reject mistyped question ids.
    fn validate_ledger(&self, ledger: &ResponseLedger) -> Vec<LedgerIssue> {
        let profile = self.profile();
        ledger
            .question_ids()
            .filter(|id| !profile.contains_question(id))
            .map(|id| LedgerIssue {
                question_id: id.to_string(),
                message: format!("{}: question '{id}' is not part of this screener", self.title()),
            })
            .collect()
    }

    /// Score a ledger against this screener's profile.
    fn score(&self, ledger: &ResponseLedger) -> Result<DiagnosisResult, InstrumentError> {
        scoring::compute(self.profile(), ledger)
    }
}

/// Return all registered screeners, in display order.
pub fn all_screeners() -> Vec<Box<dyn Screener>> {
    vec![
        Box::new(instruments::nhs_adult::NhsAdultScreener),
        Box::new(instruments::deep_dive::DeepDiveAssessment),
    ]
}

/// Look up a screener by ID.
pub fn get_screener(id: &str) -> Option<Box<dyn Screener>> {
    all_screeners().into_iter().find(|s| s.id() == id)
}
