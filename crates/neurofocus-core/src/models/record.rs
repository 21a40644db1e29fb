use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::diagnosis::DiagnosisResult;
use super::profile::AssessmentProfile;
use super::report::{ReportDocument, ReportQuestion};

/// A completed screener as kept in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub completed_at: jiff::Timestamp,
    pub profile_id: String,
    pub profile_title: String,
    pub diagnosis: DiagnosisResult,
    pub transcript: Vec<ReportQuestion>,
}

impl ScreeningRecord {
    /// Snapshot a finished run. The transcript is taken from the assembled
    /// report so history and exported documents always agree.
    pub fn new(
        profile: &AssessmentProfile,
        diagnosis: &DiagnosisResult,
        report: &ReportDocument,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at: jiff::Timestamp::now(),
            profile_id: profile.id.clone(),
            profile_title: profile.title.clone(),
            diagnosis: diagnosis.clone(),
            transcript: report.questions.clone(),
        }
    }
}
