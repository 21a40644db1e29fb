//! On-disk shape of history records.
//!
//! Categories and bands are kept as plain labels so that renaming or removing
//! a category never makes old history unreadable.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use neurofocus_core::models::category::Category;
use neurofocus_core::models::diagnosis::{CategoryInsight, DiagnosisResult, LikelihoodBand};
use neurofocus_core::models::record::ScreeningRecord;
use neurofocus_core::models::report::ReportQuestion;
use neurofocus_instruments::scoring::classify;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredInsight {
    pub category: String,
    pub score: u32,
    pub max_score: u32,
    pub insight_text: String,
    pub clinician_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Uuid,
    pub completed_at: jiff::Timestamp,
    #[serde(default)]
    pub profile_id: String,
    pub profile_title: String,
    pub score: u32,
    pub max_score: u32,
    pub category: String,
    pub description: String,
    pub insights: Vec<StoredInsight>,
    #[serde(default)]
    pub questions: Vec<ReportQuestion>,
}

impl From<&CategoryInsight> for StoredInsight {
    fn from(insight: &CategoryInsight) -> Self {
        Self {
            category: insight.category.label().to_string(),
            score: insight.score,
            max_score: insight.max_score,
            insight_text: insight.insight_text.clone(),
            clinician_note: insight.clinician_note.clone(),
        }
    }
}

impl StoredInsight {
    /// Unknown category labels fall back to [`Category::DEFAULT`].
    pub fn into_insight(self, record_id: Uuid) -> CategoryInsight {
        let category = match Category::from_label(&self.category) {
            Some(category) => category,
            None => {
                warn!(
                    record_id = %record_id,
                    label = %self.category,
                    fallback = %Category::DEFAULT,
                    "unknown stored category, using default"
                );
                Category::DEFAULT
            }
        };
        CategoryInsight {
            category,
            score: self.score,
            max_score: self.max_score,
            insight_text: self.insight_text,
            clinician_note: self.clinician_note,
        }
    }
}

impl From<&ScreeningRecord> for StoredRecord {
    fn from(record: &ScreeningRecord) -> Self {
        Self {
            id: record.id,
            completed_at: record.completed_at,
            profile_id: record.profile_id.clone(),
            profile_title: record.profile_title.clone(),
            score: record.diagnosis.score,
            max_score: record.diagnosis.max_score,
            category: record.diagnosis.category.label().to_string(),
            description: record.diagnosis.description.clone(),
            insights: record.diagnosis.insights.iter().map(StoredInsight::from).collect(),
            questions: record.transcript.clone(),
        }
    }
}

impl StoredRecord {
    /// Rebuild the domain record. An unknown band label is re-derived from the
    /// stored totals; an unknown insight category falls back to the default.
    /// Neither drops the record.
    pub fn into_record(self) -> ScreeningRecord {
        let band = match LikelihoodBand::from_label(&self.category) {
            Some(band) => band,
            None => {
                let band = classify(self.score, self.max_score);
                warn!(
                    record_id = %self.id,
                    label = %self.category,
                    fallback = %band,
                    "unknown stored result band, re-derived from score"
                );
                band
            }
        };

        let id = self.id;
        let insights = self
            .insights
            .into_iter()
            .map(|insight| insight.into_insight(id))
            .collect();

        ScreeningRecord {
            id,
            completed_at: self.completed_at,
            profile_id: self.profile_id,
            profile_title: self.profile_title,
            diagnosis: DiagnosisResult {
                score: self.score,
                max_score: self.max_score,
                category: band,
                description: self.description,
                accent: band.accent(),
                insights,
            },
            transcript: self.questions,
        }
    }
}
